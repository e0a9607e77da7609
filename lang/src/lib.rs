//! Syntax-aware lexing for the ChucK audio programming language.
//!
//! This crate contains the lexer an editor uses to style [ChucK](https://chuck.stanford.edu/)
//! source as it is typed, the language identity the editor registers it under, the style
//! configuration layered on top, and the glue between a script player view and a running ChucK
//! virtual machine.
//!

#[macro_use]
extern crate static_assertions;

pub mod config;
pub mod runtime;
pub mod toolchain;
