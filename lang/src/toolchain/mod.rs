//! The ChucK lexing toolchain: source buffers, diagnostics, and the lexer itself.

pub mod diagnostics;
pub mod lexer;
pub mod source;
