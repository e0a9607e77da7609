//! A ChucK lexer, which splits source text into styled tokens for an editor.
//!
//! The scanner in this module is a generic one for the C-family syntax ChucK shares with Java:
//! comments, string and character literals, numbers, operators, and names. What makes it a ChucK
//! lexer is the [KeywordTable] it consults whenever it finishes scanning a name, deciding whether
//! the name is a keyword, a primitive type, a builtin class, or a plain identifier.
//!
//! The lexer must be fast and tolerant of erroneous or incomplete input, as it runs on every edit.
//! It never fails: every character of the input is covered by some token, and malformed input
//! such as an unterminated string is given its own style. Editors can either tokenize a whole
//! document into a [TokenizedBuffer], or highlight incrementally with a [LineHighlighter], which
//! can restart from any line boundary.
//!

pub mod chuck_lexer;
pub mod cursor;
pub mod highlighter;
pub mod keywords;
pub mod language;
pub mod style;
pub mod token;
pub mod tokenized_buffer;

pub use chuck_lexer::ChuckLexer;
pub use cursor::{Cursor, LineState};
pub use highlighter::LineHighlighter;
pub use keywords::{KeywordLookup, KeywordSet, KeywordTable, NoKeywords, KEYWORD_SET_COUNT};
pub use language::{LanguageDescriptor, CHUCK};
pub use style::{Style, StyleRun};
pub use token::{Token, TokenKind};
pub use tokenized_buffer::TokenizedBuffer;

use crate::toolchain::diagnostics::DiagnosticEmitter;

pub type TokenIndex = usize;
pub type TokenDiagnosticEmitter<'c, 't, 's> = DiagnosticEmitter<'c, 't, 's, TokenIndex>;

#[cfg(test)]
mod highlighter_unittests;
#[cfg(test)]
mod keywords_unittests;
