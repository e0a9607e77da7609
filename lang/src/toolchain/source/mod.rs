//! Source text containers handed to the lexer.

pub mod source_buffer;

pub use source_buffer::SourceBuffer;
pub use source_buffer::SourceError;

/// Builds a [SourceBuffer] from a string literal, named after the file and line of the macro
/// invocation. Intended for tests.
#[macro_export]
macro_rules! chuck {
    ( $s:literal ) => {
        &$crate::toolchain::source::SourceBuffer::new_from_string(
            $s,
            const_format::formatcp!("{}:{}:{}", file!(), line!(), column!()),
        )
    };
}
