use std::fmt;

/// The enumerated type of all diagnostics the toolchain emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    LexerError { kind: LexerDiagnosticKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexerDiagnosticKind {
    /// A run of characters that doesn't start any token.
    UnknownToken,

    /// A string literal reached the end of its line without a closing `"`.
    UnterminatedString,

    /// A character literal reached the end of its line without a closing `'`.
    UnterminatedCharacter,

    /// A block or doc comment reached the end of input without a closing `*/`.
    UnterminatedComment,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiagnosticKind::LexerError { kind: LexerDiagnosticKind::UnknownToken } => {
                "unknown token"
            }
            DiagnosticKind::LexerError { kind: LexerDiagnosticKind::UnterminatedString } => {
                "unterminated string"
            }
            DiagnosticKind::LexerError { kind: LexerDiagnosticKind::UnterminatedCharacter } => {
                "unterminated character"
            }
            DiagnosticKind::LexerError { kind: LexerDiagnosticKind::UnterminatedComment } => {
                "unterminated comment"
            }
        };
        f.write_str(s)
    }
}
