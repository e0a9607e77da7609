use crate::toolchain::diagnostics::diagnostic_emitter::{DiagnosticConsumer, DiagnosticLevel};
use crate::toolchain::diagnostics::{
    DiagnosticKind, DiagnosticLocation, DiagnosticLocationTranslator, LexerDiagnosticKind,
};
use crate::toolchain::source;

use super::cursor::Cursor;
use super::keywords::KeywordLookup;
use super::style::{style_runs, StyleRun};
use super::token::{IgnoredKind, LiteralKind, TokenKind};
use super::{Token, TokenDiagnosticEmitter, TokenIndex};

/// Every token of a whole source document, plus the line slices needed to report on them.
pub struct TokenizedBuffer<'s> {
    tokens: Vec<Token<'s>>,
    lines: Vec<&'s str>,
    source: &'s source::SourceBuffer<'s>,
}

impl<'s> TokenizedBuffer<'s> {
    pub fn tokenize(
        source: &'s source::SourceBuffer<'s>,
        keywords: &dyn KeywordLookup,
        diags: &mut impl DiagnosticConsumer,
    ) -> TokenizedBuffer<'s> {
        let code = source.code();
        let tokens: Vec<Token<'s>> = Cursor::new(code, keywords, &mut *diags)
            .with_file_name(source.file_name())
            .collect();
        let lines = code.split_inclusive('\n').collect();
        let buffer = TokenizedBuffer { tokens, lines, source };
        buffer.report_unterminated(diags);
        tracing::debug!(
            file = source.file_name(),
            tokens = buffer.tokens.len(),
            lines = buffer.lines.len(),
            "tokenized source"
        );
        buffer
    }

    pub fn token_at(&self, i: TokenIndex) -> Option<&Token<'s>> {
        self.tokens.get(i)
    }

    pub fn print_tokens(&self) {
        for token in self.tokens.iter() {
            println!("{}", &token);
        }
    }

    pub fn tokens(&self) -> &Vec<Token<'s>> {
        &self.tokens
    }

    /// The source lines, each including its line end if it has one.
    pub fn lines(&self) -> &[&'s str] {
        &self.lines
    }

    /// Style runs covering the whole source, in order.
    pub fn style_runs(&self, keywords: &dyn KeywordLookup) -> Vec<StyleRun> {
        style_runs(&self.tokens, keywords)
    }

    // Unterminated literals and comments are styled like any other token. They are also worth
    // telling the user about, now that the whole document is available for locating them.
    fn report_unterminated(&self, diags: &mut dyn DiagnosticConsumer) {
        let mut emitter = TokenDiagnosticEmitter::new(diags, self);
        for (index, token) in self.tokens.iter().enumerate() {
            let (kind, body) = match token.kind {
                TokenKind::Literal { kind: LiteralKind::String { terminated: false, .. } } => (
                    LexerDiagnosticKind::UnterminatedString,
                    "String literal is missing a closing '\"'.",
                ),
                TokenKind::Literal { kind: LiteralKind::Character { terminated: false } } => (
                    LexerDiagnosticKind::UnterminatedCharacter,
                    "Character literal is missing a closing '''.",
                ),
                TokenKind::Ignored { kind: IgnoredKind::BlockComment { terminated: false } }
                | TokenKind::Ignored { kind: IgnoredKind::DocComment { terminated: false } } => {
                    (LexerDiagnosticKind::UnterminatedComment, "Comment is missing a closing '*/'.")
                }
                _ => continue,
            };
            let diag = emitter
                .build(
                    DiagnosticLevel::Warning,
                    DiagnosticKind::LexerError { kind },
                    index,
                    body.to_string(),
                )
                .build();
            emitter.emit(diag);
        }
    }
}

impl<'s> DiagnosticLocationTranslator<'s, TokenIndex> for TokenizedBuffer<'s> {
    fn get_location(&self, token_index: TokenIndex) -> DiagnosticLocation<'s> {
        let source = self.source;
        let token = self.tokens[token_index];
        // Switch to zero-based line counting.
        let line_index = (token.line - 1) as usize;
        DiagnosticLocation {
            file_name: source.file_name(),
            line_number: token.line,
            column_number: token.column,
            line: self.lines.get(line_index).copied().unwrap_or(""),
        }
    }
}
