use crate::toolchain::diagnostics::DiagnosticConsumer;
use crate::toolchain::source::SourceBuffer;

use super::highlighter::LineHighlighter;
use super::keywords::{KeywordLookup, KeywordTable};
use super::language::{LanguageDescriptor, CHUCK};
use super::style::Style;
use super::token::Token;
use super::tokenized_buffer::TokenizedBuffer;

/// The ChucK lexer: the generic scanner resolving names against the ChucK keyword table.
///
/// A `ChuckLexer` holds no mutable state, so one instance can serve any number of documents
/// and views, from any thread.
#[derive(Clone, Debug, Default)]
pub struct ChuckLexer {
    keywords: KeywordTable,
}

assert_impl_all!(ChuckLexer: Send, Sync);

impl ChuckLexer {
    pub fn new() -> ChuckLexer {
        ChuckLexer { keywords: KeywordTable::new() }
    }

    pub fn language(&self) -> &'static LanguageDescriptor {
        &CHUCK
    }

    /// The space-delimited words of keyword set `set`, or an empty string for unused sets.
    pub fn keywords(&self, set: usize) -> &str {
        self.keywords.keywords(set)
    }

    pub fn keyword_table(&self) -> &KeywordTable {
        &self.keywords
    }

    pub fn tokenize<'s>(
        &self,
        source: &'s SourceBuffer<'s>,
        diags: &mut impl DiagnosticConsumer,
    ) -> TokenizedBuffer<'s> {
        TokenizedBuffer::tokenize(source, &self.keywords, diags)
    }

    pub fn highlighter(&self) -> LineHighlighter<'_> {
        LineHighlighter::new(&self.keywords)
    }

    pub fn style_for(&self, token: &Token) -> Style {
        Style::from(token.kind)
    }
}
