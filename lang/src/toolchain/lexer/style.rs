//! Style categories, the visual classification an editor renders each token with.

use std::fmt;
use std::ops::Range;

use super::keywords::{KeywordLookup, KeywordSet};
use super::token::{IgnoredKind, LiteralKind, Token, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Style {
    Default,
    Whitespace,
    Comment,
    LineComment,
    DocComment,
    DocCommentKeyword,
    Number,
    Keyword,
    PrimitiveType,
    BuiltinClass,
    String,
    Character,
    UnterminatedString,
    Operator,
    Identifier,
}

impl Style {
    pub const ALL: [Style; 15] = [
        Style::Default,
        Style::Whitespace,
        Style::Comment,
        Style::LineComment,
        Style::DocComment,
        Style::DocCommentKeyword,
        Style::Number,
        Style::Keyword,
        Style::PrimitiveType,
        Style::BuiltinClass,
        Style::String,
        Style::Character,
        Style::UnterminatedString,
        Style::Operator,
        Style::Identifier,
    ];

    /// The stable name of the style, used as a configuration key.
    pub fn name(self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::Whitespace => "whitespace",
            Style::Comment => "comment",
            Style::LineComment => "line-comment",
            Style::DocComment => "doc-comment",
            Style::DocCommentKeyword => "doc-comment-keyword",
            Style::Number => "number",
            Style::Keyword => "keyword",
            Style::PrimitiveType => "primitive-type",
            Style::BuiltinClass => "builtin-class",
            Style::String => "string",
            Style::Character => "character",
            Style::UnterminatedString => "unterminated-string",
            Style::Operator => "operator",
            Style::Identifier => "identifier",
        }
    }

    pub fn from_name(name: &str) -> Option<Style> {
        Style::ALL.into_iter().find(|style| style.name() == name)
    }

    /// A description suitable for a style editor.
    pub fn description(self) -> &'static str {
        match self {
            Style::Default => "Default",
            Style::Whitespace => "Whitespace",
            Style::Comment => "C comment",
            Style::LineComment => "C++ comment",
            Style::DocComment => "JavaDoc style C comment",
            Style::DocCommentKeyword => "JavaDoc keyword",
            Style::Number => "Number",
            Style::Keyword => "Keyword",
            Style::PrimitiveType => "Primitive type",
            Style::BuiltinClass => "Builtin class",
            Style::String => "Double-quoted string",
            Style::Character => "Single-quoted character",
            Style::UnterminatedString => "Unclosed string",
            Style::Operator => "Operator",
            Style::Identifier => "Identifier",
        }
    }

    /// Comment styles, for editors that toggle or fold comments.
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            Style::Comment | Style::LineComment | Style::DocComment | Style::DocCommentKeyword
        )
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<TokenKind> for Style {
    fn from(kind: TokenKind) -> Style {
        match kind {
            TokenKind::Operator { kind: _ } | TokenKind::Delimiter { kind: _ } => Style::Operator,
            TokenKind::Identifier => Style::Identifier,
            TokenKind::Word { set: KeywordSet::Primary } => Style::Keyword,
            TokenKind::Word { set: KeywordSet::Types } => Style::PrimitiveType,
            TokenKind::Word { set: KeywordSet::Classes } => Style::BuiltinClass,
            TokenKind::Word { set: KeywordSet::DocComment } => Style::DocCommentKeyword,
            TokenKind::Ignored { kind: IgnoredKind::BlankSpace } => Style::Whitespace,
            TokenKind::Ignored { kind: IgnoredKind::BlockComment { terminated: _ } } => {
                Style::Comment
            }
            TokenKind::Ignored { kind: IgnoredKind::DocComment { terminated: _ } }
            | TokenKind::Ignored { kind: IgnoredKind::DocLineComment } => Style::DocComment,
            TokenKind::Ignored { kind: IgnoredKind::LineComment } => Style::LineComment,
            TokenKind::Ignored { kind: IgnoredKind::Unknown } => Style::Default,
            TokenKind::Literal { kind: LiteralKind::FloatingPoint { kind: _ } }
            | TokenKind::Literal { kind: LiteralKind::Integer { kind: _ } } => Style::Number,
            TokenKind::Literal { kind: LiteralKind::String { terminated: true, .. } } => {
                Style::String
            }
            TokenKind::Literal { kind: LiteralKind::Character { terminated: true } } => {
                Style::Character
            }
            TokenKind::Literal { kind: LiteralKind::String { has_escapes: _, terminated: false } }
            | TokenKind::Literal { kind: LiteralKind::Character { terminated: false } } => {
                Style::UnterminatedString
            }
        }
    }
}

/// A byte range of scanned text rendered with a single style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRun {
    pub range: Range<usize>,
    pub style: Style,
}

/// Converts tokens into style runs covering the same text.
///
/// Doc comments are split so that an `@` followed by a doc comment keyword is styled as a
/// [Style::DocCommentKeyword].
pub fn style_runs<'a, 's: 'a>(
    tokens: impl IntoIterator<Item = &'a Token<'s>>,
    keywords: &dyn KeywordLookup,
) -> Vec<StyleRun> {
    let mut runs = Vec::new();
    for token in tokens {
        let style = Style::from(token.kind);
        if style == Style::DocComment {
            push_doc_comment_runs(&mut runs, token, keywords);
        } else {
            runs.push(StyleRun { range: token.range(), style });
        }
    }
    runs
}

fn push_doc_comment_runs(runs: &mut Vec<StyleRun>, token: &Token, keywords: &dyn KeywordLookup) {
    let text = token.string;
    let mut run_start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((at, c)) = chars.next() {
        if c != '@' {
            continue;
        }
        let word_start = at + c.len_utf8();
        let word_len = text[word_start..]
            .char_indices()
            .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
            .map_or(text.len() - word_start, |(i, _)| i);
        let word = &text[word_start..word_start + word_len];
        if word.is_empty() || keywords.lookup(word) != Some(KeywordSet::DocComment) {
            continue;
        }
        if run_start < at {
            runs.push(StyleRun {
                range: token.offset + run_start..token.offset + at,
                style: Style::DocComment,
            });
        }
        let word_end = word_start + word_len;
        runs.push(StyleRun {
            range: token.offset + at..token.offset + word_end,
            style: Style::DocCommentKeyword,
        });
        run_start = word_end;
        while chars.peek().is_some_and(|(i, _)| *i < word_end) {
            chars.next();
        }
    }
    if run_start < text.len() {
        runs.push(StyleRun {
            range: token.offset + run_start..token.offset + text.len(),
            style: Style::DocComment,
        });
    }
}
