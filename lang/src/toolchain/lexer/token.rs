use std::fmt::Display;

use super::keywords::KeywordSet;

/// Represents a single lexical token of ChucK source.
///
/// Because the lexer considers blank space as a [IgnoredKind::BlankSpace] token, and unrecognized
/// characters as [IgnoredKind::Unknown] tokens, every character in the input string is covered by
/// exactly one [Token].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'s> {
    /// The kind of Token.
    pub kind: TokenKind,

    /// The substring representing the Token.
    pub string: &'s str,

    /// Byte offset of the substring in the scanned text.
    pub offset: usize,

    /// The 1-based line position in the input string.
    pub line: i32,

    /// The 1-based character column on the line.
    pub column: i32,
}

impl<'s> Token<'s> {
    pub fn new(
        kind: TokenKind,
        string: &'s str,
        offset: usize,
        line: i32,
        column: i32,
    ) -> Token<'s> {
        Token { kind, string, offset, line, column }
    }

    /// The byte range this token covers in the scanned text.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.string.len()
    }
}

/// An enumeration of all possible Token types the scanner produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of operator characters, possibly with special meaning.
    ///
    /// Operator characters are:
    ///
    /// `'+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '!' | '&' | '|' | '^' | '~' | '?' | ':' |
    /// '@' | '$' | '#'`
    ///
    /// A run never swallows the start of a comment. Operators that matter when reading ChucK are
    /// identified with [OperatorKind].
    Operator { kind: OperatorKind },

    Delimiter { kind: DelimiterKind },

    /// A name starting with a letter or underscore and followed by 0 or more alphanumeric
    /// characters or underscores, that is in no keyword set.
    Identifier,

    /// A name that matched one of the keyword sets.
    Word { set: KeywordSet },

    /// Blank space and comments.
    Ignored { kind: IgnoredKind },

    /// A literal value in the code.
    Literal { kind: LiteralKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorKind {
    /// The `=>` ChucK operator.
    Chuck,

    /// The `@=>` reference assignment operator.
    AtChuck,

    /// The `=<` unchuck operator.
    Unchuck,

    /// The `=^` upchuck operator.
    Upchuck,

    /// The `::` duration operator, as in `1::second`.
    Duration,

    /// The `<<<` opening of a debug print.
    PrintOpen,

    /// The `>>>` closing of a debug print.
    PrintClose,

    /// Any other operator, `+=>` or `!=` for example.
    Name,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelimiterKind {
    /// `}` single-character delimiter.
    BraceClose,

    /// `{` single-character delimiter.
    BraceOpen,

    /// `]` single-character delimiter.
    BracketClose,

    /// `[` single-character delimiter.
    BracketOpen,

    /// `,` single-character delimiter.
    Comma,

    /// `.` single-character delimiter, when not starting a number.
    Dot,

    /// `)` single-character delimiter.
    ParenClose,

    /// `(` single-character delimiter.
    ParenOpen,

    /// `;` single-character delimiter.
    Semicolon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoredKind {
    /// Blank space, including some extended characters like the vertical tab. See
    /// `is_blank_space()` for details.
    BlankSpace,

    /// A `/* */` comment, or the part of one that falls on the scanned line. `terminated` is
    /// false if the scan ended before the closing `*/`.
    BlockComment { terminated: bool },

    /// A `/** */` documentation comment, or the part of one that falls on the scanned line.
    DocComment { terminated: bool },

    /// A `///` documentation comment terminated by the end of the line or input.
    DocLineComment,

    /// A double-slash comment terminated by the end of the line or input.
    LineComment,

    /// Anything that the lexer didn't recognize.
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    /// A single-quoted character literal, such as `'a'` or `'\n'`.
    Character { terminated: bool },

    /// A floating point numeric literal.
    FloatingPoint { kind: FloatKind },

    /// An integer numeric literal.
    Integer { kind: IntegerKind },

    /// A double-quoted string. If it has backslash (`\`) escape characters in it `has_escapes`
    /// is true. `terminated` is false if the line ended before the closing quote.
    String { has_escapes: bool, terminated: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegerKind {
    /// A base-10 integer number, `0` for example.
    Decimal,

    /// `0x` or `0X` followed by base-16 digits, `0xdeadbeef` for example.
    Hexadecimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatKind {
    /// A number with a single dot, `1.0` or `.5` for example.
    Simple,

    /// A number followed by an `e` and an optionally signed exponent, `1.5e-3` for example.
    Scientific,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            TokenKind::Operator { kind: OperatorKind::Chuck } => "chuck '=>'",
            TokenKind::Operator { kind: OperatorKind::AtChuck } => "at-chuck '@=>'",
            TokenKind::Operator { kind: OperatorKind::Unchuck } => "unchuck '=<'",
            TokenKind::Operator { kind: OperatorKind::Upchuck } => "upchuck '=^'",
            TokenKind::Operator { kind: OperatorKind::Duration } => "duration '::'",
            TokenKind::Operator { kind: OperatorKind::PrintOpen } => "print open '<<<'",
            TokenKind::Operator { kind: OperatorKind::PrintClose } => "print close '>>>'",
            TokenKind::Operator { kind: OperatorKind::Name } => "operator",

            TokenKind::Delimiter { kind: DelimiterKind::BraceClose } => "closing brace '}'",
            TokenKind::Delimiter { kind: DelimiterKind::BraceOpen } => "opening brace '{'",
            TokenKind::Delimiter { kind: DelimiterKind::BracketClose } => "closing bracket ']'",
            TokenKind::Delimiter { kind: DelimiterKind::BracketOpen } => "opening bracket '['",
            TokenKind::Delimiter { kind: DelimiterKind::Comma } => "comma ','",
            TokenKind::Delimiter { kind: DelimiterKind::Dot } => "dot '.'",
            TokenKind::Delimiter { kind: DelimiterKind::ParenClose } => "closing parenthesis ')'",
            TokenKind::Delimiter { kind: DelimiterKind::ParenOpen } => "opening parenthesis '('",
            TokenKind::Delimiter { kind: DelimiterKind::Semicolon } => "semicolon ';'",

            TokenKind::Identifier => "identifier",

            TokenKind::Word { set: KeywordSet::Primary } => "keyword",
            TokenKind::Word { set: KeywordSet::Types } => "primitive type",
            TokenKind::Word { set: KeywordSet::Classes } => "builtin class",
            TokenKind::Word { set: KeywordSet::DocComment } => "doc comment keyword",

            TokenKind::Ignored { kind: IgnoredKind::BlankSpace } => "blank space",
            TokenKind::Ignored { kind: IgnoredKind::BlockComment { terminated: true } } => {
                "block comment"
            }
            TokenKind::Ignored { kind: IgnoredKind::BlockComment { terminated: false } } => {
                "unterminated block comment"
            }
            TokenKind::Ignored { kind: IgnoredKind::DocComment { terminated: true } } => {
                "doc comment"
            }
            TokenKind::Ignored { kind: IgnoredKind::DocComment { terminated: false } } => {
                "unterminated doc comment"
            }
            TokenKind::Ignored { kind: IgnoredKind::DocLineComment } => "doc line comment",
            TokenKind::Ignored { kind: IgnoredKind::LineComment } => "line comment",
            TokenKind::Ignored { kind: IgnoredKind::Unknown } => "unknown",

            TokenKind::Literal { kind: LiteralKind::Character { terminated: true } } => {
                "character literal"
            }
            TokenKind::Literal { kind: LiteralKind::Character { terminated: false } } => {
                "unterminated character literal"
            }
            TokenKind::Literal { kind: LiteralKind::FloatingPoint { kind: _ } } => {
                "floating point literal"
            }
            TokenKind::Literal { kind: LiteralKind::Integer { kind: _ } } => "integer literal",
            TokenKind::Literal { kind: LiteralKind::String { terminated: true, .. } } => {
                "string literal"
            }
            TokenKind::Literal {
                kind: LiteralKind::String { has_escapes: _, terminated: false },
            } => "unterminated string literal",
        };
        f.write_str(s)
    }
}

impl<'s> Display for Token<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            // Many tokens are text-invariant, so repeating the token text is redundant.
            TokenKind::Delimiter { kind: _ }
            | TokenKind::Ignored { kind: _ }
            | TokenKind::Operator { kind: OperatorKind::Chuck }
            | TokenKind::Operator { kind: OperatorKind::AtChuck }
            | TokenKind::Operator { kind: OperatorKind::Unchuck }
            | TokenKind::Operator { kind: OperatorKind::Upchuck }
            | TokenKind::Operator { kind: OperatorKind::Duration }
            | TokenKind::Operator { kind: OperatorKind::PrintOpen }
            | TokenKind::Operator { kind: OperatorKind::PrintClose } => {
                f.write_fmt(format_args!("{}:{} {}", self.line, self.column, self.kind))
            }

            TokenKind::Operator { kind: OperatorKind::Name }
            | TokenKind::Identifier
            | TokenKind::Word { set: _ }
            | TokenKind::Literal { kind: _ } => f.write_fmt(format_args!(
                "{}:{} {} '{}'",
                self.line, self.column, self.kind, self.string
            )),
        }
    }
}
