use crate::toolchain::diagnostics::diagnostic_emitter::Diagnostic;
use crate::toolchain::diagnostics::diagnostic_emitter::DiagnosticConsumer;
use crate::toolchain::diagnostics::diagnostic_emitter::DiagnosticLevel;
use crate::toolchain::diagnostics::diagnostic_emitter::DiagnosticMessage;
use crate::toolchain::diagnostics::diagnostic_kind::*;
use crate::toolchain::diagnostics::DiagnosticLocation;

use super::keywords::KeywordLookup;
use super::token::DelimiterKind;
use super::token::FloatKind;
use super::token::IgnoredKind;
use super::token::IntegerKind;
use super::token::LiteralKind;
use super::token::OperatorKind;
use super::token::Token;
use super::token::TokenKind;

/// The scanner state at a line boundary.
///
/// Only comments span lines in this grammar, so this is all a scan needs to restart from the
/// beginning of any line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineState {
    #[default]
    Default,

    /// Inside a `/* */` comment.
    BlockComment,

    /// Inside a `/** */` comment.
    DocComment,
}

/// Token iterator over C-family source text.
///
/// The cursor knows nothing about any particular language's vocabulary. Every scanned name is
/// resolved through the [KeywordLookup] it was built with.
///
/// Also tracks input position by byte offset, line, and column. Design roughly inspired by the
/// rustc lexer Cursor.
pub struct Cursor<'s, 'k, 'd> {
    file_name: &'s str,
    // An iterator over the input character string.
    chars: std::str::Chars<'s>,
    // The input starting at the beginning of the current token.
    string: &'s str,
    offset: usize,
    line: i32,
    column: i32,
    state: LineState,
    keywords: &'k dyn KeywordLookup,
    diags: &'d mut dyn DiagnosticConsumer,
}

impl<'s, 'k, 'd> Iterator for Cursor<'s, 'k, 'd> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        // Collect string position at the start of the token.
        let line = self.line;
        let column = self.column;
        let offset = self.offset;

        // Continue a comment carried over from a previous line.
        if self.state != LineState::Default {
            if self.is_eof() {
                return None;
            }
            let kind = self.block_comment(self.state == LineState::DocComment);
            let token_str = self.extract_substring();
            return Some(Token::new(kind, token_str, offset, line, column));
        }

        let first_char = self.bump()?;

        let token_kind = match first_char {
            // Blank spaces.
            c if is_blank_space(c) => self.blank_space(),

            // Names, which may turn out to be keywords.
            c if is_identifier_start(c) => {
                self.eat_while(is_identifier);
                TokenKind::Identifier
            }

            // Literal numbers start with a digit, or a dot followed by a digit.
            '0'..='9' => self.number(first_char),
            '.' if self.first().is_ascii_digit() => self.fraction(),

            '"' => {
                let (has_escapes, terminated) = self.scan_for_delimiter_or_escapes('"');
                TokenKind::Literal { kind: LiteralKind::String { has_escapes, terminated } }
            }

            '\'' => {
                let (_, terminated) = self.scan_for_delimiter_or_escapes('\'');
                TokenKind::Literal { kind: LiteralKind::Character { terminated } }
            }

            // Single-character delimiters.
            '(' => TokenKind::Delimiter { kind: DelimiterKind::ParenOpen },
            ')' => TokenKind::Delimiter { kind: DelimiterKind::ParenClose },
            '{' => TokenKind::Delimiter { kind: DelimiterKind::BraceOpen },
            '}' => TokenKind::Delimiter { kind: DelimiterKind::BraceClose },
            '[' => TokenKind::Delimiter { kind: DelimiterKind::BracketOpen },
            ']' => TokenKind::Delimiter { kind: DelimiterKind::BracketClose },
            ',' => TokenKind::Delimiter { kind: DelimiterKind::Comma },
            ';' => TokenKind::Delimiter { kind: DelimiterKind::Semicolon },
            '.' => TokenKind::Delimiter { kind: DelimiterKind::Dot },

            // Comments are only lexed as such at the start of an operator run.
            '/' if self.first() == '/' => self.line_comment(),
            '/' if self.first() == '*' => {
                self.bump();
                // `/**/` is an empty plain comment, not the start of a doc comment.
                let is_doc = self.first() == '*' && self.second() != '/';
                self.block_comment(is_doc)
            }

            c if is_operator(c) => self.operator(),

            // We coalesce unknown characters into a single Token, to cut down on the number of
            // Tokens that we lex from a string of garbage input.
            _ => {
                self.eat_while(is_unknown);
                self.report_unknown(line, column);
                TokenKind::Ignored { kind: IgnoredKind::Unknown }
            }
        };

        // End of token, extract the substring.
        let token_str = self.extract_substring();

        // Fixup names and operators whose text gives them a more specific kind.
        let token_kind = match token_kind {
            TokenKind::Identifier => match self.keywords.lookup(token_str) {
                Some(set) if set.applies_to_code() => TokenKind::Word { set },
                _ => TokenKind::Identifier,
            },
            TokenKind::Operator { kind: _ } => {
                TokenKind::Operator { kind: operator_kind(token_str) }
            }
            _ => token_kind,
        };

        Some(Token::new(token_kind, token_str, offset, line, column))
    }
}

impl<'s, 'k, 'd> Cursor<'s, 'k, 'd> {
    pub const EOF: char = '\0';

    pub fn new(
        input: &'s str,
        keywords: &'k dyn KeywordLookup,
        diags: &'d mut dyn DiagnosticConsumer,
    ) -> Cursor<'s, 'k, 'd> {
        Cursor {
            file_name: "",
            chars: input.chars(),
            string: input,
            offset: 0,
            line: 1,
            column: 1,
            state: LineState::Default,
            keywords,
            diags,
        }
    }

    /// Names the input in diagnostics.
    pub fn with_file_name(mut self, file_name: &'s str) -> Self {
        self.file_name = file_name;
        self
    }

    /// Starts scanning as if the input began at `line` (1-based) and byte `offset` of a larger
    /// document, inside the given state.
    pub fn resume_at(mut self, state: LineState, line: i32, offset: usize) -> Self {
        self.state = state;
        self.line = line;
        self.offset = offset;
        self
    }

    /// The scanner state at the current position. After the iterator is exhausted this is the
    /// state the next line should be resumed with.
    pub fn line_state(&self) -> LineState {
        self.state
    }

    fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(Self::EOF)
    }

    fn second(&self) -> char {
        self.chars.clone().nth(1).unwrap_or(Self::EOF)
    }

    fn third(&self) -> char {
        self.chars.clone().nth(2).unwrap_or(Self::EOF)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    fn extract_substring(&mut self) -> &'s str {
        let consumed = self.string.len() - self.chars.as_str().len();
        let (prefix, suffix) = self.string.split_at(consumed);
        self.string = suffix;
        self.offset += consumed;
        prefix
    }

    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_eof() && predicate(self.first()) {
            self.bump();
        }
    }

    // The line end is not part of the comment.
    fn line_comment(&mut self) -> TokenKind {
        // Consume the second slash.
        self.bump();
        // `///` starts a doc comment, but `////` and longer are plain rulers.
        let is_doc = self.first() == '/' && self.second() != '/';
        self.eat_while(|c| c != '\n');
        if is_doc {
            TokenKind::Ignored { kind: IgnoredKind::DocLineComment }
        } else {
            TokenKind::Ignored { kind: IgnoredKind::LineComment }
        }
    }

    // Block comments don't nest. Reaching the end of input leaves the cursor in the matching
    // comment state.
    fn block_comment(&mut self, is_doc: bool) -> TokenKind {
        let terminated = loop {
            match self.bump() {
                Some('*') if self.first() == '/' => {
                    self.bump();
                    break true;
                }
                Some(_) => (),
                None => break false,
            }
        };

        self.state = match (terminated, is_doc) {
            (true, _) => LineState::Default,
            (false, true) => LineState::DocComment,
            (false, false) => LineState::BlockComment,
        };

        if is_doc {
            TokenKind::Ignored { kind: IgnoredKind::DocComment { terminated } }
        } else {
            TokenKind::Ignored { kind: IgnoredKind::BlockComment { terminated } }
        }
    }

    fn blank_space(&mut self) -> TokenKind {
        self.eat_while(is_blank_space);
        TokenKind::Ignored { kind: IgnoredKind::BlankSpace }
    }

    // A run of operator characters that stops short of any comment start.
    fn operator(&mut self) -> TokenKind {
        while !self.is_eof()
            && is_operator(self.first())
            && !(self.first() == '/' && matches!(self.second(), '/' | '*'))
        {
            self.bump();
        }
        TokenKind::Operator { kind: OperatorKind::Name }
    }

    fn number(&mut self, first: char) -> TokenKind {
        // Hexadecimal numbers need at least one digit after the `0x`.
        if first == '0' && matches!(self.first(), 'x' | 'X') && self.second().is_ascii_hexdigit()
        {
            self.bump();
            self.eat_while(|c| c.is_ascii_hexdigit());
            return TokenKind::Literal {
                kind: LiteralKind::Integer { kind: IntegerKind::Hexadecimal },
            };
        }

        self.eat_while(|c| c.is_ascii_digit());

        // A trailing dot belongs to the number, unless a name follows it, as in `2.abs()`, or
        // it is the start of a `..` sequence.
        if self.first() == '.' && !is_identifier_start(self.second()) && self.second() != '.' {
            self.bump();
            return self.fraction();
        }

        if self.exponent() {
            TokenKind::Literal { kind: LiteralKind::FloatingPoint { kind: FloatKind::Scientific } }
        } else {
            TokenKind::Literal { kind: LiteralKind::Integer { kind: IntegerKind::Decimal } }
        }
    }

    // Digits following a decimal point, plus any exponent.
    fn fraction(&mut self) -> TokenKind {
        self.eat_while(|c| c.is_ascii_digit());
        if self.exponent() {
            TokenKind::Literal { kind: LiteralKind::FloatingPoint { kind: FloatKind::Scientific } }
        } else {
            TokenKind::Literal { kind: LiteralKind::FloatingPoint { kind: FloatKind::Simple } }
        }
    }

    // Consumes an `e` exponent if one follows, returns true if it did.
    fn exponent(&mut self) -> bool {
        if !matches!(self.first(), 'e' | 'E') {
            return false;
        }
        let signed = matches!(self.second(), '+' | '-');
        let digit = if signed { self.third() } else { self.second() };
        if !digit.is_ascii_digit() {
            return false;
        }
        self.bump();
        if signed {
            self.bump();
        }
        self.eat_while(|c| c.is_ascii_digit());
        true
    }

    // Returns (has_escapes, terminated). A quoted literal never extends past the end of its line.
    fn scan_for_delimiter_or_escapes(&mut self, delimiter: char) -> (bool, bool) {
        let mut has_escapes = false;
        loop {
            if self.is_eof() {
                return (has_escapes, false);
            }
            match self.first() {
                c if c == delimiter => {
                    self.bump();
                    return (has_escapes, true);
                }
                '\n' | '\r' => return (has_escapes, false),
                '\\' => {
                    has_escapes = true;
                    self.bump();
                    if !matches!(self.first(), '\n' | '\r') {
                        self.bump();
                    }
                }
                _ => {
                    self.bump();
                }
            }
        }
    }

    fn report_unknown(&mut self, line: i32, column: i32) {
        // The cursor builds its own locations, as the line is still being scanned.
        let location = DiagnosticLocation {
            file_name: self.file_name,
            line_number: line,
            column_number: column,
            line: "",
        };
        let consumed = self.string.len() - self.chars.as_str().len();
        let msg = DiagnosticMessage {
            kind: DiagnosticKind::LexerError { kind: LexerDiagnosticKind::UnknownToken },
            location,
            body: format!("Unrecognized character sequence '{}'.", &self.string[..consumed]),
        };
        tracing::trace!(line, column, "unknown character sequence");
        self.diags.handle_diagnostic(Diagnostic::new(DiagnosticLevel::Error, msg, Vec::new()));
    }
}

fn operator_kind(s: &str) -> OperatorKind {
    match s {
        "=>" => OperatorKind::Chuck,
        "@=>" => OperatorKind::AtChuck,
        "=<" => OperatorKind::Unchuck,
        "=^" => OperatorKind::Upchuck,
        "::" => OperatorKind::Duration,
        "<<<" => OperatorKind::PrintOpen,
        ">>>" => OperatorKind::PrintClose,
        _ => OperatorKind::Name,
    }
}

pub(crate) fn is_blank_space(c: char) -> bool {
    // Copied from the rustc lexer.
    matches!(
        c,
        // Usual ASCII suspects
        '\u{0009}'   // \t
        | '\u{000A}' // \n
        | '\u{000B}' // vertical tab
        | '\u{000C}' // form feed
        | '\u{000D}' // \r
        | '\u{0020}' // space

        // NEXT LINE from latin1
        | '\u{0085}'

        // Bidi markers
        | '\u{200E}' // LEFT-TO-RIGHT MARK
        | '\u{200F}' // RIGHT-TO-LEFT MARK

        // Dedicated whitespace characters from Unicode
        | '\u{2028}' // LINE SEPARATOR
        | '\u{2029}' // PARAGRAPH SEPARATOR
    )
}

pub(crate) fn is_operator(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '!' | '&' | '|' | '^' | '~' | '?' | ':'
            | '@' | '$' | '#'
    )
}

pub(crate) fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

pub(crate) fn is_identifier(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_unknown(c: char) -> bool {
    match c {
        u if is_blank_space(u) => false,
        u if is_identifier(u) => false,
        u if is_operator(u) => false,
        '(' | ')' | '{' | '}' | '[' | ']' | ',' | ';' | '.' | '"' | '\'' => false,
        _ => true,
    }
}
