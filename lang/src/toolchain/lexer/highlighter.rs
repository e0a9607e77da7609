use crate::toolchain::diagnostics::NullDiagnosticConsumer;

use super::cursor::{Cursor, LineState};
use super::keywords::KeywordLookup;
use super::style::{style_runs, StyleRun};
use super::Token;

/// Incremental, line-at-a-time highlighting for an editor widget.
///
/// The editor feeds lines in order with [LineHighlighter::highlight_line], and calls
/// [LineHighlighter::change_line] when an edit touches a line, after which highlighting restarts
/// from that line. The only state carried between lines is the [LineState] at each line start.
pub struct LineHighlighter<'k> {
    keywords: &'k dyn KeywordLookup,
    // The state at the start of each line up to and including `current_line`.
    line_states: Vec<LineState>,
    current_line: usize,
}

impl<'k> LineHighlighter<'k> {
    pub fn new(keywords: &'k dyn KeywordLookup) -> LineHighlighter<'k> {
        LineHighlighter { keywords, line_states: vec![LineState::Default], current_line: 0 }
    }

    /// Notes that `line` (0-based) changed. Lines before it keep their cached state.
    pub fn change_line(&mut self, line: usize) {
        if line < self.current_line {
            tracing::trace!(line, previous = self.current_line, "rewinding highlighter");
            self.current_line = line;
            self.line_states.truncate(line + 1);
        }
    }

    /// The 0-based index of the line the next call to `highlight_line` will style.
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    /// The state cached at the start of `line`, if that line has been reached.
    pub fn line_state(&self, line: usize) -> Option<LineState> {
        self.line_states.get(line).copied()
    }

    /// Styles the text of the current line and advances to the next. Byte ranges in the returned
    /// runs are relative to the start of `line`.
    pub fn highlight_line(&mut self, line: &str) -> Vec<StyleRun> {
        let state = self.line_states[self.current_line];
        let line_number = i32::try_from(self.current_line + 1).unwrap_or(i32::MAX);

        let mut diags = NullDiagnosticConsumer {};
        let mut cursor =
            Cursor::new(line, self.keywords, &mut diags).resume_at(state, line_number, 0);
        let tokens: Vec<Token> = cursor.by_ref().collect();
        let end_state = cursor.line_state();

        self.current_line += 1;
        self.line_states.truncate(self.current_line);
        self.line_states.push(end_state);

        style_runs(&tokens, self.keywords)
    }
}
