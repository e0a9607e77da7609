#[cfg(test)]
mod tests {
    use crate::toolchain::lexer::cursor::LineState;
    use crate::toolchain::lexer::highlighter::LineHighlighter;
    use crate::toolchain::lexer::keywords::KeywordTable;
    use crate::toolchain::lexer::style::Style;

    fn styles<'a>(highlighter: &mut LineHighlighter, line: &'a str) -> Vec<(Style, &'a str)> {
        highlighter.highlight_line(line).into_iter().map(|r| (r.style, &line[r.range])).collect()
    }

    #[test]
    fn single_line() {
        let keywords = KeywordTable::new();
        let mut highlighter = LineHighlighter::new(&keywords);
        assert_eq!(highlighter.current_line(), 0);
        assert_eq!(
            styles(&mut highlighter, "1::ms => now;"),
            vec![
                (Style::Number, "1"),
                (Style::Operator, "::"),
                (Style::Keyword, "ms"),
                (Style::Whitespace, " "),
                (Style::Operator, "=>"),
                (Style::Whitespace, " "),
                (Style::Keyword, "now"),
                (Style::Operator, ";"),
            ]
        );
        assert_eq!(highlighter.current_line(), 1);
    }

    #[test]
    fn empty_line() {
        let keywords = KeywordTable::new();
        let mut highlighter = LineHighlighter::new(&keywords);
        assert_eq!(styles(&mut highlighter, ""), vec![]);
        assert_eq!(highlighter.current_line(), 1);
        assert_eq!(highlighter.line_state(1), Some(LineState::Default));
    }

    #[test]
    fn comment_across_lines() {
        let keywords = KeywordTable::new();
        let mut highlighter = LineHighlighter::new(&keywords);
        assert_eq!(
            styles(&mut highlighter, "int x; /* begin"),
            vec![
                (Style::PrimitiveType, "int"),
                (Style::Whitespace, " "),
                (Style::Identifier, "x"),
                (Style::Operator, ";"),
                (Style::Whitespace, " "),
                (Style::Comment, "/* begin"),
            ]
        );
        assert_eq!(highlighter.line_state(1), Some(LineState::BlockComment));
        assert_eq!(styles(&mut highlighter, "while now"), vec![(Style::Comment, "while now")]);
        assert_eq!(styles(&mut highlighter, ""), vec![]);
        assert_eq!(
            styles(&mut highlighter, "end */ spork"),
            vec![(Style::Comment, "end */"), (Style::Whitespace, " "), (Style::Keyword, "spork")]
        );
        assert_eq!(highlighter.line_state(4), Some(LineState::Default));
    }

    #[test]
    fn doc_comment_across_lines() {
        let keywords = KeywordTable::new();
        let mut highlighter = LineHighlighter::new(&keywords);
        assert_eq!(styles(&mut highlighter, "/**"), vec![(Style::DocComment, "/**")]);
        assert_eq!(
            styles(&mut highlighter, " * @param x"),
            vec![
                (Style::DocComment, " * "),
                (Style::DocCommentKeyword, "@param"),
                (Style::DocComment, " x"),
            ]
        );
        assert_eq!(styles(&mut highlighter, " */"), vec![(Style::DocComment, " */")]);
        assert_eq!(highlighter.line_state(3), Some(LineState::Default));
    }

    #[test]
    fn change_line_rewinds() {
        let keywords = KeywordTable::new();
        let mut highlighter = LineHighlighter::new(&keywords);
        styles(&mut highlighter, "/* open");
        styles(&mut highlighter, "still open");
        styles(&mut highlighter, "x */ y");
        assert_eq!(highlighter.current_line(), 3);

        // The user closes the comment on the first line.
        highlighter.change_line(0);
        assert_eq!(highlighter.current_line(), 0);
        assert_eq!(highlighter.line_state(1), None);
        assert_eq!(styles(&mut highlighter, "/* open */"), vec![(Style::Comment, "/* open */")]);
        assert_eq!(
            styles(&mut highlighter, "still open"),
            vec![
                (Style::Identifier, "still"),
                (Style::Whitespace, " "),
                (Style::Identifier, "open"),
            ]
        );
    }

    #[test]
    fn change_line_ahead_is_ignored() {
        let keywords = KeywordTable::new();
        let mut highlighter = LineHighlighter::new(&keywords);
        styles(&mut highlighter, "/* open");
        highlighter.change_line(5);
        assert_eq!(highlighter.current_line(), 1);
        assert_eq!(styles(&mut highlighter, "*/"), vec![(Style::Comment, "*/")]);
    }

    #[test]
    fn rewinding_mid_document_keeps_earlier_state() {
        let keywords = KeywordTable::new();
        let mut highlighter = LineHighlighter::new(&keywords);
        styles(&mut highlighter, "/* a");
        styles(&mut highlighter, "b");
        styles(&mut highlighter, "c */");
        highlighter.change_line(1);
        assert_eq!(highlighter.line_state(1), Some(LineState::BlockComment));
        assert_eq!(styles(&mut highlighter, "b"), vec![(Style::Comment, "b")]);
    }

    #[test]
    fn rehighlighting_is_identical() {
        let keywords = KeywordTable::new();
        let lines = [
            "SinOsc s => dac;",
            "/** @brief loop",
            " forever */",
            "while (true) 1::second => now;",
        ];
        let mut highlighter = LineHighlighter::new(&keywords);
        let first: Vec<_> = lines.iter().map(|l| highlighter.highlight_line(l)).collect();
        highlighter.change_line(0);
        let second: Vec<_> = lines.iter().map(|l| highlighter.highlight_line(l)).collect();
        assert_eq!(first, second);
    }
}
