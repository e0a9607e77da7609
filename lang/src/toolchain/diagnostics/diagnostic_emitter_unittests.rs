#[cfg(test)]
mod tests {
    use crate::toolchain::diagnostics::diagnostic_emitter::*;
    use crate::toolchain::diagnostics::{DiagnosticKind, LexerDiagnosticKind};

    // Locates by line index into a fixed set of lines, always at column 2.
    struct LineTranslator<'s> {
        lines: Vec<&'s str>,
    }

    impl<'s> DiagnosticLocationTranslator<'s, usize> for LineTranslator<'s> {
        fn get_location(&self, loc: usize) -> DiagnosticLocation<'s> {
            DiagnosticLocation {
                file_name: "test.ck",
                line_number: loc as i32 + 1,
                column_number: 2,
                line: self.lines.get(loc).copied().unwrap_or(""),
            }
        }
    }

    const UNKNOWN: DiagnosticKind =
        DiagnosticKind::LexerError { kind: LexerDiagnosticKind::UnknownToken };
    const UNTERMINATED: DiagnosticKind =
        DiagnosticKind::LexerError { kind: LexerDiagnosticKind::UnterminatedString };

    #[test]
    fn location_display() {
        let mut location =
            DiagnosticLocation { file_name: "a.ck", line_number: 3, column_number: 7, line: "" };
        assert_eq!(location.to_string(), "a.ck:3:7");
        location.column_number = 0;
        assert_eq!(location.to_string(), "a.ck:3");
        location.line_number = 0;
        assert_eq!(location.to_string(), "a.ck");
    }

    #[test]
    fn emitter_builds_with_notes() {
        let translator = LineTranslator { lines: vec!["one\n", "two\n", "three"] };
        let mut consumer = CollectingDiagnosticConsumer::new();
        {
            let mut emitter = DiagnosticEmitter::new(&mut consumer, &translator);
            let diag = emitter
                .build(DiagnosticLevel::Error, UNKNOWN, 1, "bad".to_string())
                .note(UNTERMINATED, 2, "started here".to_string())
                .build();
            assert_eq!(diag.message.location.line, "two\n");
            assert_eq!(diag.notes.len(), 1);
            assert_eq!(diag.notes[0].location.line_number, 3);
            emitter.emit(diag);
        }
        assert_eq!(
            consumer.diagnostics(),
            &[CollectedDiagnostic {
                level: DiagnosticLevel::Error,
                kind: UNKNOWN,
                line_number: 2,
                column_number: 2,
                body: "bad".to_string(),
            }]
        );
    }

    #[test]
    fn error_display() {
        let translator = LineTranslator { lines: vec!["x ` y\n"] };
        let diag = DiagnosticBuilder::new(
            DiagnosticLevel::Error,
            UNKNOWN,
            0,
            "odd".to_string(),
            &translator,
        )
        .build();
        assert_eq!(diag.to_string(), "test.ck:1:2: ERROR: odd\n    x ` y\n");
    }

    #[test]
    fn warning_display_with_note() {
        let translator = LineTranslator { lines: vec![] };
        let diag = DiagnosticBuilder::new(
            DiagnosticLevel::Warning,
            UNTERMINATED,
            4,
            "open".to_string(),
            &translator,
        )
        .note(UNKNOWN, 5, "here".to_string())
        .build();
        assert_eq!(diag.to_string(), "test.ck:5:2: open\n  test.ck:6:2: here\n");
    }

    #[test]
    fn stream_consumer_writes_on_flush() {
        let translator = LineTranslator { lines: vec!["\"abc\n"] };
        let mut out: Vec<u8> = Vec::new();
        {
            let mut consumer = StreamDiagnosticConsumer::new(&mut out);
            let diag = DiagnosticBuilder::new(
                DiagnosticLevel::Warning,
                UNTERMINATED,
                0,
                "missing quote".to_string(),
                &translator,
            )
            .build();
            consumer.handle_diagnostic(diag);
            consumer.flush();
        }
        assert_eq!(String::from_utf8_lossy(&out), "test.ck:1:2: missing quote\n    \"abc\n");
    }

    #[test]
    fn console_consumer_writes_to_stderr() {
        let translator = LineTranslator { lines: vec!["x\n"] };
        let mut consumer = console_diagnostic_consumer();
        let diag = DiagnosticBuilder::new(
            DiagnosticLevel::Note,
            UNKNOWN,
            0,
            "written to stderr".to_string(),
            &translator,
        )
        .build();
        consumer.handle_diagnostic(diag);
        consumer.flush();
    }

    #[test]
    fn null_consumer_drops() {
        let translator = LineTranslator { lines: vec![] };
        let mut consumer = NullDiagnosticConsumer {};
        let mut emitter = DiagnosticEmitter::new(&mut consumer, &translator);
        let diag = emitter.build(DiagnosticLevel::Note, UNKNOWN, 0, String::new()).build();
        emitter.emit(diag);
    }

    #[test]
    fn collecting_consumer_kinds_in_order() {
        let translator = LineTranslator { lines: vec![] };
        let mut consumer = CollectingDiagnosticConsumer::new();
        let mut emitter = DiagnosticEmitter::new(&mut consumer, &translator);
        for (i, kind) in [UNTERMINATED, UNKNOWN, UNTERMINATED].into_iter().enumerate() {
            let diag = emitter.build(DiagnosticLevel::Warning, kind, i, String::new()).build();
            emitter.emit(diag);
        }
        assert_eq!(consumer.kinds(), vec![UNTERMINATED, UNKNOWN, UNTERMINATED]);
    }
}
