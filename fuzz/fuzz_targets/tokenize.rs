#![no_main]

use chuck_lang::toolchain::diagnostics::CollectingDiagnosticConsumer;
use chuck_lang::toolchain::lexer::ChuckLexer;
use chuck_lang::toolchain::source::SourceBuffer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let source = SourceBuffer::new_from_string(s, "fuzz_targets/tokenize.rs");
    let lexer = ChuckLexer::new();
    let mut diags = CollectingDiagnosticConsumer::new();
    let buffer = lexer.tokenize(&source, &mut diags);
    let rebuilt: String = buffer.tokens().iter().map(|t| t.string).collect();
    assert_eq!(rebuilt, s);
    let runs = buffer.style_runs(lexer.keyword_table());
    let covered: usize = runs.iter().map(|r| r.range.len()).sum();
    assert_eq!(covered, s.len());
});
