#![no_main]

use chuck_lang::toolchain::lexer::ChuckLexer;
use libfuzzer_sys::fuzz_target;

// Highlights the input line by line, then again starting over from a line in the middle, which
// must reproduce the styles of the first pass.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let lexer = ChuckLexer::new();
    let mut highlighter = lexer.highlighter();
    let lines: Vec<&str> = s.split_inclusive('\n').collect();
    let first: Vec<_> = lines.iter().map(|l| highlighter.highlight_line(l)).collect();

    let restart = lines.len() / 2;
    highlighter.change_line(restart);
    for (i, line) in lines.iter().enumerate().skip(restart) {
        assert_eq!(highlighter.highlight_line(line), first[i]);
    }
});
