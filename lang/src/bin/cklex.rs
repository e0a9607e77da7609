use chuck_lang::config::HighlightConfig;
use chuck_lang::toolchain;
use chuck_lang::toolchain::lexer::ChuckLexer;

use tracing_subscriber::EnvFilter;

const HELP: &str = "\
    cklex - the ChucK lexer debugging tool

    USAGE:
        cklex [--styles] [--config PATH] [--quiet] FILENAME

    OPTIONS:
        --styles            Print style runs instead of tokens.
        --config PATH       A highlight configuration to resolve the printed styles against.
        --quiet             If present, all non-diagnostic output is suppressed.

    ARGS:
        FILENAME            The path to the ChucK file to lex.

    Set RUST_LOG to control log output, for example RUST_LOG=chuck_lang=debug.
";

#[derive(Debug, Eq, PartialEq)]
struct CklexArgs {
    styles: bool,
    config: Option<std::path::PathBuf>,
    quiet: bool,
    source_file: std::path::PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    let config = match &args.config {
        Some(path) => match HighlightConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => HighlightConfig::default(),
    };

    let source = match toolchain::source::SourceBuffer::new_from_file(&args.source_file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error opening source file {}: {}", args.source_file.display(), e);
            std::process::exit(1);
        }
    };

    let lexer = ChuckLexer::new();
    if !lexer.language().matches_path(&args.source_file) {
        tracing::warn!(
            file = %args.source_file.display(),
            "file extension is not registered for {}",
            lexer.language().name()
        );
    }

    let mut diags = toolchain::diagnostics::diagnostic_emitter::console_diagnostic_consumer();
    let tb = lexer.tokenize(&source, &mut diags);
    toolchain::diagnostics::DiagnosticConsumer::flush(&mut diags);

    if args.quiet {
        return;
    }
    if args.styles {
        let code = source.code();
        for run in tb.style_runs(lexer.keyword_table()) {
            let settings = config.style(lexer.language(), run.style);
            println!(
                "{:?} {} {}{} {:?}",
                run.range,
                run.style,
                settings.foreground,
                if settings.bold { " bold" } else { "" },
                &code[run.range.clone()]
            );
        }
    } else {
        println!("TokenizedBuffer [");
        tb.print_tokens();
        println!("]");
    }
}

fn parse_args() -> Result<CklexArgs, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let args = CklexArgs {
        styles: pargs.contains("--styles"),
        config: pargs.opt_value_from_str("--config")?,
        quiet: pargs.contains("--quiet"),
        source_file: pargs.free_from_str()?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Error: unused arguments left: {:?}.", remaining);
        std::process::exit(1);
    }
    Ok(args)
}
