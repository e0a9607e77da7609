use std::{
    env,
    path::{Path, PathBuf},
};

use argh::FromArgs;

#[derive(FromArgs, PartialEq, Debug)]
/// Development tasks for the ChucK lexer workspace.
struct Args {
    #[argh(subcommand)]
    subcommand: SubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
enum SubCommand {
    Coverage(CoverageArgs),
    ContinuousIntegration(CIArgs),
    Fuzz(FuzzArgs),
}

#[derive(FromArgs, PartialEq, Debug)]
/// Collect test coverage data.
#[argh(subcommand, name = "cov")]
struct CoverageArgs {
    #[argh(switch)]
    /// produce an html report instead of the default .lcov file.
    report: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
/// Run the continuous integration validation tests.
#[argh(subcommand, name = "ci")]
struct CIArgs {
    #[argh(switch)]
    /// attempt to automatically fix format and clippy errors.
    fix: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
/// Run a fuzz target with cargo-fuzz, then copy any crash inputs into the lexer test data.
#[argh(subcommand, name = "fuzz")]
struct FuzzArgs {
    #[argh(positional)]
    /// the fuzz target, `tokenize` or `highlight_lines`.
    target: String,

    #[argh(option, default = "60")]
    /// how many seconds to fuzz for.
    seconds: u32,
}

const FUZZ_TARGETS: &[&str] = &["tokenize", "highlight_lines"];

fn main() -> Result<(), DynError> {
    let args: Args = argh::from_env();
    match args.subcommand {
        SubCommand::Coverage(cov_args) => {
            coverage(cov_args.report)?;
        }
        SubCommand::ContinuousIntegration(ci_args) => {
            ci(ci_args.fix)?;
        }
        SubCommand::Fuzz(fuzz_args) => {
            fuzz(&fuzz_args.target, fuzz_args.seconds)?;
        }
    };

    Ok(())
}

type DynError = Box<dyn std::error::Error>;

fn coverage(report: bool) -> Result<(), DynError> {
    let root = project_root()?;
    let cov_path = root.join("target").join("coverage");
    fs_extra::dir::create_all(&cov_path, true)?;

    println!("** collecting coverage information.");
    let cargo = cargo();
    duct::cmd!(cargo, "test", "--tests", "--package", "chuck-lang")
        .dir(&root)
        .env("CARGO_INCREMENTAL", "0")
        .env("RUSTFLAGS", "-C instrument-coverage")
        .env("LLVM_PROFILE_FILE", "cargo-test-%p-%m.profraw")
        .run()?;

    println!("** collating coverage data.");
    let (output_format, output_path) = if report {
        ("html", cov_path.join("html"))
    } else {
        ("lcov", cov_path.join("tests.lcov"))
    };
    duct::cmd!(
        "grcov",
        ".",
        "--binary-path",
        root.join("target").join("debug").join("deps"),
        "-s",
        ".",
        "-t",
        output_format,
        "--branch",
        "--ignore-not-existing",
        "--ignore", // outside the workspace
        "../*",
        "--ignore", // system libraries
        "/*",
        "--ignore",
        "xtask/*",
        "--ignore",
        "fuzz/*",
        "--ignore", // integration tests always run in a test build
        "lang/tests/*",
        "--ignore", // cklex isn't exercised by the tests
        "lang/src/bin/*",
        "--ignore",
        "*_unittests.rs",
        "-o",
        output_path,
    )
    .dir(&root)
    .run()?;

    println!("** cleaning up *.profraw files.");
    let pattern = root.join("**").join("*.profraw");
    let profraw_files: Result<Vec<PathBuf>, _> = glob::glob(&pattern.to_string_lossy())?.collect();
    profraw_files?.iter().try_for_each(fs_extra::file::remove)?;

    if report {
        println!("** done. Generated coverage report in target/coverage/html/index.html.");
    } else {
        println!("** done. Machine-readable coverage report in target/coverage/tests.lcov")
    }
    Ok(())
}

fn ci(fix: bool) -> Result<(), DynError> {
    let root = project_root()?;
    let cargo = cargo();
    if fix {
        println!("** automatically fixing code formatting with `cargo fmt --all`");
        duct::cmd!(&cargo, "fmt", "--all").dir(&root).run()?;
    } else {
        println!("** checking code formatting with `cargo fmt --all -- --check`");
        duct::cmd!(&cargo, "fmt", "--all", "--", "--check").dir(&root).run()?;
    }

    if fix {
        println!("** automatically fixing clippy issues with `cargo clippy --fix`");
        duct::cmd!(&cargo, "clippy", "--fix", "--all-targets").dir(&root).run()?;
    } else {
        println!("** linting code with `cargo clippy --all-targets -- --deny clippy::all`");
        duct::cmd!(&cargo, "clippy", "--all-targets", "--", "--deny", "clippy::all")
            .dir(&root)
            .run()?;
    }

    println!("** building and testing code with `RUSTFLAGS=\"-D warnings\" cargo test`");
    duct::cmd!(&cargo, "test").dir(&root).env("RUSTFLAGS", "-D warnings").run()?;

    println!("** all checks passed!");
    Ok(())
}

fn fuzz(target: &str, seconds: u32) -> Result<(), DynError> {
    if !FUZZ_TARGETS.contains(&target) {
        let message = format!("unknown fuzz target '{target}', expected one of {FUZZ_TARGETS:?}");
        return Err(message.into());
    }
    let root = project_root()?;
    let fuzz_dir = root.join("fuzz");

    println!("** fuzzing {target} for {seconds} seconds.");
    let max_time = format!("-max_total_time={seconds}");
    // cargo-fuzz needs a nightly toolchain, picked through the rustup proxy.
    let result = duct::cmd!("cargo", "+nightly", "fuzz", "run", target, "--", max_time)
        .dir(&fuzz_dir)
        .unchecked()
        .run()?;

    // cargo-fuzz leaves crashing inputs in the artifacts directory, keep them as test data.
    let artifacts = fuzz_dir.join("artifacts").join(target);
    let crashes_dir = root.join("lang").join("tests").join("data").join("crashes");
    let pattern = artifacts.join("crash-*");
    let crashes: Result<Vec<PathBuf>, _> = glob::glob(&pattern.to_string_lossy())?.collect();
    let crashes = crashes?;
    if !crashes.is_empty() {
        fs_extra::dir::create_all(&crashes_dir, false)?;
        let mut options = fs_extra::file::CopyOptions::new();
        options.skip_exist = true;
        for crash in &crashes {
            if let Some(name) = crash.file_name() {
                fs_extra::file::copy(crash, crashes_dir.join(name), &options)?;
            }
        }
        println!("** copied {} crash input(s) into {}", crashes.len(), crashes_dir.display());
    }

    if !result.status.success() {
        return Err(format!("fuzz target {target} failed").into());
    }
    println!("** done, no crashes found.");
    Ok(())
}

fn project_root() -> Result<PathBuf, DynError> {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .map(Path::to_path_buf)
        .ok_or_else(|| "xtask is expected to live inside the workspace".into())
}

fn cargo() -> String {
    env::var("CARGO").unwrap_or_else(|_| "cargo".to_string())
}
