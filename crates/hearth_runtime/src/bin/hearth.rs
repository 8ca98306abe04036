//! Hearth CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use hearth_runtime::Repl;
use hearth_runtime::demo::demo_hub;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    trace: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--trace" => config.trace = true,
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("hearth {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut repl = Repl::new()?.with_hub(demo_hub());
    if config.trace {
        repl = repl.with_trace_mode();
    }

    // Run any command files before going interactive.
    for file in &config.files {
        repl.eval_file(file)?;
    }

    if config.batch_mode {
        return Ok(());
    }

    // If files were run, suppress the banner since context is established.
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mHearth\x1b[0m - voice command hub

\x1b[1mUSAGE:\x1b[0m
    hearth [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Command files to run before starting the REPL
                  (one voice command per line, # for comments)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Run files and exit (no REPL)
    --trace            Print each command's parse trace

\x1b[1mEXAMPLES:\x1b[0m
    hearth                     Start the interactive REPL
    hearth morning.txt         Run morning.txt, then start the REPL
    hearth -b morning.txt      Run morning.txt and exit
    hearth --trace             REPL with parse traces

\x1b[1mREPL COMMANDS:\x1b[0m
    :devices     List connected devices
    :trace       Print the last command's parse trace
    :demo        Run the demo command script
    :quit        Exit (also Ctrl+D)"
    );
}
