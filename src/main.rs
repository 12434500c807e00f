use funsh::core::config::Config;
use funsh::flags::Flags;
use funsh::shell::Shell;
use log::{warn, LevelFilter};
use std::env;
use std::process::ExitCode;

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}

fn run() -> Result<(), funsh::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args);

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("funsh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(flags.is_set("debug"));
    for arg in flags.ignored() {
        warn!("ignoring unrecognized argument: {}", arg);
    }

    let mut shell = Shell::new(Config::default())?;
    shell.run()
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("funsh: {}", e);
            ExitCode::FAILURE
        }
    }
}
