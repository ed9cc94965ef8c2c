use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

mod linefeed;
mod stream;

/// Program statements executed between checks for output.
const CYCLES: usize = 5000;

#[derive(Parser)]
#[command(name = "basic", version, about = "Line-numbered integer BASIC")]
struct Cli {
    /// Read lines from this file instead of the terminal
    file: Option<PathBuf>,
    /// No line editing or styling, even on a terminal
    #[arg(long)]
    plain: bool,
}

pub fn main() {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();
    let result = match &cli.file {
        Some(path) => match File::open(path) {
            Ok(file) => stream::main_loop(BufReader::new(file)),
            Err(error) => {
                eprintln!("{}: {}", path.display(), error);
                std::process::exit(1);
            }
        },
        None if cli.plain || !io::stdin().is_terminal() => stream::main_loop(io::stdin().lock()),
        None => self::linefeed::main_loop(),
    };
    if let Err(error) = result {
        eprintln!("{}", error);
    }
}
