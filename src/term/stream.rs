use super::CYCLES;
use basic::mach::{Event, Runtime};
use std::io::{self, BufRead, Write};

/// Plain line-at-a-time session over any reader. INPUT answers come
/// from the same reader as the program.
pub fn main_loop<R: BufRead>(reader: R) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut lines = reader.lines();
    let mut runtime = Runtime::default();

    loop {
        match runtime.execute(CYCLES) {
            Event::Stopped => match lines.next() {
                Some(line) => {
                    runtime.enter(&line?);
                }
                None => break,
            },
            Event::Input(prompt) => {
                write!(out, "{}", prompt)?;
                out.flush()?;
                match lines.next() {
                    Some(line) => {
                        runtime.enter(&line?);
                    }
                    None => break,
                }
            }
            Event::Running => {}
            Event::Print(s) => write!(out, "{}", s)?,
            Event::List(s) => writeln!(out, "{}", s)?,
            Event::Error(error) => writeln!(out, "{}", error)?,
            Event::Quit => break,
        }
    }
    out.flush()
}
