use super::CYCLES;
use ansi_term::Style;
use basic::lang::LineNumber;
use basic::mach::{Event, Listing, Runtime};
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Terminal};
use std::collections::BTreeMap;
use std::sync::Arc;

pub fn main_loop() -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let command = Interface::new("BASIC")?;
    let input = Interface::new("INPUT")?;

    loop {
        match runtime.execute(CYCLES) {
            Event::Stopped => {
                let saved_completer = command.completer();
                command.set_completer(Arc::new(LineCompleter::new(runtime.listing())));
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                command.set_completer(saved_completer);
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
            }
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        runtime.enter(&string);
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::List(s) => {
                command.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Error(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
            Event::Quit => break,
        }
    }
    Ok(())
}

/// Tab after a line number brings back that line for editing.
struct LineCompleter {
    lines: BTreeMap<LineNumber, String>,
}

impl LineCompleter {
    fn new(listing: &Listing) -> LineCompleter {
        LineCompleter {
            lines: listing
                .lines()
                .map(|(ln, source)| (ln, source.to_string()))
                .collect(),
        }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let num = prompter.buffer().trim().parse::<LineNumber>().ok()?;
        let source = self.lines.get(&num)?;
        let mut comp = Completion::simple(source.clone());
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}
