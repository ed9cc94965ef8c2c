use super::{eval, Listing, Var};
use crate::error;
use crate::lang::ast::{Body, Command, Ident, Statement};
use crate::lang::{Error, Line, LineNumber};

type Result<T> = std::result::Result<T, Error>;

pub const PROMPT: &str = " ? ";
pub const HELP: &str =
    "LINE BASIC. STATEMENTS: REM LET PRINT INPUT END GOTO IF. COMMANDS: RUN LIST CLEAR QUIT HELP.";

/// ## Runtime
///
/// A session of the interpreter. The runtime never touches a terminal;
/// lines are handed to `enter` and whatever the session needs from the
/// outside world comes back as an `Event` from `execute`.
#[derive(Debug, Default)]
pub struct Runtime {
    listing: Listing,
    var: Var,
    pc: Option<LineNumber>,
    state: State,
}

/// Events for the user interface.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// Waiting for the next line.
    Stopped,
    /// Cycle budget spent; call `execute` again.
    Running,
    /// Text to output, line terminator included.
    Print(String),
    /// One line of the program listing, without terminator.
    List(String),
    /// Prompt for INPUT. The next `enter` answers it.
    Input(String),
    /// Print the message on its own line.
    Error(Error),
    Quit,
}

#[derive(Debug)]
enum State {
    Stopped,
    Error(Error),
    Direct(Statement),
    Command(Command),
    Listing(LineNumber),
    Running,
    Input(Pending),
    Quit,
}

impl Default for State {
    fn default() -> Self {
        State::Stopped
    }
}

#[derive(Debug)]
struct Pending {
    name: Ident,
    answer: Option<String>,
}

/// What executing one statement asks of the runtime.
enum Flow {
    Next,
    Jump(LineNumber),
    Print(String),
    Input(Ident),
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    /// Enter a line of text. While an INPUT is pending the text is the
    /// answer; otherwise numbered lines are filed in the listing now and
    /// direct lines wait for `execute`. Returns false for blank lines.
    pub fn enter(&mut self, s: &str) -> bool {
        if let State::Input(input) = &mut self.state {
            input.answer = Some(s.trim().to_string());
            return true;
        }
        let line = match Line::new(s) {
            Ok(line) => line,
            Err(error) => {
                self.state = State::Error(error);
                return true;
            }
        };
        let (number, source, body) = line.into_parts();
        log::trace!("enter {:?} {:?}", number, body);
        match (number, body) {
            (None, Body::Empty) => return false,
            (Some(number), Body::Empty) => {
                self.listing.remove(number);
            }
            (None, Body::Command(command)) => self.state = State::Command(command),
            (Some(_), Body::Command(_)) => self.state = State::Error(error!(SyntaxError)),
            (None, Body::Statement(statement)) => {
                self.state = if statement.is_immediate() {
                    State::Direct(statement)
                } else {
                    State::Error(error!(SyntaxError))
                }
            }
            (Some(number), Body::Statement(statement)) => {
                self.listing.insert(number, source, statement);
            }
        }
        true
    }

    /// Advance the session, executing at most `cycles` program statements.
    pub fn execute(&mut self, cycles: usize) -> Event {
        match self.step(cycles) {
            Ok(event) => event,
            Err(error) => {
                log::debug!("{:?}", error);
                self.pc = None;
                self.state = State::Stopped;
                Event::Error(error)
            }
        }
    }

    /// Reset the session to empty: no program, no variables.
    pub fn clear(&mut self) {
        self.listing.clear();
        self.var.clear();
        self.pc = None;
    }

    fn step(&mut self, cycles: usize) -> Result<Event> {
        match std::mem::take(&mut self.state) {
            State::Stopped => Ok(Event::Stopped),
            State::Error(error) => Err(error),
            State::Direct(statement) => {
                let flow = execute(&statement, &mut self.var, &self.listing)?;
                Ok(self.follow(flow))
            }
            State::Command(command) => self.command(command, cycles),
            State::Listing(ln) => Ok(self.list(ln)),
            State::Running => self.run(cycles),
            State::Input(input) => self.input(input, cycles),
            State::Quit => {
                self.state = State::Quit;
                Ok(Event::Quit)
            }
        }
    }

    fn command(&mut self, command: Command, cycles: usize) -> Result<Event> {
        match command {
            Command::Run => {
                self.pc = self.listing.first();
                match self.pc {
                    Some(pc) => {
                        log::debug!("RUN from {}", pc);
                        self.run(cycles)
                    }
                    None => Ok(Event::Stopped),
                }
            }
            Command::List => Ok(self.list(0)),
            Command::Clear => {
                self.clear();
                Ok(Event::Stopped)
            }
            Command::Quit => {
                self.state = State::Quit;
                Ok(Event::Quit)
            }
            Command::Help => Ok(Event::Print(format!("{}\n", HELP))),
        }
    }

    fn list(&mut self, ln: LineNumber) -> Event {
        match self.listing.list_line(ln) {
            Some((number, source)) => {
                let event = Event::List(source.to_string());
                if let Some(next) = number.checked_add(1) {
                    self.state = State::Listing(next);
                }
                event
            }
            None => Event::Stopped,
        }
    }

    fn run(&mut self, cycles: usize) -> Result<Event> {
        for _ in 0..cycles {
            let pc = match self.pc {
                Some(pc) => pc,
                None => return Ok(Event::Stopped),
            };
            let statement = self.listing.statement(pc)?;
            if let Statement::End = statement {
                log::debug!("END in {}", pc);
                self.pc = None;
                return Ok(Event::Stopped);
            }
            // GOTO and IF overrule the default successor.
            let next = self.listing.successor(pc);
            let flow = match execute(statement, &mut self.var, &self.listing) {
                Ok(flow) => flow,
                Err(error) => return Err(error.in_line_number(pc)),
            };
            self.pc = next;
            match flow {
                Flow::Next => {}
                Flow::Jump(ln) => {
                    log::trace!("jump from {} to {}", pc, ln);
                    self.pc = Some(ln);
                }
                flow => return Ok(self.follow(flow)),
            }
        }
        if self.pc.is_none() {
            return Ok(Event::Stopped);
        }
        self.state = State::Running;
        Ok(Event::Running)
    }

    fn follow(&mut self, flow: Flow) -> Event {
        match flow {
            Flow::Print(s) => {
                if self.pc.is_some() {
                    self.state = State::Running;
                }
                Event::Print(s)
            }
            Flow::Input(name) => {
                self.state = State::Input(Pending { name, answer: None });
                Event::Input(PROMPT.to_string())
            }
            Flow::Next | Flow::Jump(_) => {
                if self.pc.is_some() {
                    self.state = State::Running;
                    Event::Running
                } else {
                    Event::Stopped
                }
            }
        }
    }

    fn input(&mut self, mut input: Pending, cycles: usize) -> Result<Event> {
        let answer = match input.answer.take() {
            Some(answer) => answer,
            None => {
                self.state = State::Input(input);
                return Ok(Event::Input(PROMPT.to_string()));
            }
        };
        match parse_number(&answer) {
            Some(value) => {
                self.var.store(&input.name, value);
                if self.pc.is_some() {
                    self.run(cycles)
                } else {
                    Ok(Event::Stopped)
                }
            }
            None => {
                self.state = State::Input(input);
                Ok(Event::Print(format!("{}\n", error!(InvalidNumber))))
            }
        }
    }
}

fn execute(statement: &Statement, var: &mut Var, listing: &Listing) -> Result<Flow> {
    use Statement::*;
    match statement {
        Rem | End => Ok(Flow::Next),
        Let(name, expr) => {
            let value = eval(expr, var)?;
            var.store(name, value);
            Ok(Flow::Next)
        }
        Print(expr) => Ok(Flow::Print(format!("{}\n", eval(expr, var)?))),
        Input(name) => Ok(Flow::Input(name.clone())),
        Goto(ln) => jump(listing, *ln),
        If(lhs, cmp, rhs, ln) => {
            let lhs = eval(lhs, var)?;
            let rhs = eval(rhs, var)?;
            if cmp.test(lhs, rhs) {
                jump(listing, *ln)
            } else {
                Ok(Flow::Next)
            }
        }
    }
}

fn jump(listing: &Listing, ln: LineNumber) -> Result<Flow> {
    if listing.contains(ln) {
        Ok(Flow::Jump(ln))
    } else {
        Err(error!(LineNumberError))
    }
}

/// An INPUT answer must be an optional minus followed by digits.
fn parse_number(s: &str) -> Option<i32> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
