use super::*;
use crate::lang::ErrorCode;
use crate::mach::PROMPT;

#[test]
fn test_program_lines_are_stored_on_enter() {
    let mut r = Runtime::default();
    assert!(r.enter("20 PRINT 2"));
    assert!(r.enter("10 PRINT 1"));
    assert_eq!(r.listing().len(), 2);
    assert_eq!(r.listing().first(), Some(10));
    assert_eq!(run(&mut r), "");
}

#[test]
fn test_blank_line_is_ignored() {
    let mut r = Runtime::default();
    assert!(!r.enter("   "));
    assert_eq!(r.execute(10), Event::Stopped);
}

#[test]
fn test_cycles_exceeded() {
    let mut r = Runtime::default();
    r.enter("10 GOTO 10");
    r.enter("RUN");
    assert_eq!(r.execute(100), Event::Running);
    assert_eq!(r.execute(100), Event::Running);
    assert_eq!(run_cycles(&mut r, 10), "\n10 Execution cycles exceeded.\n");
}

#[test]
fn test_error_carries_line_number() {
    let mut r = Runtime::default();
    r.enter("10 LET A = 1");
    r.enter("20 PRINT 1/0");
    r.enter("RUN");
    match r.execute(100) {
        Event::Error(error) => {
            assert_eq!(error.code(), ErrorCode::DivideByZero);
            assert_eq!(error.line_number(), Some(20));
        }
        event => panic!("{:?}", event),
    }
    assert_eq!(r.execute(100), Event::Stopped);
    assert_eq!(r.var().fetch("A"), Ok(1));
}

#[test]
fn test_input_suspends_run() {
    let mut r = Runtime::default();
    r.enter("10 INPUT N");
    r.enter("20 PRINT N * 2");
    r.enter("RUN");
    assert_eq!(r.execute(100), Event::Input(PROMPT.to_string()));
    r.enter("21");
    assert_eq!(r.execute(100), Event::Print("42\n".to_string()));
    assert_eq!(r.execute(100), Event::Stopped);
}

#[test]
fn test_quit() {
    let mut r = Runtime::default();
    r.enter("QUIT");
    assert_eq!(r.execute(100), Event::Quit);
    assert_eq!(r.execute(100), Event::Quit);
}
