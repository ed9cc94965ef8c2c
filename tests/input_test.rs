mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_input_immediate() {
    let mut r = Runtime::default();
    r.enter("INPUT N");
    assert_eq!(exec(&mut r), " ? ");
    r.enter("-12");
    assert_eq!(exec(&mut r), "");
    r.enter("PRINT N");
    assert_eq!(exec(&mut r), "-12\n");
}

#[test]
fn test_input_reprompts() {
    let mut r = Runtime::default();
    r.enter("INPUT N");
    assert_eq!(exec(&mut r), " ? ");
    r.enter("twelve");
    assert_eq!(exec(&mut r), "INVALID NUMBER\n ? ");
    r.enter("1.5");
    assert_eq!(exec(&mut r), "INVALID NUMBER\n ? ");
    r.enter("+3");
    assert_eq!(exec(&mut r), "INVALID NUMBER\n ? ");
    r.enter("");
    assert_eq!(exec(&mut r), "INVALID NUMBER\n ? ");
    r.enter("3");
    assert_eq!(exec(&mut r), "");
    r.enter("PRINT N");
    assert_eq!(exec(&mut r), "3\n");
}

#[test]
fn test_input_too_large() {
    let mut r = Runtime::default();
    r.enter("INPUT N");
    assert_eq!(exec(&mut r), " ? ");
    r.enter("99999999999");
    assert_eq!(exec(&mut r), "INVALID NUMBER\n ? ");
}

#[test]
fn test_input_in_program() {
    let mut r = Runtime::default();
    r.enter("10 INPUT A");
    r.enter("20 INPUT B");
    r.enter("30 PRINT A * B");
    r.enter("RUN");
    assert_eq!(exec(&mut r), " ? ");
    r.enter("6");
    assert_eq!(exec(&mut r), " ? ");
    r.enter("seven");
    assert_eq!(exec(&mut r), "INVALID NUMBER\n ? ");
    r.enter("7");
    assert_eq!(exec(&mut r), "42\n");
}

#[test]
fn test_input_answer_is_not_a_program_line() {
    let mut r = Runtime::default();
    r.enter("INPUT N");
    assert_eq!(exec(&mut r), " ? ");
    r.enter("10");
    assert_eq!(exec(&mut r), "");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "");
    r.enter("PRINT N");
    assert_eq!(exec(&mut r), "10\n");
}

#[test]
fn test_input_reserved_name() {
    let mut r = Runtime::default();
    r.enter("INPUT PRINTS");
    assert_eq!(exec(&mut r), "SYNTAX ERROR\n");
}
