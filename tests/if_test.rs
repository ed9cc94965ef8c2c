mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_if_then_skips() {
    let mut r = Runtime::default();
    r.enter("10 LET X = 0");
    r.enter("20 IF X = 0 THEN 40");
    r.enter("30 PRINT 999");
    r.enter("40 PRINT X");
    r.enter("50 END");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "0\n");
}

#[test]
fn test_if_false_falls_through() {
    let mut r = Runtime::default();
    r.enter("10 LET X = 1");
    r.enter("20 IF X > 1 THEN 40");
    r.enter("30 PRINT 30");
    r.enter("40 PRINT 40");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "30\n40\n");
}

#[test]
fn test_comparisons() {
    let mut r = Runtime::default();
    r.enter("10 IF 1 < 2 THEN 30");
    r.enter("20 PRINT 20");
    r.enter("30 IF 2 > 1 THEN 50");
    r.enter("40 PRINT 40");
    r.enter("50 IF 2 = 2 THEN 70");
    r.enter("60 PRINT 60");
    r.enter("70 IF 2 < 1 THEN 90");
    r.enter("80 PRINT 80");
    r.enter("90 END");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "80\n");
}

#[test]
fn test_if_missing_target_only_when_taken() {
    let mut r = Runtime::default();
    r.enter("10 IF 1 = 2 THEN 999");
    r.enter("20 PRINT 20");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "20\n");
    r.enter("10 IF 1 = 1 THEN 999");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "LINE NUMBER ERROR\n");
}

#[test]
fn test_if_expressions() {
    let mut r = Runtime::default();
    r.enter("10 LET A = 3");
    r.enter("20 IF A * 2 > A + 2 THEN 40");
    r.enter("30 PRINT 0");
    r.enter("40 PRINT (A - 1) * 2");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "4\n");
}
