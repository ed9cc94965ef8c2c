use crate::lang::ErrorCode;
use crate::mach::Var;

#[test]
fn test_fetch_undefined() {
    let var = Var::new();
    assert_eq!(var.fetch("A").unwrap_err().code(), ErrorCode::VariableNotDefined);
}

#[test]
fn test_store_and_overwrite() {
    let mut var = Var::new();
    var.store(&"A".into(), 1);
    var.store(&"B".into(), -2);
    var.store(&"A".into(), 3);
    assert_eq!(var.fetch("A"), Ok(3));
    assert_eq!(var.fetch("B"), Ok(-2));
    assert_eq!(var.len(), 2);
}

#[test]
fn test_case_sensitive() {
    let mut var = Var::new();
    var.store(&"a".into(), 1);
    assert!(var.fetch("A").is_err());
    var.clear();
    assert!(var.is_empty());
}
