use super::*;
use std::collections::HashSet;

#[test]
fn invalid_is_default() {
    assert_eq!(TypeId::default(), TypeId::INVALID);
    assert_eq!(DeclId::default(), DeclId::INVALID);
    assert!(!ExprId::INVALID.is_valid());
    assert!(ExprId::new(0).is_valid());
}

#[test]
fn debug_format() {
    assert_eq!(format!("{:?}", TypeId::new(7)), "TypeId(7)");
    assert_eq!(format!("{:?}", ConsId::INVALID), "ConsId::INVALID");
}

#[test]
fn sentinel_definitions() {
    assert!(DefId::EMPTY.is_sentinel());
    assert!(DefId::DELETED.is_sentinel());
    assert!(DefId::DEFAULTED.is_sentinel());
    assert!(!DefId::new(3).is_sentinel());
}

#[test]
fn handles_hash_by_index() {
    let set: HashSet<StmtId> = [StmtId::new(1), StmtId::new(1), StmtId::new(2)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}
