use super::*;
use pretty_assertions::assert_eq;

#[test]
fn name_layout() {
    let name = Name::new(5, 1000);
    assert_eq!(name.shard(), 5);
    assert_eq!(name.local(), 1000);
}

#[test]
fn empty_is_default() {
    assert_eq!(Name::default(), Name::EMPTY);
    assert_eq!(Name::EMPTY.raw(), 0);
}

#[test]
fn names_hash_by_value() {
    let mut set = rustc_hash::FxHashSet::default();
    set.insert(Name::new(0, 1));
    set.insert(Name::new(0, 1));
    set.insert(Name::new(3, 1));
    assert_eq!(set.len(), 2);
}
