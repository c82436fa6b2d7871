#![allow(missing_docs)]
use statkey::{BoolKey, CharKey, I64Key, Key, KeyTuple, U64Key};

statkey::define_key! {
    /// A named key with documentation.
    pub struct Hostname;
    pub struct Port;
}

mod nested {
    statkey::define_key! {
        // Same name as the top-level key, different module.
        pub struct Hostname;
    }
}

#[test]
fn named_keys_are_distinct() {
    assert_ne!(Hostname::ID, Port::ID);
    assert_ne!(Hostname::ID, nested::Hostname::ID);
}

#[test]
fn named_keys_are_stable() {
    assert_eq!(Hostname::ID, Hostname::ID);
    let by_value = Hostname::ID;
    assert_eq!(by_value, Hostname::ID);
}

#[test]
fn derived_bundle_is_usable() {
    // define_key! emits Copy/Clone/Eq/Hash/Debug/Default
    let a = Hostname;
    let b = a;
    assert_eq!(a, b);
    assert_eq!(Hostname::default(), a);
    assert!(!format!("{a:?}").is_empty());
}

#[test]
fn literal_key_families_do_not_collide() {
    assert_ne!(U64Key::<97>::ID, I64Key::<97>::ID);
    assert_ne!(U64Key::<97>::ID, CharKey::<'a'>::ID);
    assert_ne!(U64Key::<1>::ID, BoolKey::<true>::ID);
    assert_eq!(U64Key::<97>::VALUE, 97);
}

#[test]
fn key_tuples_follow_declaration_order() {
    type Keys = (U64Key<10>, U64Key<20>, CharKey<'a'>);
    let ids = <Keys as KeyTuple>::IDS;
    assert_eq!(ids.len(), 3);
    assert_eq!(ids.get(0), U64Key::<10>::ID);
    assert_eq!(ids.get(2), CharKey::<'a'>::ID);
    assert!(ids.all_distinct());
}
