#![allow(missing_docs)]
use statkey::{CharKey, U64Key};
use statkey_derive::StaticKey;
use statmap::{static_map, Item, StaticMap};

type TestMap = StaticMap![U64Key<10> => i32, U64Key<20> => char, U64Key<30> => f64];

fn test_map() -> TestMap {
    TestMap::from_values((100, 'A', 3.14))
}

#[test]
fn update_overwrites_exactly_the_shared_keys() {
    let mut map1 = test_map();
    // keys 10 and 40: one shared, one unknown to map1
    let map2 = static_map! {
        U64Key<10> => 200_i32,
        U64Key<40> => 'X',
    };

    map1.update(&map2);

    assert_eq!(*map1.at::<U64Key<10>, _>(), 200);
    assert_eq!(*map1.at::<U64Key<20>, _>(), 'A');
    assert_eq!(*map1.at::<U64Key<30>, _>(), 3.14);
    // key 40 had nowhere to go and was dropped without effect
    assert!(!map1.contains_key::<U64Key<40>>());
}

#[test]
fn update_with_empty_map_changes_nothing() {
    let mut map = test_map();
    map.update(&StaticMap::empty());
    assert_eq!(map, test_map());
}

#[test]
fn update_ignores_same_key_different_type() {
    let mut map = test_map();
    // key 10 holds an i32; an i64 source is not assignable dynamically
    let other = static_map! { U64Key<10> => 9_i64 };
    map.update(&other);
    assert_eq!(*map.at::<U64Key<10>, _>(), 100);
}

#[test]
fn update_entry_chains() {
    let mut map = test_map();
    map.update_entry(&Item::<U64Key<10>, i32>::new(1))
        .update_entry(&Item::<U64Key<20>, char>::new('B'));
    assert_eq!(*map.at::<U64Key<10>, _>(), 1);
    assert_eq!(*map.at::<U64Key<20>, _>(), 'B');
    assert_eq!(*map.at::<U64Key<30>, _>(), 3.14);
}

#[test]
fn update_entries_applies_a_batch() {
    let mut map = test_map();
    map.update_entries((
        Item::<U64Key<10>, i32>::new(7),
        Item::<U64Key<30>, f64>::new(2.71),
        // unknown key, silently ignored
        Item::<U64Key<99>, i32>::new(-1),
    ));
    assert_eq!(*map.at::<U64Key<10>, _>(), 7);
    assert_eq!(*map.at::<U64Key<20>, _>(), 'A');
    assert_eq!(*map.at::<U64Key<30>, _>(), 2.71);
}

#[test]
fn updated_leaves_the_originals_alone() {
    let map1 = test_map();
    let map2 = TestMap::from_values((200, 'B', 2.71));

    let merged = map1.updated(&map2);

    assert_eq!(*merged.at::<U64Key<10>, _>(), 200);
    assert_eq!(*merged.at::<U64Key<20>, _>(), 'B');
    assert_eq!(*merged.at::<U64Key<30>, _>(), 2.71);
    assert_eq!(merged.len(), 3);
    // sources unchanged
    assert_eq!(map1, test_map());
    assert_eq!(map2, TestMap::from_values((200, 'B', 2.71)));
}

#[test]
fn merge_concatenates_disjoint_maps() {
    let map1 = static_map! { U64Key<1> => 10_i32, U64Key<2> => 'A' };
    let map2 = static_map! { U64Key<3> => 3.14_f64, U64Key<4> => 2.71_f32 };

    let result = map1.merge(&map2);

    assert_eq!(result.len(), 4);
    assert_eq!(*result.at::<U64Key<1>, _>(), 10);
    assert_eq!(*result.at::<U64Key<2>, _>(), 'A');
    assert_eq!(*result.at::<U64Key<3>, _>(), 3.14);
    assert_eq!(*result.at::<U64Key<4>, _>(), 2.71);
    // originals untouched
    assert_eq!(*map1.at::<U64Key<1>, _>(), 10);
    assert_eq!(*map2.at::<U64Key<3>, _>(), 3.14);
}

#[test]
fn merge_with_empty_is_identity() {
    let map = test_map();
    let empty = StaticMap::empty();

    let left: TestMap = map.merge(&empty);
    assert_eq!(left, map);

    let right: TestMap = empty.merge(&map);
    assert_eq!(right, map);

    let both: StaticMap![] = empty.merge(&StaticMap::empty());
    assert_eq!(both, StaticMap::empty());
}

#[test]
fn equality_is_keyed_not_positional() {
    type Forward = StaticMap![U64Key<1> => i32, U64Key<2> => i32, U64Key<3> => i32];
    type Shuffled = StaticMap![U64Key<3> => i32, U64Key<1> => i32, U64Key<2> => i32];

    let forward = Forward::from_values((10, 20, 30));
    let shuffled = Shuffled::from_values((30, 10, 20));

    assert_eq!(forward, shuffled);
    assert_eq!(shuffled, forward);
}

#[test]
fn equality_checks_values() {
    let map1 = test_map();
    let mut map2 = test_map();
    assert_eq!(map1, map2);

    map2.set::<U64Key<20>, _>('B');
    assert_ne!(map1, map2);

    map2.set::<U64Key<20>, _>('A');
    assert_eq!(map1, map2);
}

#[test]
fn equality_needs_matching_key_sets() {
    let small = static_map! { U64Key<1> => 10_i32, U64Key<2> => 20_i32 };
    let large = static_map! { U64Key<1> => 10_i32, U64Key<2> => 20_i32, U64Key<3> => 30_i32 };
    assert_ne!(small, large);
    assert_ne!(large, small);

    // same sizes, partially overlapping keys
    let other = static_map! { U64Key<2> => 20_i32, U64Key<3> => 30_i32 };
    assert_ne!(small, other);
    assert_ne!(other, small);
}

#[test]
fn equality_distinguishes_value_types() {
    let ints = static_map! { U64Key<1> => 42_i32 };
    let longs = static_map! { U64Key<1> => 42_i64 };
    assert_ne!(ints, longs);
}

#[test]
fn self_equality() {
    let map = test_map();
    assert_eq!(map, map);
    assert_eq!(map, map.clone());
}

// Named keys work across every dynamic operation too.
#[derive(StaticKey, Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
struct Greeting;

#[test]
fn named_keys_in_maps() {
    let mut map = static_map! {
        Greeting => String::from("hello"),
        CharKey<'n'> => 3_u8,
    };
    assert_eq!(map.at::<Greeting, _>(), "hello");

    map.update_entry(&Item::<Greeting, String>::new("goodbye".into()));
    assert_eq!(map.at::<Greeting, _>(), "goodbye");
    assert_eq!(map.get_or::<Greeting, String>(String::new()), "goodbye");
}
