#![allow(missing_docs)]
use itertools::Itertools;
use statkey::{CharKey, Key, U64Key};
use statmap::{static_map, Item, MapEntry, StaticMap, Visit, VisitIndexed, VisitMut};

type TestMap = StaticMap![U64Key<10> => i32, U64Key<20> => char, U64Key<30> => f64];

fn test_map() -> TestMap {
    TestMap::from_values((100, 'A', 3.14))
}

#[test]
fn full_construction() {
    let map = test_map();
    assert_eq!(map.len(), 3);
    assert!(!map.is_empty());
    assert_eq!(*map.at::<U64Key<10>, _>(), 100);
    assert_eq!(*map.at::<U64Key<20>, _>(), 'A');
    assert_eq!(*map.at::<U64Key<30>, _>(), 3.14);
}

#[test]
fn partial_construction_defaults_the_rest() {
    let map = TestMap::from_values((100,));
    assert_eq!(*map.at::<U64Key<10>, _>(), 100);
    assert_eq!(*map.at::<U64Key<20>, _>(), '\0');
    assert_eq!(*map.at::<U64Key<30>, _>(), 0.0);

    let map = TestMap::from_values((100, 'Z'));
    assert_eq!(*map.at::<U64Key<20>, _>(), 'Z');
    assert_eq!(*map.at::<U64Key<30>, _>(), 0.0);
}

#[test]
fn construction_converts_values() {
    // u16 -> i32 and u32 -> f64 go through Into
    let map: StaticMap![U64Key<1> => i32, U64Key<2> => f64] =
        StaticMap::from_values((7_u16, 2_u32));
    assert_eq!(*map.at::<U64Key<1>, _>(), 7);
    assert_eq!(*map.at::<U64Key<2>, _>(), 2.0);
}

#[test]
fn default_construction() {
    let map = TestMap::default();
    assert_eq!(*map.at::<U64Key<10>, _>(), 0);
    assert_eq!(*map.at::<U64Key<20>, _>(), '\0');
    assert_eq!(*map.at::<U64Key<30>, _>(), 0.0);
}

#[test]
fn empty_map() {
    let map = StaticMap::empty();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert!(map.keys().is_empty());
    assert_eq!(map, StaticMap::empty());
}

#[test]
fn at_mut_and_set() {
    let mut map = test_map();
    *map.at_mut::<U64Key<10>, _>() += 1;
    assert_eq!(*map.at::<U64Key<10>, _>(), 101);

    map.set::<U64Key<20>, _>('B');
    assert_eq!(*map.at::<U64Key<20>, _>(), 'B');
}

#[test]
fn contains_is_a_constant() {
    const HAS_10: bool = TestMap::contains::<U64Key<10>>();
    const HAS_40: bool = TestMap::contains::<U64Key<40>>();
    assert!(HAS_10);
    assert!(!HAS_40);

    let map = test_map();
    assert!(map.contains_key::<U64Key<30>>());
    // same constant, different family: not the same key
    assert!(!map.contains_key::<CharKey<'\n'>>());
}

#[test]
fn contains_all_and_any() {
    assert!(TestMap::contains_all::<(U64Key<10>, U64Key<30>)>());
    assert!(!TestMap::contains_all::<(U64Key<10>, U64Key<40>)>());
    assert!(TestMap::contains_any::<(U64Key<40>, U64Key<20>)>());
    assert!(!TestMap::contains_any::<(U64Key<40>, U64Key<50>)>());
    // vacuous truth over the empty key tuple
    assert!(TestMap::contains_all::<()>());
    assert!(!TestMap::contains_any::<()>());
}

#[test]
fn get_or_prefers_the_stored_value() {
    let map = test_map();
    assert_eq!(map.get_or::<U64Key<10>, i32>(42), 100);
    assert_eq!(map.get_or::<U64Key<20>, char>('x'), 'A');
    // absent key: the default comes back unchanged
    assert_eq!(map.get_or::<U64Key<40>, i32>(42), 42);
    assert_eq!(map.get_or::<U64Key<40>, &str>("missing"), "missing");
    // a zero value is still the stored value, not the default
    let zeroed = TestMap::default();
    assert_eq!(zeroed.get_or::<U64Key<10>, i32>(42), 0);
}

#[test]
fn get_or_requires_the_slot_type() {
    let map = test_map();
    // key 20 holds a char; asking for i32 falls back to the default
    assert_eq!(map.get_or::<U64Key<20>, i32>(-1), -1);
}

#[test]
fn clear_is_idempotent() {
    let mut map = test_map();
    map.clear();
    assert_eq!(map, TestMap::default());
    map.clear();
    assert_eq!(map, TestMap::default());

    // the map stays fully usable afterwards
    map.set::<U64Key<10>, _>(5);
    assert_eq!(*map.at::<U64Key<10>, _>(), 5);
}

#[test]
fn keys_in_declaration_order() {
    let map = test_map();
    let ids = map.keys().iter().copied().collect_vec();
    assert_eq!(
        ids,
        vec![U64Key::<10>::ID, U64Key::<20>::ID, U64Key::<30>::ID],
    );
    assert_eq!(TestMap::KEYS.len(), TestMap::LEN);
}

#[test]
fn values_views_share_storage() {
    let mut map = test_map();
    {
        let (a, (b, (c, ()))) = map.values();
        assert_eq!((*a, *b, *c), (100, 'A', 3.14));
    }
    {
        let (a, _rest) = map.values_mut();
        *a = 7;
    }
    assert_eq!(*map.at::<U64Key<10>, _>(), 7);
}

#[test]
fn entries_views_share_storage() {
    let mut map = test_map();
    *map.entries_mut().head_mut().value_mut() = 1000;
    assert_eq!(*map.at::<U64Key<10>, _>(), 1000);

    map.set::<U64Key<10>, _>(2000);
    assert_eq!(*map.entries().head().value(), 2000);
}

/// Sums whatever can be summed as f64; covers all three entry shapes.
struct SumNumeric(f64);
impl<K: Key> Visit<Item<K, i32>> for SumNumeric {
    fn entry(&mut self, entry: &Item<K, i32>) {
        self.0 += f64::from(*entry.value());
    }
}
impl<K: Key> Visit<Item<K, f64>> for SumNumeric {
    fn entry(&mut self, entry: &Item<K, f64>) {
        self.0 += entry.value();
    }
}
impl<K: Key> Visit<Item<K, char>> for SumNumeric {
    fn entry(&mut self, _entry: &Item<K, char>) {}
}

#[test]
fn for_each_with_type_specific_visitor() {
    let map = test_map();
    let mut sum = SumNumeric(0.0);
    map.for_each(&mut sum);
    assert_eq!(sum.0, 103.14);
}

/// Collects every entry's key id, whatever it holds.
struct CollectKeys(Vec<statkey::KeyId>);
impl<E: MapEntry> Visit<E> for CollectKeys {
    fn entry(&mut self, _entry: &E) {
        self.0.push(E::KEY_ID);
    }
}

#[test]
fn for_each_with_blanket_visitor() {
    let map = test_map();
    let mut collect = CollectKeys(Vec::new());
    map.for_each(&mut collect);
    assert_eq!(collect.0, map.keys().as_slice());
}

/// Doubles integers and doubles floats, uppercases characters.
struct Grow;
impl<K: Key> VisitMut<Item<K, i32>> for Grow {
    fn entry(&mut self, entry: &mut Item<K, i32>) {
        *entry.value_mut() *= 2;
    }
}
impl<K: Key> VisitMut<Item<K, f64>> for Grow {
    fn entry(&mut self, entry: &mut Item<K, f64>) {
        *entry.value_mut() *= 2.0;
    }
}
impl<K: Key> VisitMut<Item<K, char>> for Grow {
    fn entry(&mut self, entry: &mut Item<K, char>) {
        let upper = entry.value().to_ascii_uppercase();
        *entry.value_mut() = upper;
    }
}

#[test]
fn for_each_mut_mutates_in_place() {
    let mut map = TestMap::from_values((21, 'a', 1.5));
    map.for_each_mut(&mut Grow);
    assert_eq!(*map.at::<U64Key<10>, _>(), 42);
    assert_eq!(*map.at::<U64Key<20>, _>(), 'A');
    assert_eq!(*map.at::<U64Key<30>, _>(), 3.0);
}

/// Records (position, key id) pairs.
struct Positions(Vec<(usize, statkey::KeyId)>);
impl<E: MapEntry> VisitIndexed<E> for Positions {
    fn entry(&mut self, index: usize, _entry: &mut E) {
        self.0.push((index, E::KEY_ID));
    }
}

#[test]
fn for_each_indexed_counts_from_zero() {
    let mut map = test_map();
    let mut positions = Positions(Vec::new());
    map.for_each_indexed(&mut positions);
    let expected = map
        .keys()
        .iter()
        .copied()
        .enumerate()
        .collect_vec();
    assert_eq!(positions.0, expected);
}

#[test]
fn debug_formatting_lists_every_entry() {
    let map = test_map();
    let formatted = format!("{map:?}");
    assert!(formatted.contains("100"));
    assert!(formatted.contains("'A'"));
    assert!(formatted.contains("3.14"));
}
