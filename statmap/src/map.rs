//! Defines the [`StaticMap`] type.

use core::fmt::{Debug, Formatter};

use statkey::{Key, KeySet, KeyTuple};

use crate::build::BuildValues;
use crate::cursor::Cursor;
use crate::dynamic::{DynEntry, DynEntryList, EntryBatch};
use crate::find::Find;
use crate::list::{Concat, ClearEntries, DebugEntries, EntryList, Nil};
use crate::select::{FilterEntries, SelectKeys};
use crate::visit::{ForEach, ForEachIndexed, ForEachMut};

/// A fixed-composition heterogeneous key-value map.
///
/// The composition (how many slots, which key each slot answers to, and
/// which value type it stores) is the type parameter `L`, an entry list
/// normally spelled with the [`StaticMap!`](crate::StaticMap!) type macro
/// and built with [`static_map!`](crate::static_map). Key-existence checks
/// happen during compilation: looking up a key the map does not have is a
/// type error, and declaring the same key twice is a const-evaluation
/// error. The runtime artifact of a lookup is a direct field access.
///
/// ```
/// use statmap::static_map;
/// use statmap::statkey::U64Key;
///
/// let mut map = static_map! {
///     U64Key<10> => 100_i32,
///     U64Key<20> => 'A',
///     U64Key<30> => 3.14_f64,
/// };
/// assert_eq!(*map.at::<U64Key<10>, _>(), 100);
/// map.set::<U64Key<20>, _>('B');
/// assert!(map.contains_key::<U64Key<30>>());
/// assert_eq!(map.get_or::<U64Key<99>, i32>(-1), -1);
/// ```
///
/// Declaring the same key twice fails to compile:
///
/// ```compile_fail
/// use statmap::static_map;
/// use statmap::statkey::U64Key;
///
/// let map = static_map! {
///     U64Key<10> => 1_i32,
///     U64Key<10> => 2_i32,
/// };
/// ```
#[derive(Clone)]
pub struct StaticMap<L: EntryList> {
    entries: L,
}

impl StaticMap<Nil> {
    /// The map with no entries.
    #[inline]
    pub const fn empty() -> Self {
        StaticMap { entries: Nil }
    }
}

impl<L: EntryList> StaticMap<L> {
    /// The number of slots, fixed at compile time.
    pub const LEN: usize = L::LEN;

    /// The key ids, in declaration order.
    pub const KEYS: KeySet = L::KEYS;

    /// Create a map from an already-built entry list.
    ///
    /// This is the one true constructor: every other construction path
    /// (`Default`, [`Self::from_values`], [`static_map!`](crate::static_map),
    /// `merge`, `filter`) routes through it, so the key-uniqueness invariant
    /// is enforced here. A duplicate key fails to compile.
    #[inline]
    pub fn from_entries(entries: L) -> Self {
        const {
            assert!(L::KEYS.all_distinct(), "duplicate key in static map");
        }
        StaticMap { entries }
    }

    /// Create a map from a tuple of values, one per slot in declaration
    /// order, or a strict prefix thereof.
    ///
    /// Slots past the supplied prefix are default-constructed; if one of
    /// their value types has no [`Default`], the construction refuses to
    /// compile. Values convert into the slot types through [`Into`].
    ///
    /// ```
    /// use statmap::StaticMap;
    /// use statmap::statkey::U64Key;
    ///
    /// type Config = StaticMap![U64Key<10> => i32, U64Key<20> => char, U64Key<30> => f64];
    ///
    /// let partial = Config::from_values((100,));
    /// assert_eq!(*partial.at::<U64Key<10>, _>(), 100);
    /// assert_eq!(*partial.at::<U64Key<20>, _>(), '\0');
    /// assert_eq!(*partial.at::<U64Key<30>, _>(), 0.0);
    /// ```
    #[inline]
    pub fn from_values<T>(values: T) -> Self
    where
        L: BuildValues<T>,
    {
        Self::from_entries(L::build_values(values))
    }

    /// The number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        L::LEN
    }

    /// Return true if this map has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        L::LEN == 0
    }

    /// The key ids, in declaration order.
    #[inline]
    pub fn keys(&self) -> KeySet {
        L::KEYS
    }

    /// Return true if the key `K` is one of this map's keys.
    ///
    /// Resolved at compile time; usable in `const` position.
    #[inline]
    pub const fn contains<K: Key>() -> bool {
        L::KEYS.contains(K::ID)
    }

    /// Instance form of [`Self::contains`].
    #[inline]
    pub fn contains_key<K: Key>(&self) -> bool {
        Self::contains::<K>()
    }

    /// Return true if every key in the tuple `KS` is one of this map's
    /// keys. Vacuously true for the empty tuple.
    #[inline]
    pub const fn contains_all<KS: KeyTuple>() -> bool {
        L::KEYS.contains_all(&KS::IDS)
    }

    /// Return true if at least one key in the tuple `KS` is one of this
    /// map's keys. False for the empty tuple.
    #[inline]
    pub const fn contains_any<KS: KeyTuple>() -> bool {
        L::KEYS.contains_any(&KS::IDS)
    }

    /// A reference to the value stored under the key `K`.
    ///
    /// The slot is resolved during compilation; there is no runtime search
    /// and no failure path. A key the map does not have is a type error:
    ///
    /// ```compile_fail
    /// use statmap::static_map;
    /// use statmap::statkey::U64Key;
    ///
    /// let map = static_map! { U64Key<10> => 1_i32 };
    /// let _ = map.at::<U64Key<99>, _>();
    /// ```
    ///
    /// The second type argument is the inferred resolution path; spell it
    /// `_`.
    #[inline]
    pub fn at<K: Key, I>(&self) -> &<L as Find<K, I>>::Value
    where
        L: Find<K, I>,
    {
        <L as Find<K, I>>::get(&self.entries)
    }

    /// A mutable reference to the value stored under the key `K`.
    ///
    /// Compile error if the key is absent, like [`Self::at`].
    #[inline]
    pub fn at_mut<K: Key, I>(&mut self) -> &mut <L as Find<K, I>>::Value
    where
        L: Find<K, I>,
    {
        <L as Find<K, I>>::get_mut(&mut self.entries)
    }

    /// Store `value` under the key `K`.
    ///
    /// Compile error if the key is absent, like [`Self::at`].
    #[inline]
    pub fn set<K: Key, I>(&mut self, value: <L as Find<K, I>>::Value)
    where
        L: Find<K, I>,
    {
        *<L as Find<K, I>>::get_mut(&mut self.entries) = value;
    }

    /// The value stored under `K` if the key is present *and* the slot's
    /// value type is exactly `D`; otherwise `default`.
    ///
    /// This is the one lookup with a defined miss. The default is a
    /// required argument, and its type decides the return type; a present
    /// slot of a different value type yields the default (use
    /// [`Self::at`] when the key is known to be present).
    #[inline]
    pub fn get_or<K: Key, D: Clone + 'static>(&self, default: D) -> D
    where
        L: DynEntryList,
    {
        match self.entries.entry_by_id(K::ID) {
            Some(entry) => match entry.value_any().downcast_ref::<D>() {
                Some(value) => value.clone(),
                None => default,
            },
            None => default,
        }
    }

    /// Reset every value to its default. The key set is untouched.
    ///
    /// Compile error if some value type is not default-constructible.
    /// Clearing twice is the same as clearing once.
    #[inline]
    pub fn clear(&mut self)
    where
        L: ClearEntries,
    {
        self.entries.clear_values();
    }

    /// Invoke the visitor once per entry, in declaration order.
    ///
    /// The visitor must implement [`Visit`](crate::Visit) for every entry
    /// type in the map: one blanket impl for uniform visitors, or one impl
    /// per entry shape for type-specific work.
    #[inline]
    pub fn for_each<F>(&self, visitor: &mut F)
    where
        L: ForEach<F>,
    {
        self.entries.for_each(visitor);
    }

    /// Invoke the visitor once per entry, in declaration order, with
    /// mutable access.
    ///
    /// There is no early termination; if the visitor panics, entries
    /// already visited keep their new values.
    #[inline]
    pub fn for_each_mut<F>(&mut self, visitor: &mut F)
    where
        L: ForEachMut<F>,
    {
        self.entries.for_each_mut(visitor);
    }

    /// Like [`Self::for_each_mut`], also passing each entry's zero-based
    /// declaration-order position.
    #[inline]
    pub fn for_each_indexed<F>(&mut self, visitor: &mut F)
    where
        L: ForEachIndexed<F>,
    {
        self.entries.for_each_indexed(0, visitor);
    }

    /// Best-effort partial overwrite from another map of arbitrary
    /// composition.
    ///
    /// For every key shared with `other`, this map's value is overwritten
    /// with a clone of `other`'s (the value types must be identical; a
    /// same-key slot of a different type is left alone). Keys unique to
    /// `other` are silently ignored; partial overlap is the intended use.
    /// Returns `&mut self` for chaining.
    pub fn update<M: DynEntryList>(&mut self, other: &StaticMap<M>) -> &mut Self
    where
        L: DynEntryList,
    {
        let entries = &mut self.entries;
        other.entries.for_each_dyn(&mut |entry| {
            if let Some(slot) = entries.entry_by_id_mut(entry.key_id()) {
                slot.assign_value(entry.value_any());
            }
        });
        self
    }

    /// [`Self::update`] sourced from a single loose entry.
    pub fn update_entry<E: DynEntry>(&mut self, entry: &E) -> &mut Self
    where
        L: DynEntryList,
    {
        if let Some(slot) = self.entries.entry_by_id_mut(entry.key_id()) {
            slot.assign_value(entry.value_any());
        }
        self
    }

    /// [`Self::update`] sourced from a tuple of loose entries, applied in
    /// order.
    pub fn update_entries<B: EntryBatch>(&mut self, batch: B) -> &mut Self
    where
        L: DynEntryList,
    {
        let entries = &mut self.entries;
        batch.for_each_dyn(&mut |entry| {
            if let Some(slot) = entries.entry_by_id_mut(entry.key_id()) {
                slot.assign_value(entry.value_any());
            }
        });
        self
    }

    /// A copy of this map with every key shared with `other` taking
    /// `other`'s value. The originals are unmodified.
    ///
    /// Together with [`Self::merge`] this covers the union-merge semantics:
    /// `updated` handles the overlapping keys, `merge` the disjoint ones.
    #[inline]
    pub fn updated<M: DynEntryList>(&self, other: &StaticMap<M>) -> Self
    where
        L: DynEntryList + Clone,
    {
        let mut result = self.clone();
        result.update(other);
        result
    }

    /// A new map holding this map's entries followed by `other`'s.
    ///
    /// The key sets must be disjoint; a shared key is a duplicate in the
    /// result and fails to compile through the uniqueness assertion. For
    /// overlapping maps, resolve the overlap first, e.g.
    /// `a.updated(&b)` for keys `a` already has, or [`Self::select`] to
    /// carve `b` down to its unique keys. Merging with the empty map is an
    /// identity that returns a value-equal map.
    #[inline]
    pub fn merge<M>(&self, other: &StaticMap<M>) -> StaticMap<<L as Concat<M>>::Output>
    where
        L: Concat<M> + Clone,
        M: EntryList + Clone,
    {
        StaticMap::from_entries(self.entries.clone().concat(other.entries.clone()))
    }

    /// A new map keeping exactly the entries the selector `S` accepts.
    ///
    /// The verdict is computed per entry *type* at compile time; runtime
    /// work is limited to cloning the surviving values. Filtering with
    /// [`KeepAll`](crate::KeepAll) copies the map; with
    /// [`DropAll`](crate::DropAll) it yields the empty map.
    #[inline]
    pub fn filter<S>(&self) -> StaticMap<<L as FilterEntries<S>>::Output>
    where
        L: FilterEntries<S> + Clone,
    {
        StaticMap::from_entries(self.entries.clone().filter_entries())
    }

    /// A new map containing exactly the keys in the tuple `KS`, with values
    /// cloned from this map.
    ///
    /// Every named key must be present; an absent key is a compile error,
    /// since this reuses the [`Self::at`] resolution machinery. The second
    /// type argument is the tuple of inferred resolution paths; spell it
    /// `_`.
    #[inline]
    pub fn select<KS, IS>(&self) -> StaticMap<<L as SelectKeys<KS, IS>>::Output>
    where
        L: SelectKeys<KS, IS>,
    {
        StaticMap::from_entries(self.entries.select_keys())
    }

    /// References to every value, in declaration order, as a nested tuple
    /// `(&V1, (&V2, ()))`.
    #[inline]
    pub fn values(&self) -> L::Values<'_> {
        self.entries.values()
    }

    /// Mutable references to every value, in declaration order.
    #[inline]
    pub fn values_mut(&mut self) -> L::ValuesMut<'_> {
        self.entries.values_mut()
    }

    /// Direct access to the underlying entry list.
    ///
    /// This is a view over the same storage the keyed operations use, not a
    /// copy.
    #[inline]
    pub fn entries(&self) -> &L {
        &self.entries
    }

    /// Mutable direct access to the underlying entry list.
    #[inline]
    pub fn entries_mut(&mut self) -> &mut L {
        &mut self.entries
    }

    /// A cursor positioned at the first entry.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, L> {
        self.cursor_at(0)
    }

    /// A cursor at `index`, clamped to the one-past-end position.
    #[inline]
    pub fn cursor_at(&self, index: usize) -> Cursor<'_, L> {
        Cursor::new(self, index.min(L::LEN))
    }

    /// The one-past-end cursor position.
    #[inline]
    pub fn end(&self) -> Cursor<'_, L> {
        self.cursor_at(L::LEN)
    }
}

impl<L: EntryList + Default> Default for StaticMap<L> {
    #[inline]
    fn default() -> Self {
        Self::from_entries(L::default())
    }
}

/// Keyed-set equality: two maps are equal iff they are the same size and,
/// for every entry of `other`, this map holds a same-key slot with an equal
/// value of the identical type. Declaration order does not matter.
impl<L: DynEntryList, M: DynEntryList> PartialEq<StaticMap<M>> for StaticMap<L> {
    fn eq(&self, other: &StaticMap<M>) -> bool {
        L::LEN == M::LEN
            && other.entries.all_entries(&mut |entry| {
                self.entries
                    .entry_by_id(entry.key_id())
                    .is_some_and(|slot| slot.value_eq(entry.value_any()))
            })
    }
}

impl<L: DebugEntries> Debug for StaticMap<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        self.entries.fmt_entries(&mut map);
        map.finish()
    }
}
