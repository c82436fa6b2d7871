//! Tagged dynamic dispatch over entries.
//!
//! Operations whose behavior depends on a key being *absent* (`get_or`,
//! `update`, keyed-set equality) cannot be resolved purely by trait
//! selection: Rust has no negative reasoning, so there is no impl that
//! means "this list lacks key K". These operations instead treat each
//! slot as a tagged value: the [`KeyId`] is the tag, and [`Any`] checks the
//! payload type. Every tag comparison pits two compile-time constants
//! against each other, so the "scan" folds to straight-line code after
//! monomorphization.
//!
//! The dynamic surface requires `Clone + PartialEq + 'static` of the value
//! types it touches; maps holding other values still support the entire
//! static surface.

use core::any::Any;

use statkey::{Key, KeyId};

use crate::item::Item;
use crate::list::{Cons, EntryList, Nil};

/// An entry viewed through its key tag and type-erased value.
pub trait DynEntry {
    /// The id of this entry's key.
    fn key_id(&self) -> KeyId;
    /// The value, type-erased.
    fn value_any(&self) -> &dyn Any;
    /// The value, type-erased and mutable.
    fn value_any_mut(&mut self) -> &mut dyn Any;
    /// Compare the value against a type-erased other value.
    ///
    /// False when the types differ, mirroring the rule that only same-key,
    /// same-value-type entries are comparable dynamically.
    fn value_eq(&self, other: &dyn Any) -> bool;
    /// Overwrite the value with a clone of `source`, if the types match.
    ///
    /// Returns whether an assignment happened. A type mismatch is a defined
    /// no-op: dynamic updates only flow between identical value types
    /// (static `set` is the conversion-friendly path).
    fn assign_value(&mut self, source: &dyn Any) -> bool;
}

impl<K: Key, V: Clone + PartialEq + 'static> DynEntry for Item<K, V> {
    #[inline]
    fn key_id(&self) -> KeyId {
        K::ID
    }

    #[inline]
    fn value_any(&self) -> &dyn Any {
        &self.value
    }

    #[inline]
    fn value_any_mut(&mut self) -> &mut dyn Any {
        &mut self.value
    }

    #[inline]
    fn value_eq(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<V>()
            .is_some_and(|other| self.value == *other)
    }

    #[inline]
    fn assign_value(&mut self, source: &dyn Any) -> bool {
        match source.downcast_ref::<V>() {
            Some(source) => {
                self.value.clone_from(source);
                true
            }
            None => false,
        }
    }
}

/// An entry list whose entries all support [`DynEntry`].
pub trait DynEntryList: EntryList {
    /// The entry tagged with `id`, if any.
    fn entry_by_id(&self, id: KeyId) -> Option<&dyn DynEntry>;
    /// The entry tagged with `id`, if any, mutably.
    fn entry_by_id_mut(&mut self, id: KeyId) -> Option<&mut dyn DynEntry>;
    /// Call `each` for every entry in declaration order.
    fn for_each_dyn(&self, each: &mut dyn FnMut(&dyn DynEntry));
    /// Return true if `pred` holds for every entry.
    ///
    /// Vacuously true for the empty list.
    fn all_entries(&self, pred: &mut dyn FnMut(&dyn DynEntry) -> bool) -> bool;
}

impl DynEntryList for Nil {
    #[inline]
    fn entry_by_id(&self, _id: KeyId) -> Option<&dyn DynEntry> {
        None
    }

    #[inline]
    fn entry_by_id_mut(&mut self, _id: KeyId) -> Option<&mut dyn DynEntry> {
        None
    }

    #[inline]
    fn for_each_dyn(&self, _each: &mut dyn FnMut(&dyn DynEntry)) {}

    #[inline]
    fn all_entries(&self, _pred: &mut dyn FnMut(&dyn DynEntry) -> bool) -> bool {
        true
    }
}

impl<K, V, T> DynEntryList for Cons<Item<K, V>, T>
where
    K: Key,
    V: Clone + PartialEq + 'static,
    T: DynEntryList,
{
    #[inline]
    fn entry_by_id(&self, id: KeyId) -> Option<&dyn DynEntry> {
        // constant comparison per slot, folded after monomorphization
        if K::ID == id {
            Some(&self.head)
        } else {
            self.tail.entry_by_id(id)
        }
    }

    #[inline]
    fn entry_by_id_mut(&mut self, id: KeyId) -> Option<&mut dyn DynEntry> {
        if K::ID == id {
            Some(&mut self.head)
        } else {
            self.tail.entry_by_id_mut(id)
        }
    }

    #[inline]
    fn for_each_dyn(&self, each: &mut dyn FnMut(&dyn DynEntry)) {
        each(&self.head);
        self.tail.for_each_dyn(each);
    }

    #[inline]
    fn all_entries(&self, pred: &mut dyn FnMut(&dyn DynEntry) -> bool) -> bool {
        pred(&self.head) && self.tail.all_entries(pred)
    }
}

/// A batch of loose entries, used by `update_entries`.
///
/// Implemented for tuples of up to 8 [`DynEntry`] values (including the
/// empty tuple, which updates nothing).
pub trait EntryBatch {
    /// Call `each` for every entry in the batch, in order.
    fn for_each_dyn(&self, each: &mut dyn FnMut(&dyn DynEntry));
}

impl EntryBatch for () {
    #[inline]
    fn for_each_dyn(&self, _each: &mut dyn FnMut(&dyn DynEntry)) {}
}

macro_rules! impl_entry_batch {
    ($(($entry:ident, $bind:ident)),+) => {
        impl<$($entry: DynEntry),+> EntryBatch for ($($entry,)+) {
            #[inline]
            fn for_each_dyn(&self, each: &mut dyn FnMut(&dyn DynEntry)) {
                let ($($bind,)+) = self;
                $(each($bind);)+
            }
        }
    };
}

impl_entry_batch!((E1, e1));
impl_entry_batch!((E1, e1), (E2, e2));
impl_entry_batch!((E1, e1), (E2, e2), (E3, e3));
impl_entry_batch!((E1, e1), (E2, e2), (E3, e3), (E4, e4));
impl_entry_batch!((E1, e1), (E2, e2), (E3, e3), (E4, e4), (E5, e5));
impl_entry_batch!((E1, e1), (E2, e2), (E3, e3), (E4, e4), (E5, e5), (E6, e6));
impl_entry_batch!((E1, e1), (E2, e2), (E3, e3), (E4, e4), (E5, e5), (E6, e6), (E7, e7));
impl_entry_batch!(
    (E1, e1),
    (E2, e2),
    (E3, e3),
    (E4, e4),
    (E5, e5),
    (E6, e6),
    (E7, e7),
    (E8, e8)
);
