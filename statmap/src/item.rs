//! Defines [`Item`], a single key-value binding, and the [`MapEntry`] capability trait.

use core::fmt::{Debug, Formatter};
use core::marker::PhantomData;

use statkey::{Key, KeyId};

/// One slot of a static map: a compile-time key bound to a runtime value.
///
/// The key contributes no storage; it lives entirely in the type. Two item
/// instantiations interoperate (assignment via [`Item::assign`]/
/// [`Item::from_item`], equality via `==`) only when their key types match;
/// value types may differ where an [`Into`] conversion or a
/// [`PartialEq`] impl bridges them. Items with different keys are not
/// comparable at all; the mismatch is a type error rather than a runtime
/// `false`.
#[derive(Copy, Clone, Default)]
pub struct Item<K: Key, V> {
    pub(crate) value: V,
    key: PhantomData<K>,
}

impl<K: Key, V> Item<K, V> {
    /// The id of this item's key.
    pub const KEY_ID: KeyId = K::ID;

    /// Create an item holding `value`.
    #[inline]
    pub fn new(value: V) -> Self {
        Item {
            value,
            key: PhantomData,
        }
    }

    /// The key, as a (zero-sized) value.
    #[inline]
    pub fn key(&self) -> K {
        K::default()
    }

    /// The stored value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the stored value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consume the item, returning the stored value.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Overwrite the stored value, converting as needed.
    #[inline]
    pub fn set(&mut self, value: impl Into<V>) {
        self.value = value.into();
    }

    /// Overwrite the stored value, returning the previous one.
    #[inline]
    pub fn replace(&mut self, value: V) -> V {
        core::mem::replace(&mut self.value, value)
    }

    /// Convert a same-key item with a convertible value type.
    ///
    /// This is the explicit form of cross-instantiation compatibility:
    /// the key types must be identical, and the value conversion goes
    /// through [`Into`] rather than any implicit rule.
    #[inline]
    pub fn from_item<W: Into<V>>(other: Item<K, W>) -> Self {
        Item::new(other.value.into())
    }

    /// Assign the value of a same-key item, converting as needed.
    ///
    /// The key is part of the type and is never affected.
    #[inline]
    pub fn assign<W: Into<V>>(&mut self, other: Item<K, W>) {
        self.value = other.value.into();
    }
}

impl<K: Key, V: PartialEq<W>, W> PartialEq<Item<K, W>> for Item<K, V> {
    #[inline]
    fn eq(&self, other: &Item<K, W>) -> bool {
        self.value == other.value
    }
}
impl<K: Key, V: Eq> Eq for Item<K, V> {}

impl<K: Key, V: Debug> Debug for Item<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Item")
            .field("key", &K::ID)
            .field("value", &self.value)
            .finish()
    }
}

/// The capability of being a static map entry.
///
/// Implemented by every [`Item`] instantiation. Generic code (visitors,
/// selectors, update sources) is written against this trait rather than a
/// concrete item type, since every slot of a map may have a different one.
pub trait MapEntry {
    /// The key type of this entry.
    type Key: Key;
    /// The value type of this entry.
    type Value;

    /// The id of this entry's key.
    const KEY_ID: KeyId = <Self::Key as Key>::ID;

    /// The stored value.
    fn value(&self) -> &Self::Value;
    /// Mutable access to the stored value.
    fn value_mut(&mut self) -> &mut Self::Value;
    /// Consume the entry, returning the stored value.
    fn into_value(self) -> Self::Value
    where
        Self: Sized;

    /// The key, as a (zero-sized) value.
    #[inline]
    fn key(&self) -> Self::Key {
        Self::Key::default()
    }
}

impl<K: Key, V> MapEntry for Item<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    #[inline]
    fn into_value(self) -> V {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statkey::{CharKey, U64Key};
    use statkey::Key as _;

    #[test]
    fn cross_value_equality() {
        let a: Item<U64Key<1>, u32> = Item::new(7);
        let b: Item<U64Key<1>, u64> = Item::new(7);
        // u32: PartialEq<u64> does not exist, but u64 == u64 does
        let widened = Item::<U64Key<1>, u64>::from_item(a);
        assert_eq!(widened, b);
    }

    #[test]
    fn assignment_leaves_key_alone() {
        let mut slot: Item<CharKey<'x'>, f64> = Item::new(1.5);
        slot.assign(Item::<CharKey<'x'>, u32>::new(4));
        assert_eq!(*slot.value(), 4.0);
        assert_eq!(Item::<CharKey<'x'>, f64>::KEY_ID, CharKey::<'x'>::ID);
    }

    #[test]
    fn replace_returns_previous() {
        let mut slot: Item<U64Key<9>, &str> = Item::new("old");
        assert_eq!(slot.replace("new"), "old");
        assert_eq!(slot.into_value(), "new");
    }
}
