//! Compile-time key resolution: mapping a key type to its storage slot.
//!
//! [`Find`] is the core dispatch mechanism of the whole library. Its two
//! impls walk the entry list during trait selection: one matches when the
//! head entry's key is the one being looked up, the other steps past the
//! head into the tail. The third type parameter is a *path* (`Here` or
//! `There<...>`) that makes the two impls non-overlapping; callers leave it
//! as `_` and the compiler infers the unique path to the slot.
//!
//! The consequences match the container's contract exactly:
//! - a declared key has exactly one path (keys are unique), so inference
//!   succeeds and resolves to a fixed slot with no runtime search;
//! - an undeclared key has no path, so `at`/`set` on it refuse to compile.

use statkey::Key;

use crate::item::Item;
use crate::list::{Cons, EntryList};

/// Resolution path: the key is at the head of the list.
pub struct Here {
    _priv: (),
}

/// Resolution path: the key is somewhere in the tail of the list.
pub struct There<I> {
    _marker: core::marker::PhantomData<I>,
}

/// An entry list containing the key `K`, with `I` the inferred path to it.
///
/// See the [module docs](self) for how inference drives this.
pub trait Find<K: Key, I>: EntryList {
    /// The value type stored in the resolved slot.
    type Value;

    /// A reference to the resolved slot's value.
    fn get(&self) -> &Self::Value;
    /// A mutable reference to the resolved slot's value.
    fn get_mut(&mut self) -> &mut Self::Value;
}

impl<K: Key, V, T: EntryList> Find<K, Here> for Cons<Item<K, V>, T> {
    type Value = V;

    #[inline]
    fn get(&self) -> &V {
        &self.head.value
    }

    #[inline]
    fn get_mut(&mut self) -> &mut V {
        &mut self.head.value
    }
}

impl<K: Key, H, T, I> Find<K, There<I>> for Cons<H, T>
where
    T: Find<K, I>,
    Cons<H, T>: EntryList,
{
    type Value = T::Value;

    #[inline]
    fn get(&self) -> &Self::Value {
        self.tail.get()
    }

    #[inline]
    fn get_mut(&mut self) -> &mut Self::Value {
        self.tail.get_mut()
    }
}
