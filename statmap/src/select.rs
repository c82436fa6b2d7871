//! Compile-time filtering and key selection.
//!
//! [`FilterEntries`] computes a *new* entry-list type by keeping exactly the
//! entries a [`Selector`] accepts. The verdict is a type ([`True`] or
//! [`False`]) rather than a `const bool`, because the verdict has to steer
//! a type-level computation: [`Sift`] is implemented on the verdict types
//! themselves, consing the entry for [`True`] and dropping it for
//! [`False`].
//!
//! [`SelectKeys`] is the ergonomic companion: instead of writing a selector,
//! name the keys to keep as a tuple and get back a map of exactly those
//! slots (each must exist: it reuses [`Find`], so an absent key refuses to
//! compile).

use statkey::Key;

use crate::find::Find;
use crate::item::{Item, MapEntry};
use crate::list::{sealed, Cons, EntryList, Nil};

/// The accepting verdict of a [`Selector`].
#[derive(Copy, Clone, Debug)]
pub struct True;

/// The rejecting verdict of a [`Selector`].
#[derive(Copy, Clone, Debug)]
pub struct False;

/// A type-level boolean: [`True`] or [`False`]. Sealed.
pub trait Truth: sealed::Sealed {
    /// The boolean this type denotes.
    const VALUE: bool;
}

impl sealed::Sealed for True {}
impl sealed::Sealed for False {}

impl Truth for True {
    const VALUE: bool = true;
}
impl Truth for False {
    const VALUE: bool = false;
}

/// A compile-time predicate over entry types.
///
/// The verdict is evaluated once per entry *type* during trait selection;
/// it never sees runtime values. Implementations name concrete entry shapes
/// and pick a verdict per shape:
///
/// ```
/// use statmap::{Item, Selector, True, False};
/// use statmap::statkey::Key;
///
/// /// Keeps integer slots, drops character slots.
/// struct IntegersOnly;
/// impl<K: Key> Selector<Item<K, i32>> for IntegersOnly {
///     type Keep = True;
/// }
/// impl<K: Key> Selector<Item<K, char>> for IntegersOnly {
///     type Keep = False;
/// }
/// ```
///
/// A selector must cover every entry type of the map it filters; an entry
/// it does not cover is a compile error, not a silent drop.
pub trait Selector<E: MapEntry> {
    /// Whether entries of this type survive the filter.
    type Keep: Truth;
}

/// The selector that keeps every entry; filtering with it copies the map.
#[derive(Copy, Clone, Debug, Default)]
pub struct KeepAll;

impl<E: MapEntry> Selector<E> for KeepAll {
    type Keep = True;
}

/// The selector that drops every entry; filtering with it yields the empty
/// map.
#[derive(Copy, Clone, Debug, Default)]
pub struct DropAll;

impl<E: MapEntry> Selector<E> for DropAll {
    type Keep = False;
}

/// The conditional cons driven by a [`Truth`] verdict.
///
/// Implemented on the verdict types: [`True`] keeps the head entry in front
/// of the already-filtered tail, [`False`] discards it.
pub trait Sift<H, T: EntryList>: Truth {
    /// The filtered list including (or excluding) the head.
    type Output: EntryList;
    /// Combine the head verdict with the filtered tail.
    fn sift(head: H, tail: T) -> Self::Output;
}

impl<K: Key, V, T: EntryList> Sift<Item<K, V>, T> for True {
    type Output = Cons<Item<K, V>, T>;

    #[inline]
    fn sift(head: Item<K, V>, tail: T) -> Self::Output {
        Cons::new(head, tail)
    }
}

impl<H, T: EntryList> Sift<H, T> for False {
    type Output = T;

    #[inline]
    fn sift(_head: H, tail: T) -> T {
        tail
    }
}

/// An entry list filterable by the selector `S`.
pub trait FilterEntries<S>: EntryList {
    /// The list of surviving entries, in declaration order.
    type Output: EntryList;
    /// Keep exactly the entries `S` accepts.
    fn filter_entries(self) -> Self::Output;
}

impl<S> FilterEntries<S> for Nil {
    type Output = Nil;

    #[inline]
    fn filter_entries(self) -> Nil {
        self
    }
}

impl<S, K: Key, V, T> FilterEntries<S> for Cons<Item<K, V>, T>
where
    T: FilterEntries<S>,
    S: Selector<Item<K, V>>,
    <S as Selector<Item<K, V>>>::Keep: Sift<Item<K, V>, <T as FilterEntries<S>>::Output>,
{
    type Output = <<S as Selector<Item<K, V>>>::Keep as Sift<
        Item<K, V>,
        <T as FilterEntries<S>>::Output,
    >>::Output;

    #[inline]
    fn filter_entries(self) -> Self::Output {
        <<S as Selector<Item<K, V>>>::Keep as Sift<
            Item<K, V>,
            <T as FilterEntries<S>>::Output,
        >>::sift(self.head, self.tail.filter_entries())
    }
}

/// An entry list from which the key tuple `KS` can be projected out.
///
/// `IS` is the tuple of [`Find`] paths, one per key; callers leave it `_`.
/// The projection clones the selected values into a fresh list.
pub trait SelectKeys<KS, IS>: EntryList {
    /// The projected list, in key-tuple order.
    type Output: EntryList;
    /// Clone the selected slots into a new list.
    fn select_keys(&self) -> Self::Output;
}

impl<L: EntryList> SelectKeys<(), ()> for L {
    type Output = Nil;

    #[inline]
    fn select_keys(&self) -> Nil {
        Nil
    }
}

macro_rules! select_list {
    ($list:ident ;) => { Nil };
    ($list:ident ; ($key:ident, $path:ident) $(, $rest:tt)*) => {
        Cons<Item<$key, <$list as Find<$key, $path>>::Value>, select_list!($list ; $($rest),*)>
    };
}

macro_rules! select_values {
    ($list:ident, $this:ident ;) => { Nil };
    ($list:ident, $this:ident ; ($key:ident, $path:ident) $(, $rest:tt)*) => {
        Cons::new(
            Item::new(<$list as Find<$key, $path>>::get($this).clone()),
            select_values!($list, $this ; $($rest),*),
        )
    };
}

macro_rules! impl_select_keys {
    ($(($key:ident, $path:ident)),+) => {
        impl<L, $($key, $path,)+> SelectKeys<($($key,)+), ($($path,)+)> for L
        where
            L: EntryList $(+ Find<$key, $path>)+,
            $($key: Key,)+
            $(<L as Find<$key, $path>>::Value: Clone,)+
        {
            type Output = select_list!(L ; $(($key, $path)),+);

            fn select_keys(&self) -> Self::Output {
                let this = self;
                select_values!(L, this ; $(($key, $path)),+)
            }
        }
    };
}

impl_select_keys!((K1, I1));
impl_select_keys!((K1, I1), (K2, I2));
impl_select_keys!((K1, I1), (K2, I2), (K3, I3));
impl_select_keys!((K1, I1), (K2, I2), (K3, I3), (K4, I4));
impl_select_keys!((K1, I1), (K2, I2), (K3, I3), (K4, I4), (K5, I5));
impl_select_keys!((K1, I1), (K2, I2), (K3, I3), (K4, I4), (K5, I5), (K6, I6));
impl_select_keys!((K1, I1), (K2, I2), (K3, I3), (K4, I4), (K5, I5), (K6, I6), (K7, I7));
impl_select_keys!(
    (K1, I1),
    (K2, I2),
    (K3, I3),
    (K4, I4),
    (K5, I5),
    (K6, I6),
    (K7, I7),
    (K8, I8)
);
