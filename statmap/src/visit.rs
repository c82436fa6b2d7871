//! Visitor traits for traversing a map's heterogeneous entries.
//!
//! Every slot of a static map may have a different concrete [`Item`] type,
//! so there is no common reference type a `for_each` could hand out and no
//! `Iterator` impl is possible. Traversal instead passes each entry *into*
//! a visitor, and the visitor traits are parameterized by the entry type:
//! the fold traits ([`ForEach`] and friends) collect one
//! `Visit<Item<K, V>>` obligation per slot, so a visitor declares exactly
//! what it can handle.
//!
//! A visitor meant to treat every entry uniformly provides one blanket
//! impl:
//!
//! ```
//! use statmap::{MapEntry, Visit};
//!
//! /// Counts entries, whatever they hold.
//! struct Count(usize);
//! impl<E: MapEntry> Visit<E> for Count {
//!     fn entry(&mut self, _entry: &E) {
//!         self.0 += 1;
//!     }
//! }
//! ```
//!
//! A visitor doing type-specific work implements the trait once per entry
//! shape instead (it must cover every slot of the maps it visits, the same
//! covering rule as [`Selector`](crate::Selector)):
//!
//! ```
//! use statmap::{Item, VisitMut};
//! use statmap::statkey::Key;
//!
//! /// Doubles integers, uppercases characters.
//! struct Normalize;
//! impl<K: Key> VisitMut<Item<K, i32>> for Normalize {
//!     fn entry(&mut self, entry: &mut Item<K, i32>) {
//!         *entry.value_mut() *= 2;
//!     }
//! }
//! impl<K: Key> VisitMut<Item<K, char>> for Normalize {
//!     fn entry(&mut self, entry: &mut Item<K, char>) {
//!         let upper = entry.value().to_ascii_uppercase();
//!         *entry.value_mut() = upper;
//!     }
//! }
//! ```
//!
//! [`Item`]: crate::Item

use statkey::Key;

use crate::item::{Item, MapEntry};
use crate::list::{Cons, EntryList, Nil};

/// A visitor receiving shared references to entries of type `E`.
pub trait Visit<E: MapEntry> {
    /// Called once per visited entry.
    fn entry(&mut self, entry: &E);
}

/// A visitor receiving mutable references to entries of type `E`.
///
/// Values may be mutated through [`MapEntry::value_mut`]; keys are part of
/// the type and cannot change.
pub trait VisitMut<E: MapEntry> {
    /// Called once per visited entry.
    fn entry(&mut self, entry: &mut E);
}

/// A mutable visitor that is also told each entry's declaration-order
/// position.
pub trait VisitIndexed<E: MapEntry> {
    /// Called once per visited entry with its zero-based position.
    fn entry(&mut self, index: usize, entry: &mut E);
}

/// An entry list traversable by the visitor `F`.
///
/// Implemented when `F` can visit every entry type in the list. Traversal
/// is in declaration order with no early termination; if the visitor
/// panics, entries already visited are not revisited or rolled back.
pub trait ForEach<F>: EntryList {
    /// Visit every entry in declaration order.
    fn for_each(&self, visitor: &mut F);
}

/// An entry list mutably traversable by the visitor `F`.
pub trait ForEachMut<F>: EntryList {
    /// Visit every entry mutably in declaration order.
    fn for_each_mut(&mut self, visitor: &mut F);
}

/// An entry list mutably traversable with positions by the visitor `F`.
pub trait ForEachIndexed<F>: EntryList {
    /// Visit every entry mutably, passing `base + offset` as its position.
    fn for_each_indexed(&mut self, base: usize, visitor: &mut F);
}

/// An entry list supporting positional dispatch into the visitor `F`.
///
/// This backs cursor dereference: the position is runtime data, so each
/// slot tests it in turn, but the chain is a fixed sequence of constant
/// comparisons after monomorphization.
pub trait VisitAt<F>: EntryList {
    /// Visit the entry at `index`, if any.
    ///
    /// Returns false (without invoking the visitor) when `index` is past
    /// the last entry; this is what makes cursor dereference at the end
    /// position a defined no-op.
    fn visit_at(&self, index: usize, visitor: &mut F) -> bool;
}

impl<F> ForEach<F> for Nil {
    #[inline]
    fn for_each(&self, _visitor: &mut F) {}
}

impl<F> ForEachMut<F> for Nil {
    #[inline]
    fn for_each_mut(&mut self, _visitor: &mut F) {}
}

impl<F> ForEachIndexed<F> for Nil {
    #[inline]
    fn for_each_indexed(&mut self, _base: usize, _visitor: &mut F) {}
}

impl<F> VisitAt<F> for Nil {
    #[inline]
    fn visit_at(&self, _index: usize, _visitor: &mut F) -> bool {
        false
    }
}

impl<K: Key, V, T, F> ForEach<F> for Cons<Item<K, V>, T>
where
    T: ForEach<F>,
    F: Visit<Item<K, V>>,
{
    #[inline]
    fn for_each(&self, visitor: &mut F) {
        visitor.entry(&self.head);
        self.tail.for_each(visitor);
    }
}

impl<K: Key, V, T, F> ForEachMut<F> for Cons<Item<K, V>, T>
where
    T: ForEachMut<F>,
    F: VisitMut<Item<K, V>>,
{
    #[inline]
    fn for_each_mut(&mut self, visitor: &mut F) {
        visitor.entry(&mut self.head);
        self.tail.for_each_mut(visitor);
    }
}

impl<K: Key, V, T, F> ForEachIndexed<F> for Cons<Item<K, V>, T>
where
    T: ForEachIndexed<F>,
    F: VisitIndexed<Item<K, V>>,
{
    #[inline]
    fn for_each_indexed(&mut self, base: usize, visitor: &mut F) {
        visitor.entry(base, &mut self.head);
        self.tail.for_each_indexed(base + 1, visitor);
    }
}

impl<K: Key, V, T, F> VisitAt<F> for Cons<Item<K, V>, T>
where
    T: VisitAt<F>,
    F: Visit<Item<K, V>>,
{
    #[inline]
    fn visit_at(&self, index: usize, visitor: &mut F) -> bool {
        if index == 0 {
            visitor.entry(&self.head);
            true
        } else {
            self.tail.visit_at(index - 1, visitor)
        }
    }
}
