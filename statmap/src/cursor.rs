//! Defines [`Cursor`], the positional traversal handle over a map.

use core::fmt::{Debug, Formatter};

use crate::list::EntryList;
use crate::map::StaticMap;
use crate::visit::VisitAt;

/// A position-based cursor over a borrowed [`StaticMap`].
///
/// Positions range over `[0, LEN]`, with `LEN` the one-past-end sentinel;
/// movement saturates at both ends rather than wrapping or panicking.
/// Because every slot may have a different concrete item type, the cursor
/// cannot hand out "the current entry" by reference; dereference happens
/// through [`Self::visit`], which passes the entry into a
/// [`Visit`](crate::Visit) callback instead. Mutation goes through the map
/// itself (`at_mut`, `for_each_mut`).
///
/// Cursors are `Copy`; a copy carries an independent position. Two cursors
/// compare equal only when they borrow the *same* map instance and hold
/// the same position.
pub struct Cursor<'m, L: EntryList> {
    map: &'m StaticMap<L>,
    index: usize,
}

impl<'m, L: EntryList> Cursor<'m, L> {
    #[inline]
    pub(crate) fn new(map: &'m StaticMap<L>, index: usize) -> Self {
        Cursor { map, index }
    }

    /// The current position, in `[0, LEN]`.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Return true if this cursor sits at the one-past-end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.index == L::LEN
    }

    /// Move one position forward, saturating at the end sentinel.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        if self.index < L::LEN {
            self.index += 1;
        }
        self
    }

    /// Move one position backward, saturating at the first entry.
    #[inline]
    pub fn retreat(&mut self) -> &mut Self {
        if self.index > 0 {
            self.index -= 1;
        }
        self
    }

    /// Dispatch the entry at the current position into the visitor.
    ///
    /// Returns whether the visitor ran; at the end sentinel this is a
    /// defined no-op returning false, never a fault.
    #[inline]
    pub fn visit<F>(&self, visitor: &mut F) -> bool
    where
        L: VisitAt<F>,
    {
        self.map.entries().visit_at(self.index, visitor)
    }
}

impl<L: EntryList> Clone for Cursor<'_, L> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}
impl<L: EntryList> Copy for Cursor<'_, L> {}

impl<L: EntryList> PartialEq for Cursor<'_, L> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.map, other.map) && self.index == other.index
    }
}
impl<L: EntryList> Eq for Cursor<'_, L> {}

impl<L: EntryList> Debug for Cursor<'_, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &L::LEN)
            .finish()
    }
}
