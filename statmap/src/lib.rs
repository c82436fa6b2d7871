//! Fixed-composition heterogeneous maps with compile-time checked keys.
//!
//! A [`StaticMap`] binds compile-time keys (marker types implementing
//! [`statkey::Key`]) to runtime values of per-slot types. The composition is
//! part of the map's type, so key existence is a property the compiler
//! checks: `at`/`set` on an undeclared key refuse to compile, declaring the
//! same key twice refuses to compile, and key resolution costs nothing at
//! runtime (the lookup monomorphizes to a field access).
//!
//! ```
//! use statmap::{static_map, MapEntry, VisitMut};
//! use statmap::statkey::{CharKey, U64Key};
//!
//! let mut map = static_map! {
//!     U64Key<10> => 100_i32,
//!     U64Key<20> => 'A',
//!     U64Key<30> => 3.14_f64,
//! };
//!
//! // compile-time-resolved access
//! assert_eq!(*map.at::<U64Key<10>, _>(), 100);
//! *map.at_mut::<U64Key<10>, _>() += 1;
//! assert!(map.contains_key::<U64Key<30>>());
//! assert!(!map.contains_key::<CharKey<'?'>>());
//!
//! // visitor-based traversal (slots have different types, so the
//! // callback is a trait impl rather than a closure)
//! struct CountEntries(usize);
//! impl<E: MapEntry> VisitMut<E> for CountEntries {
//!     fn entry(&mut self, _entry: &mut E) {
//!         self.0 += 1;
//!     }
//! }
//! let mut counter = CountEntries(0);
//! map.for_each_mut(&mut counter);
//! assert_eq!(counter.0, 3);
//! ```
//!
//! The operations that *depend on* a key being absent ([`StaticMap::get_or`],
//! [`StaticMap::update`], map equality) dispatch on the key id tag instead
//! of trait selection; see [`DynEntry`] for the value bounds they need.
#![no_std]

mod build;
mod cursor;
mod dynamic;
mod find;
mod item;
mod list;
#[macro_use]
mod macros;
mod map;
mod select;
mod visit;

/// Re-export of the key crate; key types in map signatures come from here.
pub extern crate statkey;

pub use build::BuildValues;
pub use cursor::Cursor;
pub use dynamic::{DynEntry, DynEntryList, EntryBatch};
pub use find::{Find, Here, There};
pub use item::{Item, MapEntry};
pub use list::{ClearEntries, Concat, Cons, DebugEntries, EntryList, Nil};
pub use map::StaticMap;
pub use select::{DropAll, False, FilterEntries, KeepAll, SelectKeys, Selector, Sift, True, Truth};
pub use visit::{ForEach, ForEachIndexed, ForEachMut, Visit, VisitAt, VisitIndexed, VisitMut};
