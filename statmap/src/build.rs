//! Construction of entry lists from plain value tuples.
//!
//! [`BuildValues`] covers both full construction (one value per entry) and
//! partial construction (a strict prefix of values, the remaining entries
//! default-constructed) through a single mechanism: each impl consumes a
//! value tuple of some arity and requires whatever part of the list it does
//! not populate to be [`Default`]. Supplying more values than entries, or a
//! prefix whose remainder contains a non-defaultable value type, refuses to
//! compile.
//!
//! Value tuples of up to 12 elements are supported, mirroring the standard
//! library's tuple-trait convention.

use statkey::Key;

use crate::item::Item;
use crate::list::{Cons, EntryList};

/// An entry list constructible from the value tuple `T`.
///
/// Values convert into the slot types through [`Into`], so e.g. an `u16`
/// may be supplied for an `u32` slot.
pub trait BuildValues<T>: EntryList {
    /// Build the list, defaulting every entry past the supplied prefix.
    fn build_values(values: T) -> Self;
}

macro_rules! prefix_list {
    (=> $tail:ty) => { $tail };
    ($key:ident $value:ident $(, $keys:ident $values:ident)* => $tail:ty) => {
        Cons<Item<$key, $value>, prefix_list!($($keys $values),* => $tail)>
    };
}

macro_rules! prefix_values {
    ($tail:expr ;) => { $tail };
    ($tail:expr ; $bind:ident $(, $binds:ident)*) => {
        Cons::new(Item::new($bind.into()), prefix_values!($tail ; $($binds),*))
    };
}

macro_rules! impl_build_values {
    ($(($key:ident, $value:ident, $supplied:ident, $bind:ident)),+) => {
        impl<$($key: Key, $value, $supplied: Into<$value>,)+ Rest> BuildValues<($($supplied,)+)>
            for prefix_list!($($key $value),+ => Rest)
        where
            Rest: EntryList + Default,
        {
            fn build_values(values: ($($supplied,)+)) -> Self {
                let ($($bind,)+) = values;
                prefix_values!(Rest::default() ; $($bind),+)
            }
        }
    };
}

impl_build_values!((K1, V1, W1, w1));
impl_build_values!((K1, V1, W1, w1), (K2, V2, W2, w2));
impl_build_values!((K1, V1, W1, w1), (K2, V2, W2, w2), (K3, V3, W3, w3));
impl_build_values!(
    (K1, V1, W1, w1),
    (K2, V2, W2, w2),
    (K3, V3, W3, w3),
    (K4, V4, W4, w4)
);
impl_build_values!(
    (K1, V1, W1, w1),
    (K2, V2, W2, w2),
    (K3, V3, W3, w3),
    (K4, V4, W4, w4),
    (K5, V5, W5, w5)
);
impl_build_values!(
    (K1, V1, W1, w1),
    (K2, V2, W2, w2),
    (K3, V3, W3, w3),
    (K4, V4, W4, w4),
    (K5, V5, W5, w5),
    (K6, V6, W6, w6)
);
impl_build_values!(
    (K1, V1, W1, w1),
    (K2, V2, W2, w2),
    (K3, V3, W3, w3),
    (K4, V4, W4, w4),
    (K5, V5, W5, w5),
    (K6, V6, W6, w6),
    (K7, V7, W7, w7)
);
impl_build_values!(
    (K1, V1, W1, w1),
    (K2, V2, W2, w2),
    (K3, V3, W3, w3),
    (K4, V4, W4, w4),
    (K5, V5, W5, w5),
    (K6, V6, W6, w6),
    (K7, V7, W7, w7),
    (K8, V8, W8, w8)
);
impl_build_values!(
    (K1, V1, W1, w1),
    (K2, V2, W2, w2),
    (K3, V3, W3, w3),
    (K4, V4, W4, w4),
    (K5, V5, W5, w5),
    (K6, V6, W6, w6),
    (K7, V7, W7, w7),
    (K8, V8, W8, w8),
    (K9, V9, W9, w9)
);
impl_build_values!(
    (K1, V1, W1, w1),
    (K2, V2, W2, w2),
    (K3, V3, W3, w3),
    (K4, V4, W4, w4),
    (K5, V5, W5, w5),
    (K6, V6, W6, w6),
    (K7, V7, W7, w7),
    (K8, V8, W8, w8),
    (K9, V9, W9, w9),
    (K10, V10, W10, w10)
);
impl_build_values!(
    (K1, V1, W1, w1),
    (K2, V2, W2, w2),
    (K3, V3, W3, w3),
    (K4, V4, W4, w4),
    (K5, V5, W5, w5),
    (K6, V6, W6, w6),
    (K7, V7, W7, w7),
    (K8, V8, W8, w8),
    (K9, V9, W9, w9),
    (K10, V10, W10, w10),
    (K11, V11, W11, w11)
);
impl_build_values!(
    (K1, V1, W1, w1),
    (K2, V2, W2, w2),
    (K3, V3, W3, w3),
    (K4, V4, W4, w4),
    (K5, V5, W5, w5),
    (K6, V6, W6, w6),
    (K7, V7, W7, w7),
    (K8, V8, W8, w8),
    (K9, V9, W9, w9),
    (K10, V10, W10, w10),
    (K11, V11, W11, w11),
    (K12, V12, W12, w12)
);
