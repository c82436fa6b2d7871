//! Defines the [`KeyTuple`] trait, for key lists spelled as tuples.

use crate::{Key, KeySet};

/// A tuple of [`Key`] types, usable wherever an operation is parameterized
/// by a *list* of keys (`contains_all`, `contains_any`, key selection).
///
/// Implemented for tuples of up to 12 keys, including the empty tuple
/// (whose key set is empty, making `contains_all` vacuously true and
/// `contains_any` false).
pub trait KeyTuple {
    /// The number of keys in the tuple.
    const LEN: usize;
    /// The ids of the keys, in tuple order.
    const IDS: KeySet;
}

impl KeyTuple for () {
    const LEN: usize = 0;
    const IDS: KeySet = KeySet::EMPTY;
}

macro_rules! impl_key_tuple {
    ($($key:ident),+) => {
        impl<$($key: Key),+> KeyTuple for ($($key,)+) {
            const LEN: usize = Self::IDS.len();
            const IDS: KeySet = KeySet::EMPTY $(.append($key::ID))+;
        }
    };
}

impl_key_tuple!(K1);
impl_key_tuple!(K1, K2);
impl_key_tuple!(K1, K2, K3);
impl_key_tuple!(K1, K2, K3, K4);
impl_key_tuple!(K1, K2, K3, K4, K5);
impl_key_tuple!(K1, K2, K3, K4, K5, K6);
impl_key_tuple!(K1, K2, K3, K4, K5, K6, K7);
impl_key_tuple!(K1, K2, K3, K4, K5, K6, K7, K8);
impl_key_tuple!(K1, K2, K3, K4, K5, K6, K7, K8, K9);
impl_key_tuple!(K1, K2, K3, K4, K5, K6, K7, K8, K9, K10);
impl_key_tuple!(K1, K2, K3, K4, K5, K6, K7, K8, K9, K10, K11);
impl_key_tuple!(K1, K2, K3, K4, K5, K6, K7, K8, K9, K10, K11, K12);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CharKey, KeyId, U64Key};

    #[test]
    fn ids_in_tuple_order() {
        type Keys = (U64Key<1>, CharKey<'x'>, U64Key<2>);
        assert_eq!(<Keys as KeyTuple>::LEN, 3);
        assert_eq!(
            <Keys as KeyTuple>::IDS.as_slice(),
            &[KeyId::from_u64(1), KeyId::from_char('x'), KeyId::from_u64(2)],
        );
    }

    #[test]
    fn empty_tuple() {
        assert_eq!(<() as KeyTuple>::LEN, 0);
        assert!(<() as KeyTuple>::IDS.is_empty());
    }
}
