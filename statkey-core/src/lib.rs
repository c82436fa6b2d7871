//! Defines the [`Key`] trait, for marker types that act as compile-time map keys.
//!
//! This contains all the same types that the [`statkey`] crate does,
//! but has no dependency on [`statkey_derive`].
//! This reduces compile times, similar to the separation between `serde_core` and `serde` introduced in [serde-rs/serde#2608].
//!
//! It may be convenient to rename the `statkey_core` dependency to `statkey` using [dependency renaming].
//! ```toml
//! statkey = { version = "0.2", package = "statkey-core" }
//! ```
//! This renaming comes at no loss of clarity,
//! since the items in `statkey_core` are simply a subset of the items in the `statkey` crate.
//! If for some reason you decide to use `statkey_derive` directly without depending on `statkey`,
//! then you will need to do this renaming since the derived code references the `statkey` crate.
//!
//! [dependency renaming]: https://doc.rust-lang.org/cargo/reference/specifying-dependencies.html#renaming-dependencies-in-cargotoml
//! [serde-rs/serde#2608]: https://github.com/serde-rs/serde/pull/2608
//! [`statkey`]: https://docs.rs/statkey/latest/statkey
//! [`statkey_derive`]: https://docs.rs/statkey-derive/latest/statkey_derive
#![no_std]

use core::fmt::Debug;

mod impls;
mod keyset;
#[macro_use]
mod macros;
mod tuple;

pub use impls::{BoolKey, CharKey, I64Key, U64Key};
pub use keyset::{KeySet, MAX_KEYS};
pub use tuple::KeyTuple;

/// A marker type acting as a compile-time map key.
///
/// A key type carries no runtime data; its entire identity is the [`Self::ID`]
/// constant, which reflects both the key's family (unsigned integer, signed
/// integer, character, boolean, or named) and the key constant within that
/// family. Two key types denote the same logical key if and only if their ids
/// are equal.
///
/// Built-in implementations cover the literal key families
/// ([`U64Key`], [`I64Key`], [`CharKey`], [`BoolKey`]).
/// Named keys are defined with the [`define_key!`] macro or with
/// `#[derive(StaticKey)]` from the `statkey_derive` crate.
/// An enum constant is used as a key by going through its discriminant,
/// e.g. `U64Key<{ Color::Red as u64 }>`, or by defining one named key per
/// variant.
///
/// ## Correctness
/// Distinct key types must have distinct ids.
/// The built-in key families guarantee this among themselves by occupying
/// disjoint id spaces; named keys hash their declaration path, so two named
/// keys collide only if they are declared with the same name in the same
/// module (which is already a name clash), or in the astronomically unlikely
/// event of an FNV-1a collision.
/// A hand-written `Key` implementation that reuses another key type's id
/// makes the key-set algebra (uniqueness checking, `contains`, merging)
/// report nonsense for maps mixing the two; it cannot cause memory unsafety.
///
/// The value of the id must be consistent.
/// It cannot change over the course of the program's lifetime,
/// which is guaranteed by it being a constant.
///
/// This type should not have interior mutability.
/// This is guaranteed by the `Copy` bound.
pub trait Key: Copy + Default + Eq + Debug + Send + Sync + 'static {
    /// The compile-time identity of this key.
    const ID: KeyId;
}

/// The compile-time identity of a [`Key`] type.
///
/// An id is a `(space, value)` pair: the *space* discriminates key families
/// so that, say, `U64Key<97>` and `CharKey<'a'>` never collide, and the
/// *value* is the key constant within the family.
///
/// Space `0` is reserved and never produced by any constructor.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct KeyId {
    space: u64,
    value: u64,
}

impl KeyId {
    const SPACE_UNSIGNED: u64 = 1;
    const SPACE_SIGNED: u64 = 2;
    const SPACE_CHAR: u64 = 3;
    const SPACE_BOOL: u64 = 4;
    const SPACE_NAMED: u64 = 5;

    /// Reserved padding id, only used for the unoccupied tail of a [`KeySet`].
    pub(crate) const PAD: KeyId = KeyId { space: 0, value: 0 };

    /// The id of an unsigned integer key.
    #[inline]
    pub const fn from_u64(value: u64) -> KeyId {
        KeyId {
            space: Self::SPACE_UNSIGNED,
            value,
        }
    }

    /// The id of a signed integer key.
    #[inline]
    #[allow(clippy::cast_sign_loss)] // bit-pattern reinterpretation is intended
    pub const fn from_i64(value: i64) -> KeyId {
        KeyId {
            space: Self::SPACE_SIGNED,
            value: value as u64,
        }
    }

    /// The id of a character key.
    #[inline]
    pub const fn from_char(value: char) -> KeyId {
        KeyId {
            space: Self::SPACE_CHAR,
            value: value as u64,
        }
    }

    /// The id of a boolean key.
    #[inline]
    pub const fn from_bool(value: bool) -> KeyId {
        KeyId {
            space: Self::SPACE_BOOL,
            value: if value { 1 } else { 0 },
        }
    }

    /// The id of a named key, hashing the given path with FNV-1a.
    ///
    /// The path should uniquely identify the key type;
    /// [`define_key!`] passes `concat!(module_path!(), "::", stringify!($name))`.
    #[inline]
    pub const fn named(path: &str) -> KeyId {
        KeyId {
            space: Self::SPACE_NAMED,
            value: fnv1a_64(path.as_bytes()),
        }
    }

    /// The family discriminant of this id.
    #[inline]
    pub const fn space(self) -> u64 {
        self.space
    }

    /// The key constant within the family.
    #[inline]
    pub const fn value(self) -> u64 {
        self.value
    }

    /// Equality usable in `const` position.
    ///
    /// Identical to `==`, which cannot be called during const evaluation.
    #[inline]
    pub const fn const_eq(self, other: KeyId) -> bool {
        self.space == other.space && self.value == other.value
    }
}

impl Debug for KeyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.space {
            Self::SPACE_UNSIGNED => write!(f, "KeyId(u64: {})", self.value),
            #[allow(clippy::cast_possible_wrap)] // inverse of the constructor
            Self::SPACE_SIGNED => write!(f, "KeyId(i64: {})", self.value as i64),
            Self::SPACE_CHAR => match char::from_u32(u32::try_from(self.value).unwrap_or(0)) {
                Some(c) => write!(f, "KeyId(char: {c:?})"),
                None => write!(f, "KeyId(char: {:#x})", self.value),
            },
            Self::SPACE_BOOL => write!(f, "KeyId(bool: {})", self.value != 0),
            Self::SPACE_NAMED => write!(f, "KeyId(named: {:#018x})", self.value),
            _ => write!(f, "KeyId({}, {:#x})", self.space, self.value),
        }
    }
}

// SAFETY: KeyId is `repr(C)` with two `u64` fields, so it has no padding
// and every bit pattern is valid.
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Zeroable for KeyId {}
// SAFETY: see above; KeyId is also `Copy + 'static`.
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Pod for KeyId {}

const fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325_u64;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        i += 1;
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_are_disjoint() {
        // 97 == 'a' as u64 == b'a' as u64, yet none of these keys coincide
        let ids = [
            KeyId::from_u64(97),
            KeyId::from_i64(97),
            KeyId::from_char('a'),
            KeyId::from_bool(true),
            KeyId::named("a"),
        ];
        for (i, a) in ids.iter().enumerate() {
            for (j, b) in ids.iter().enumerate() {
                assert_eq!(a == b, i == j, "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn signed_roundtrip() {
        assert_ne!(KeyId::from_i64(-1), KeyId::from_i64(1));
        assert_eq!(KeyId::from_i64(-42), KeyId::from_i64(-42));
    }

    #[test]
    fn named_is_stable() {
        assert_eq!(KeyId::named("foo::Bar"), KeyId::named("foo::Bar"));
        assert_ne!(KeyId::named("foo::Bar"), KeyId::named("foo::Baz"));
        assert_ne!(KeyId::named("foo::Bar"), KeyId::PAD);
    }

    #[test]
    fn const_eq_matches_eq() {
        let a = KeyId::from_u64(3);
        let b = KeyId::from_char('x');
        assert!(a.const_eq(a));
        assert!(!a.const_eq(b));
        assert_eq!(a.const_eq(b), a == b);
    }
}
