//! Defines the [`Key`] trait, for marker types that act as compile-time map keys.
//!
//! This is a facade over [`statkey_core`] that can additionally re-export the
//! [`StaticKey`] derive macro (behind the `derive` feature). Everything here
//! is a re-export; depending on `statkey_core` directly (optionally renamed
//! to `statkey`) trades the derive macro for a lighter build.
//!
//! A key type carries no runtime data; its identity is the [`KeyId`]
//! constant reflected by the [`Key`] trait. The built-in key families cover
//! integer, character, and boolean constants:
//!
//! ```
//! use statkey::{Key, CharKey, U64Key};
//!
//! assert_ne!(U64Key::<97>::ID, CharKey::<'a'>::ID);
//! ```
//!
//! Named keys are declared with [`define_key!`]
//! (or `#[derive(StaticKey)]` when the `derive` feature is enabled):
//!
//! ```
//! statkey::define_key! {
//!     /// How long to wait before giving up.
//!     pub struct Timeout;
//! }
//!
//! use statkey::Key;
//! assert_eq!(Timeout::ID, Timeout::ID);
//! ```
#![no_std]

pub use statkey_core::{
    define_key, BoolKey, CharKey, I64Key, Key, KeyId, KeySet, KeyTuple, U64Key, MAX_KEYS,
};

#[cfg(feature = "derive")]
pub use statkey_derive::StaticKey;
