//! The built-in key families, one marker type per literal kind.

use crate::{Key, KeyId};

macro_rules! impl_const_key {
    ($($(#[$attr:meta])* $name:ident($int:ty) => $ctor:ident;)*) => {$(
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name<const VALUE: $int>;

        impl<const VALUE: $int> Key for $name<VALUE> {
            const ID: KeyId = KeyId::$ctor(VALUE);
        }

        impl<const VALUE: $int> $name<VALUE> {
            /// The key constant carried by this type.
            pub const VALUE: $int = VALUE;
        }
    )*};
}

impl_const_key! {
    /// A key identified by an unsigned integer constant.
    ///
    /// `U64Key<10>` and `U64Key<10>` written in different crates are the
    /// same type and therefore the same key; `U64Key<10>` and `I64Key<10>`
    /// are different keys (their ids live in different spaces).
    U64Key(u64) => from_u64;
    /// A key identified by a signed integer constant.
    I64Key(i64) => from_i64;
    /// A key identified by a character constant.
    CharKey(char) => from_char;
    /// A key identified by a boolean constant.
    BoolKey(bool) => from_bool;
}
