/// Defines one or more named key types.
///
/// Each declaration expands to a unit struct deriving
/// [`Copy`], [`Clone`], [`PartialEq`], [`Eq`], [`Hash`], [`Debug`], and [`Default`]
/// (the traits required by the [`Key`] bound), plus a [`Key`] implementation
/// whose id hashes the declaring module path together with the type name.
///
/// This is more convenient than `#[derive(StaticKey)]` from `statkey_derive`,
/// because it also derives the secondary traits.
/// In addition, it reduces build time dependencies by avoiding procedural macros.
///
/// ```
/// statkey_core::define_key! {
///     /// How long to wait before giving up.
///     pub struct Timeout;
///     pub struct Retries;
/// }
///
/// use statkey_core::Key;
/// assert_ne!(Timeout::ID, Retries::ID);
/// ```
///
/// [`Key`]: crate::Key
/// [`Hash`]: core::hash::Hash
/// [`Debug`]: core::fmt::Debug
#[macro_export]
macro_rules! define_key {
    ($(
        $(#[$ty_attr:meta])*
        $vis:vis struct $name:ident;
    )*) => {$(
        $(#[$ty_attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
        $vis struct $name;

        impl $crate::Key for $name {
            const ID: $crate::KeyId = $crate::KeyId::named(
                ::core::concat!(::core::module_path!(), "::", ::core::stringify!($name)),
            );
        }
    )*};
}
