/// Spells an entry-list *type* from `Key => ValueType` pairs.
///
/// This is the list inside a [`StaticMap`](crate::StaticMap); most code
/// wants the [`StaticMap!`](crate::StaticMap!) macro instead, which wraps
/// the list in the map type.
#[macro_export]
macro_rules! Entries {
    () => { $crate::Nil };
    ($key:ty => $value:ty $(, $keys:ty => $values:ty)* $(,)?) => {
        $crate::Cons<$crate::Item<$key, $value>, $crate::Entries![$($keys => $values),*]>
    };
}

/// Spells a [`StaticMap`](crate::StaticMap) *type* from `Key => ValueType`
/// pairs.
///
/// ```
/// use statmap::StaticMap;
/// use statmap::statkey::{CharKey, U64Key};
///
/// type Settings = StaticMap![U64Key<1> => u32, CharKey<'v'> => bool];
///
/// let settings = Settings::from_values((500_u32, true));
/// assert!(*settings.at::<CharKey<'v'>, _>());
/// assert_eq!(*settings.at::<U64Key<1>, _>(), 500);
/// ```
#[macro_export]
macro_rules! StaticMap {
    ($($tokens:tt)*) => {
        $crate::StaticMap<$crate::Entries![$($tokens)*]>
    };
}

/// Builds a [`StaticMap`](crate::StaticMap) value from `Key => value`
/// pairs.
///
/// The map's composition is inferred from the pairs; each value expression
/// fixes its slot's value type. Expands to
/// [`StaticMap::from_entries`](crate::StaticMap::from_entries), so a
/// duplicate key fails to compile.
///
/// ```
/// use statmap::static_map;
/// use statmap::statkey::{CharKey, U64Key};
///
/// let map = static_map! {
///     U64Key<7> => "seven",
///     CharKey<'x'> => 1.5_f32,
/// };
/// assert_eq!(*map.at::<U64Key<7>, _>(), "seven");
/// ```
#[macro_export]
macro_rules! static_map {
    () => { $crate::StaticMap::empty() };
    ($($key:ty => $value:expr),+ $(,)?) => {
        $crate::StaticMap::from_entries($crate::static_map!(@list $($key => $value),+))
    };
    (@list) => { $crate::Nil };
    (@list $key:ty => $value:expr $(, $keys:ty => $values:expr)*) => {
        $crate::Cons::new(
            $crate::Item::<$key, _>::new($value),
            $crate::static_map!(@list $($keys => $values),*),
        )
    };
}
