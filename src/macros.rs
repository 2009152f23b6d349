//! Ergonomic construction of [`Metadata`](crate::Metadata) maps.

/// Builds a [`Metadata`](crate::Metadata) map from `key => value` pairs.
///
/// Values go through `serde_json::Value::from`, so strings, numbers, bools
/// and nested `serde_json::Value`s are accepted.
///
/// # Examples
///
/// ```
/// use error_relay::metadata;
///
/// let meta = metadata! {
///     "route" => "/dashboard",
///     "attempt" => 3,
///     "cached" => false,
/// };
/// assert_eq!(meta["attempt"], 3);
/// assert_eq!(meta.len(), 3);
/// ```
#[macro_export]
macro_rules! metadata {
    () => {
        $crate::Metadata::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Metadata::new();
        $(
            map.insert(
                ::std::string::String::from($key),
                $crate::__private::serde_json::Value::from($value),
            );
        )+
        map
    }};
}
