/// The runtime value union and its rendering rules.
pub mod core;
/// Hashable map keys.
///
/// Only numbers, strings and booleans can key a map; this module defines
/// the key type that gives them `Eq` and `Hash`.
pub mod hash;
