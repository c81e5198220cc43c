//! Column codec for the hobbies list.
//!
//! The list lives in one TEXT column joined with [`HOBBY_SEPARATOR`]. A hobby
//! that itself contains the separator comes back split in two; that gap is
//! accepted and not escaped.

pub const HOBBY_SEPARATOR: &str = ", ";

pub fn join_hobbies(hobbies: &[String]) -> String {
    hobbies.join(HOBBY_SEPARATOR)
}

/// Inverse of [`join_hobbies`]. An empty column is one empty hobby, so a
/// stored `[""]` reads back unchanged.
pub fn split_hobbies(column: &str) -> Vec<String> {
    column.split(HOBBY_SEPARATOR).map(String::from).collect()
}
