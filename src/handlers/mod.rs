//! HTTP handlers for the catalogue resources, health probes and the root greeting.

pub mod authors;
pub mod books;
pub mod health;

/// Path ids are 32-bit integers. Anything else cannot name a stored row.
pub(crate) fn parse_id(id_str: &str) -> Option<i32> {
    id_str.trim().parse().ok()
}
