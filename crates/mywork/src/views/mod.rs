//! Per-dashboard selection logic.
//!
//! Each dashboard picks a pool from the generator (or a copy of a catalog
//! table), filters it, and shows a capped slice. Dashboard-local state such as
//! recruiter approvals or attendance lives in owned structs here; none of it
//! touches the session or the shared catalog.

pub mod admin;
pub mod directory;
pub mod faculty;
pub mod recruiter;

/// Case-insensitive substring match used by every search box.
///
/// An empty search matches everything.
pub fn matches_search(name: &str, search: &str) -> bool {
    name.to_lowercase().contains(&search.to_lowercase())
}
