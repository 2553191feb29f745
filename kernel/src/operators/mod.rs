//! Operators module: per-kind value-vector semantics, in both directions.
//!
//! `reverse` is what the search engine runs; `forward` is what a solved
//! path means when executed, and is used by proof replay. Depends on
//! `graph`. Does not import from `proof`.

pub mod forward;
pub mod reverse;
