//! Proof module: content digests and forward replay of solved paths.
//!
//! Depends on `graph`, `operators`, and `values`.

pub mod canon;
pub mod hash;
pub mod replay;
