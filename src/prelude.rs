//! Prelude module for the dateparts crate.
//!
//! Re-exports the derive macros in use from derive_more.

#[allow(unused_imports)]
pub use derive_more::Display;
