//! Prelude module: `viewcore::prelude` re-exports all `ggcollide::viewcore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggcollide::viewcore::prelude::*;
//! ```
//!

// re-exports
pub use crate::viewcore::camera::*;
