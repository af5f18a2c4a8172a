//! Prelude module: `collisioncore::prelude` re-exports all `ggcollide::collisioncore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggcollide::collisioncore::prelude::*;
//! ```
//!

// re-exports
pub use crate::collisioncore::aabbox::*;
pub use crate::collisioncore::bsphere::*;
pub use crate::collisioncore::collisions::*;
pub use crate::collisioncore::obbox::*;
