//! Prelude module: `mathcore::prelude` re-exports all `ggcollide::mathcore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggcollide::mathcore::prelude::*;
//! ```
//!

// re-exports
pub use crate::mathcore::floats::*;
pub use crate::mathcore::lines::*;
pub use crate::mathcore::matrices::*;
pub use crate::mathcore::planes::*;
pub use crate::mathcore::points::*;
pub use crate::mathcore::quaternions::*;
pub use crate::mathcore::transforms::*;
pub use crate::mathcore::vectors::*;
pub use crate::mathcore::*;
