//! `ggcollide::mathcore` module is a core that implements geometric algebra of the crate.
//!
//! # Prelude
//! `ggcollide::mathcore` prelude can be imported with `use ggcollide::mathcore::prelude::*`.
//!
//! # Model
//! Vectors represent directions and points represent positions; the type system keeps them apart,
//! so `Point - Point` is a vector and translating a point requires a vector.
//! Transformations are matrices (or quaternions for rotations), which are composed by multiplication.
//! Planes and lines are built from points and vectors and are used by `collisioncore` volumes.
//!
//! Every float-backed type implements sign-insensitive `PartialEq` (see [`floats::equal`])
//! and strict `approx` comparisons.
//!

// submodules and public re-exports
mod ext;
pub use ext::*;

pub mod floats;
pub mod lines;
pub mod matrices;
pub mod planes;
pub mod points;
pub mod quaternions;
pub mod transforms;
pub mod vectors;

// prelude
pub mod prelude;
