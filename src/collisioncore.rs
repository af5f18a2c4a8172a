//! `ggcollide::collisioncore` module is a core that implements bounding volumes and
//! collision detection between them.
//!
//! # Prelude
//! `ggcollide::collisioncore` prelude can be imported with `use ggcollide::collisioncore::prelude::*`.
//!
//! # Model
//! There are three bounding volumes: axis-aligned box ([`aabbox::AABBox`]), oriented box
//! ([`obbox::OBBox`]) and bounding sphere ([`bsphere::BSphere`]).
//! Oriented box and sphere carry their world transform, axis-aligned box lives in world space.
//!
//! Every volume implements [`collisions::Collides`] trait against every other volume and against
//! points, planes and line segments, and the answer does not depend on order of operands.
//! Volumes are immutable: to move one, construct it again with new transform.
//!

// submodules and public re-exports
pub mod aabbox;
pub mod bsphere;
pub mod collisions;
pub mod obbox;

// prelude
pub mod prelude;
