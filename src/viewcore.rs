//! `ggcollide::viewcore` module is a core that turns geometric algebra into view and
//! projection transforms.
//!
//! # Prelude
//! `ggcollide::viewcore` prelude can be imported with `use ggcollide::viewcore::prelude::*`.
//!
//! # Model
//! [`camera::Camera`] is described by its position, the point it looks at and approximate
//! up direction; [`camera::Frustum`] describes visible volume in view space.
//! Camera only produces `Matrix4` values; it does not render anything.
//!

// submodules and public re-exports
pub mod camera;

// prelude
pub mod prelude;
