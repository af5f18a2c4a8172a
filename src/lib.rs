//! # GGCollide
//!
//! **GGCollide** - 3d geometric algebra and collision detection library written in pure Rust.
//!
//! Crate is split into cores:
//! * `mathcore` - vectors, points, matrices, quaternions, planes and lines;
//! * `collisioncore` - bounding volumes and collision queries between them;
//! * `viewcore` - camera that produces view and projection matrices.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate approx;

extern crate log;
extern crate thiserror;

extern crate seq_macro;

extern crate serde;
extern crate serde_big_array;

// cores
pub mod collisioncore;
pub mod mathcore;
pub mod viewcore;
