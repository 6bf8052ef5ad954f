//! A mutable three-component vector primitive for real-time 3D pipelines,
//! built for allocation-free hot paths: render loops, skinning, and physics
//! integration chain in-place operations on one [`Vector3`] value.
//!
//! The surrounding matrix, quaternion, camera, and vertex-buffer types of a
//! rendering stack stay external; [`traits`] pins down the narrow numeric
//! contract each one must expose (column-major elements, Hamilton
//! quaternions, indexed attribute channels).
//!
//! # Features
//! #### Default
//! - **f32**: use f32 as Real
//!
//! #### Optional
//! - **f64**: use f64 as Real, this conflicts with f32
//! - **nalgebra-interop**: `From` conversions to and from
//!   [nalgebra](https://crates.io/crates/nalgebra) vectors and points
//!
//! # Numeric contract
//! Exactly one failure is checked: component access with an index outside
//! 0..3 ([`errors::VectorError::IndexOutOfRange`]). Every other edge case is
//! a silent IEEE-754 degenerate behavior: `divide_scalar(0.0)` propagates
//! infinities, `apply_matrix4` does not guard a zero homogeneous w, while
//! `normalize`, `project_on_vector`, and `angle_to` substitute documented
//! fallback values for zero-length inputs. Callers rely on which cases are
//! guarded, so that split is part of the API.

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod coords;
pub mod errors;
pub mod float_types;
pub mod quat;
pub mod traits;
pub mod vector3;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use coords::{Cylindrical, Spherical};
pub use errors::VectorError;
pub use quat::{Euler, Quat};
pub use vector3::Vector3;

#[cfg(feature = "nalgebra-interop")]
pub mod interop;
