// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera and camera-controller toolkit for GPU sample renderers.
//!
//! A renderer owns one [`camera::Camera`], mutates it through the
//! single-purpose controllers in [`controller`], and reads the view matrix,
//! eye position and front direction every frame (or fills a
//! [`camera::CameraUniform`] directly).
//!
//! # Key entry points
//!
//! - [`camera::CameraFactory`] - pre-configured orbit, simple and look-at
//!   cameras
//! - [`controller`] - linear, forward and satellite controllers
//! - [`input::InputProcessor`] / [`input::CameraRig`] - turn raw mouse
//!   events into camera gestures and route them to one controller each
//! - [`options::Options`] - TOML presets for projection, limits, controls
//!   and initial placement
//!
//! # Conventions
//!
//! View matrices are right-handed (`look_at_rh`): the camera looks down its
//! local `-Z` axis. `move_along_direction` takes a signed change of the
//! eye-target distance, so positive values move away from the target.

pub mod camera;
pub mod controller;
pub mod error;
pub mod input;
pub mod options;

pub use camera::{Camera, CameraFactory, CameraKind, CameraLimits};
pub use error::{CameraError, GeometryFault};
