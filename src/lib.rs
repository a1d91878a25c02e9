// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
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
// Graphics math: intentional truncating/precision-losing casts are pervasive
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
// Float comparisons against exact constants are fine in transform code
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]

//! Isometric tile-grid editor built on wgpu.
//!
//! Isogrid opens a window, draws a reference tile grid under a fixed
//! isometric projection, and maps raw pointer input back into grid
//! coordinates so panning and zooming stay pixel-accurate.
//!
//! # Key entry points
//!
//! - [`editor::EditorApp`] - the winit application shell and event loop
//! - [`camera::ViewportState`] - zoom, pan offset, and the isometric
//!   basis with its precomputed inverse
//! - [`input::InputTranslator`] - the drag/zoom state machine between raw
//!   pointer events and viewport mutations
//! - [`options::Options`] - runtime configuration (window, grid, controls,
//!   display)
//!
//! # Architecture
//!
//! Everything runs on one thread in strict sequence: poll window events,
//! apply input to the focused window's viewport, compute the frame's
//! projection/view/model matrices, record the draw, present. Grid
//! geometry is generated once at startup and uploaded to the GPU once;
//! only the per-frame uniforms change after that.

pub mod camera;
pub mod editor;
pub mod error;
pub mod grid;
pub mod input;
pub mod options;
pub mod render;
pub mod util;
