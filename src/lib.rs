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
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

//! Pick-to-focus interaction engine for interactive 3D scene viewers.
//!
//! Vantage takes one loaded model, resolves pointer picks to named
//! sub-parts, flies the camera in to frame the picked part while an info
//! panel shows its registry entry, and flies back to the default overview
//! on a background click or explicit reset. Rendering, asset parsing and
//! panel styling stay with the host; the engine only produces camera
//! poses and panel show/hide calls.
//!
//! # Key entry points
//!
//! - [`ViewerEngine`] - the interaction engine
//! - [`scene::SceneGraph`] - node arena with meshes, bounds and ray casts
//! - [`registry::FocusRegistry`] - target id → panel payload
//! - [`options::Options`] - camera, focus and keybinding configuration
//! - [`panel::PanelSurface`] - host hook for showing the info panel
//!
//! # Frame loop
//!
//! ```ignore
//! let mut engine = ViewerEngine::new(options, registry, LogPanel);
//! engine.on_model_loaded(scene, root);
//! loop {
//!     for event in poll_events() {
//!         engine.handle_input(event);
//!     }
//!     engine.tick(clock.tick());
//!     render(engine.camera());
//! }
//! ```

pub mod camera;
pub mod engine;
pub mod error;
pub mod focus;
pub mod input;
pub mod options;
pub mod panel;
pub mod picking;
pub mod registry;
pub mod scene;
pub mod util;

pub use engine::{HoverTarget, ViewerCommand, ViewerEngine, ViewportContext};
pub use error::VantageError;
