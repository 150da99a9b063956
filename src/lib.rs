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
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Headless state engine for a single-page link-in-bio site.
//!
//! The page is a blocking overlay in front of a profile card. Dismissing
//! the overlay enters the page once and for all: the view counter counts
//! up along a quartic ease-out, the bio types itself out, and a looping
//! background video starts with sound. A viewport classifier picks the
//! mobile or desktop video, which is preloaded off-screen before the
//! player is shown.
//!
//! # Key entry points
//!
//! - [`engine::PageEngine`] - the page session; consumes
//!   [`engine::command::PageCommand`]s and emits
//!   [`engine::effect::HostEffect`]s
//! - [`engine::snapshot::PageSnapshot`] - read-only render state
//! - [`input::InputProcessor`] - raw host events to commands
//! - [`options::Options`] - tunables and page content, TOML presets
//!
//! # Architecture
//!
//! The engine never touches a clock, a DOM or a timer. Time arrives as an
//! argument to every command, and every registration the engine needs
//! (resize listener, readiness listeners, typewriter timer, off-screen
//! preload) is requested through a [`subscription::Subscriptions`]
//! registry that pairs each acquire with exactly one release. The web
//! front end in `crates/linkbio-web` executes those effects against the
//! browser; tests execute them against a virtual clock.

pub mod animation;
pub mod content;
pub mod engine;
pub mod error;
pub mod input;
pub mod media;
pub mod options;
pub mod subscription;
pub mod util;
pub mod viewport;
