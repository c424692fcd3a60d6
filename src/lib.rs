//! Core library for the wordlist-clean command line application.
//!
//! Word lists are loaded into a [`model::WordTable`] by [`io::csv_read`],
//! normalised by [`clean`] according to a [`variant::Variant`], and written
//! back by [`io::csv_write`]. Missing tones are restored by [`tone`], and
//! [`runner`] drives both datasets of a project.

pub mod clean;
pub mod error;
pub mod io;
pub mod model;
pub mod runner;
pub mod tone;
pub mod variant;

pub use error::{Result, ToolError};
