// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Recipient Input
//!
//! A tag-style email recipient input with live autocomplete suggestions
//! and per-tag validity flagging.
//!
//! The widget is a plain mutable struct owned by the host. Committed
//! recipients become [`Tag`]s, the autocomplete candidates come from an
//! [`OptionSource`] loaded once at mount, and the suggestion list is
//! derived state recomputed after every relevant mutation. Rendering is
//! expressed as a data-only [`View`] so any surface can draw it.
//!
//! # Example
//!
//! ```rust
//! use email_input::{EmailInput, FixedOptions, Key, KeyOutcome};
//!
//! let source = FixedOptions::new(["a@b.com", "ab@b.com"]);
//! let mut input = EmailInput::new();
//! tokio_test::block_on(input.load_options(&source)).unwrap();
//!
//! input.set_text("a");
//! assert_eq!(input.suggestions(), ["a@b.com", "ab@b.com"]);
//!
//! assert_eq!(input.handle_key(Key::Enter), KeyOutcome::Handled);
//! assert_eq!(input.tags()[0].value, "a");
//! assert!(!input.tags()[0].valid);
//! ```

mod error;
mod input;
mod render;
mod source;
mod types;

pub use error::{Result, SourceError};
pub use input::{EmailInput, Key, KeyOutcome};
pub use render::{Dropdown, TagView, View};
pub use source::{FixedOptions, OptionSource};
pub use types::{Tag, is_valid_email};
