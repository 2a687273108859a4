//! # Campaign Hub Stories
//!
//! Story fixtures for the campaign-management components, plus the
//! structural check that keeps them honest.
//!
//! Each [`StoryFile`] binds a component ([`ComponentSpec`]) to named example
//! prop bags. [`validate`] checks every bag against the component's declared
//! props, and [`manifest`] renders the whole [`catalog`] as JSON for the
//! visual-testing tool.
//!
//! ## Example
//!
//! ```rust
//! use campaign_hub_stories::{catalog, manifest, validate};
//!
//! let files = catalog();
//! for file in &files {
//!     validate(file).unwrap();
//! }
//! let json = manifest(&files).unwrap();
//! assert_eq!(json["stories"].as_array().map(Vec::len), Some(3));
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

pub mod component;
pub mod error;
pub mod fixtures;
pub mod story;

pub use component::{ComponentSpec, PropKind, PropSpec, validate_args};
pub use error::{Result, StoryError};
pub use fixtures::catalog;
pub use story::{Story, StoryFile, StoryMeta, manifest, validate};
