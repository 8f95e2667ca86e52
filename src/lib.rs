//! # schemaform - field wrappers for schema-driven forms
//!
//! A form generated from a JSON Schema wraps every field in a labelled
//! container. This crate decides how that wrapper renders:
//!
//! - the form's **root field** is handed to the root-field renderer as is;
//! - every other field gets a title, a description (with an optional help
//!   link) and its children, after applying per-title **overrides** read
//!   from the editor schema.
//!
//! ## Quick Start
//!
//! ```rust
//! use schemaform::domain::{FieldDescriptor, FormContext};
//! use schemaform::render::{render_field, FieldRendering};
//!
//! let field = FieldDescriptor::new("root_firstName").with_name("firstName");
//! let ctx = FormContext::new("root");
//!
//! match render_field(&field, &ctx) {
//!     FieldRendering::Nested(nested) => {
//!         let title = nested.header.and_then(|h| h.title);
//!         assert_eq!(title.as_deref(), Some("First Name"));
//!     }
//!     FieldRendering::Root(_) => unreachable!(),
//! }
//! ```
//!
//! ## Layout
//!
//! - **domain**: field descriptor, override records, form context
//! - **render**: the render decision, title casing, HTML previews
//! - **config** / **cli** / **preview**: loading documents from disk and the
//!   `schemaform` preview binary (`preview` feature, on by default)

pub mod domain;
pub mod render;

#[cfg(feature = "preview")]
pub mod cli;
#[cfg(feature = "preview")]
pub mod config;
#[cfg(feature = "preview")]
pub mod logging;
#[cfg(feature = "preview")]
pub mod preview;
