//! Field wrapper rendering
//!
//! - `plan`: root-or-nested decision and nested layout
//! - `resolver`: title, description and key resolution
//! - `start_case`: readable titles from property names
//! - `html`: static HTML output for previews

#[cfg(feature = "preview")]
pub mod html;
pub mod plan;
pub mod resolver;
pub mod start_case;

pub use plan::*;
pub use resolver::{Description, FieldKey};
pub use start_case::start_case;
