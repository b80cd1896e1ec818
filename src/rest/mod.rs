//! Resource-level helpers shared by generated resource methods.
//!
//! - [`Operation`]: `Resource.Method` names carried into error messages
//! - [`build_path`]: template interpolation with encoded identifiers
//! - [`require`]: fail-fast unwrapping of required call parameters

mod operation;
mod path;

pub use operation::Operation;
pub use path::{build_path, require};
