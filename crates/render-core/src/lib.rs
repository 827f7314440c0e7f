//! Core abstractions shared by pdfsmith backends.
//!
//! - [`DocumentBuilder`]: the incremental PDF construction contract every
//!   format converter drives
//! - [`BuildError`]: the fatal error type of that contract
//! - [`path`]: Bezier and chord approximation of curved primitives
//! - [`utils`]: text encoding and resource naming helpers

mod error;
pub mod path;
mod traits;
pub mod utils;

pub use error::BuildError;
pub use path::{PathSegment, KAPPA};
pub use traits::DocumentBuilder;
