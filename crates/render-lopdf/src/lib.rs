//! Document builder backend using the `lopdf` library.
//!
//! Pages are assembled as `lopdf` operator lists, images become `/Image`
//! XObjects, and the final file is written by a small streaming serializer
//! that lays objects out in id order followed by a classic xref table.

mod builder;
mod page;
mod state;
mod writer;
mod xobject;

pub use builder::{LopdfBuilder, BACKEND_NAME};
pub use writer::StreamingPdfWriter;
