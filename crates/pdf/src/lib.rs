//! Hand-built minimal PDF codec for single-page record reports.
//!
//! There is no layout engine here: a record flattens to a fixed column of
//! text lines, and the writer serializes the five-object document (catalog,
//! pages, page, contents, font) in a single pass, recording byte-exact
//! offsets for the cross-reference table as it goes.

mod content;
mod error;
mod writer;

pub use content::format_date;
pub use error::RenderError;
pub use writer::render;
