mod buffer;
pub use buffer::*;

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod export;
pub use export::*;

mod filename;
pub use filename::*;

mod margins;
pub use margins::*;

mod object;
pub use object::*;

mod options;
pub use options::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod renderer;
pub use renderer::*;

pub mod text;

mod units;
pub use units::*;

pub mod xref;

/// Re-export PDF-writer, whose [pdf_writer::Ref] names objects throughout the crate
pub use pdf_writer;
