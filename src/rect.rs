use crate::pagesize::PageSize;
use crate::units::*;
use std::fmt;

/// A rectangle, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (typically, lower-left) corner.
    pub x1: Pt,
    /// The y-coordinate of the first (typically, lower-left) corner.
    pub y1: Pt,
    /// The x-coordinate of the second (typically, upper-right) corner.
    pub x2: Pt,
    /// The y-coordinate of the second (typically, upper-right) corner.
    pub y2: Pt,
}

impl Rect {
    /// The rectangle covering a whole page, anchored at the origin
    pub fn from_page_size(size: PageSize) -> Rect {
        Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: size.0,
            y2: size.1,
        }
    }
}

/// Formats as a PDF array, e.g. `[0 0 612 792]`
impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {} {}]", self.x1, self.y1, self.x2, self.y2)
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}
