//! Page sizes for the paper formats an export is likely to target.
//!
//! Sizes are (width, height) in points, portrait. Use [`PageOrientation`] to flip them.
//!
//! ```
//! use plainpdf::pagesize::{PageOrientation, A4, LETTER};
//!
//! assert_eq!(LETTER.0.to_string(), "612");
//! let landscape = A4.landscape();
//! assert!(landscape.0 > landscape.1);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));

// iso a-series, rounded to whole points
pub const A4: PageSize = (Pt(595.0), Pt(842.0));

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}
