use crate::units::Pt;

/// Distance kept clear between the page edges and the text. The text origin
/// sits on the top-left corner of the area inside the margins.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::In;

    #[test]
    fn all_accepts_inches() {
        let m = Margins::all(In(1.0));
        assert_eq!(m.left, Pt(72.0));
        assert_eq!(m.top, Pt(72.0));
    }
}
