use derive_more::{Add, AddAssign, Display, From, Into, MulAssign, Sub};

/// A length in PDF points (1/72 of an inch)
#[derive(
    Debug, Display, Default, Copy, Clone, PartialEq, PartialOrd, From, Into, Add, AddAssign, Sub, MulAssign,
)]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Debug, Display, Default, Copy, Clone, PartialEq, PartialOrd, From, Into, Add, Sub)]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl From<Pt> for In {
    fn from(value: Pt) -> Self {
        In(value.0 / 72.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inches_convert_to_points() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert_eq!(In::from(Pt(144.0)), In(2.0));
    }

    #[test]
    fn whole_points_display_without_fraction() {
        assert_eq!(Pt(612.0).to_string(), "612");
        assert_eq!(Pt(12.5).to_string(), "12.5");
    }
}
