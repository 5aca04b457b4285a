//! Configuration for rendering a text export.

use crate::error::OptionsError;
use crate::margins::Margins;
use crate::pagesize::{self, PageSize};
use crate::units::{In, Pt};

/// Options shared by every [`Renderer`](crate::Renderer).
///
/// The defaults describe a US Letter page with 1 inch margins and 12pt Helvetica,
/// which places the text origin at (72, 720).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Size of the single page
    pub page_size: PageSize,
    /// Margins around the text; the text starts at the top-left corner inside them
    pub margins: Margins,
    /// Size of the text
    pub font_size: Pt,
    /// Resource name the content stream uses to select the font
    pub font_name: String,
    /// One of the standard 14 fonts, referenced without embedding
    pub base_font: String,
    /// Version written into the `%PDF-x.y` header
    pub version: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            page_size: pagesize::LETTER,
            margins: Margins::all(In(1.0)),
            font_size: Pt(12.0),
            font_name: "F1".to_string(),
            base_font: "Helvetica".to_string(),
            version: "1.4".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the font size.
    pub fn with_font_size<D: Into<Pt>>(mut self, size: D) -> Self {
        self.font_size = size.into();
        self
    }

    /// Set the standard font used for the text, e.g. `Courier`.
    pub fn with_base_font(mut self, base_font: impl Into<String>) -> Self {
        self.base_font = base_font.into();
        self
    }

    /// Check that every option can be written into the file as-is. Renderers call this
    /// before producing any output.
    pub fn validate(&self) -> Result<(), OptionsError> {
        check_name("font_name", &self.font_name)?;
        check_name("base_font", &self.base_font)?;

        let well_formed = matches!(
            self.version.as_bytes(),
            [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit()
        );
        if !well_formed {
            return Err(OptionsError::InvalidVersion(self.version.clone()));
        }

        check_positive("font_size", self.font_size)?;
        check_positive("page width", self.page_size.0)?;
        check_positive("page height", self.page_size.1)?;
        for (field, margin) in [
            ("top margin", self.margins.top),
            ("right margin", self.margins.right),
            ("bottom margin", self.margins.bottom),
            ("left margin", self.margins.left),
        ] {
            if !margin.0.is_finite() || margin.0 < 0.0 {
                return Err(OptionsError::InvalidLength {
                    field,
                    value: margin.0,
                });
            }
        }
        Ok(())
    }

    /// Where the first glyph's baseline starts, in page coordinates
    pub fn text_origin(&self) -> (Pt, Pt) {
        (self.margins.left, self.page_size.1 - self.margins.top)
    }
}

/// Regular name characters: visible ASCII other than delimiters and `#`
fn is_name_char(byte: u8) -> bool {
    matches!(byte, b'!'..=b'~')
        && !matches!(
            byte,
            b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' | b'#'
        )
}

fn check_name(field: &'static str, value: &str) -> Result<(), OptionsError> {
    if value.is_empty() || !value.bytes().all(is_name_char) {
        return Err(OptionsError::InvalidName {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: Pt) -> Result<(), OptionsError> {
    if !value.0.is_finite() || value.0 <= 0.0 {
        return Err(OptionsError::InvalidLength {
            field,
            value: value.0,
        });
    }
    Ok(())
}
