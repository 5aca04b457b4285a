//! Interchangeable ways of turning text into a PDF file.

use crate::{document::TextDocument, options::RenderOptions, rect::Rect, refs::RefType, text, PDFError};
use log::debug;
use pdf_writer::{Content, Finish, Name, Pdf, Str};

/// Something that can turn text into the bytes of a PDF file.
///
/// Renderers are stateless and may be shared between threads. Each call either
/// returns a complete file or an error; nothing is written on failure.
pub trait Renderer: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Render `text` onto a single page
    fn render(&self, text: &str, options: &RenderOptions) -> Result<Vec<u8>, PDFError>;
}

/// Writes every byte of the file itself. See [TextDocument].
#[derive(Debug, Default, Copy, Clone)]
pub struct MinimalRenderer;

impl Renderer for MinimalRenderer {
    fn name(&self) -> &'static str {
        "minimal"
    }

    fn render(&self, input: &str, options: &RenderOptions) -> Result<Vec<u8>, PDFError> {
        TextDocument::with_options(input, options.clone())?.to_bytes()
    }
}

/// Builds the same one-page document with [pdf_writer]. Text is validated exactly as
/// [MinimalRenderer] does it; pdf-writer does its own string escaping.
#[derive(Debug, Default, Copy, Clone)]
pub struct PdfWriterRenderer;

impl Renderer for PdfWriterRenderer {
    fn name(&self) -> &'static str {
        "pdf-writer"
    }

    fn render(&self, input: &str, options: &RenderOptions) -> Result<Vec<u8>, PDFError> {
        options.validate()?;
        let line = text::encode_latin1(text::first_line(input)?)?;
        let font_name = Name(options.font_name.as_bytes());

        let mut writer = Pdf::new();
        writer
            .catalog(RefType::Catalog.id())
            .pages(RefType::PageTree.id());
        writer
            .pages(RefType::PageTree.id())
            .kids([RefType::Page.id()])
            .count(1);

        let mut page = writer.page(RefType::Page.id());
        page.parent(RefType::PageTree.id());
        page.media_box(Rect::from_page_size(options.page_size).into());
        page.contents(RefType::Content.id());
        page.resources().fonts().pair(font_name, RefType::Font.id());
        page.finish();

        writer
            .type1_font(RefType::Font.id())
            .base_font(Name(options.base_font.as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        let (x, y) = options.text_origin();
        let mut content = Content::new();
        content.begin_text();
        content.set_font(font_name, options.font_size.into());
        content.next_line(x.into(), y.into());
        content.show(Str(line.as_slice()));
        content.end_text();
        writer.stream(RefType::Content.id(), &content.finish());

        let bytes = writer.finish();
        debug!("pdf-writer rendered {} bytes", bytes.len());
        Ok(bytes)
    }
}
