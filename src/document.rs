use crate::{
    buffer::ByteBuffer,
    content::{render_text_line, stream_body},
    object::ObjectWriter,
    options::RenderOptions,
    rect::Rect,
    refs::RefType,
    text,
    xref::{write_trailer, write_xref},
    PDFError, ValidationError,
};
use log::debug;
use std::io::Write;

/// Second header line. Four bytes above 0x7F tell tools sniffing the start of the
/// file that it holds binary data.
const BINARY_MARKER: &[u8] = b"%\xE2\xE3\xCF\xD3\n";

/// A single page showing one line of text in a standard font, rendered byte by byte
/// with [TextDocument::to_bytes].
///
/// The object graph is fixed: a catalog, a page tree holding one page, the page, a
/// Type1 font, and the page's content stream, numbered as [RefType] assigns them.
/// Rendering the same text with the same options always produces identical bytes.
#[derive(Debug, Clone)]
pub struct TextDocument {
    /// Escaped, single-byte encoded text of the line to show
    line: Vec<u8>,
    options: RenderOptions,
}

impl TextDocument {
    /// Validate `text` and prepare it for rendering with the default options.
    /// Only the first line of the trimmed text is shown.
    pub fn new(text: &str) -> Result<TextDocument, ValidationError> {
        let line = text::prepare(text)?;
        Ok(TextDocument {
            line,
            options: RenderOptions::default(),
        })
    }

    /// Validate `text` and the options, and prepare the text for rendering with them
    pub fn with_options(text: &str, options: RenderOptions) -> Result<TextDocument, PDFError> {
        options.validate()?;
        let line = text::prepare(text)?;
        Ok(TextDocument { line, options })
    }

    /// Render the whole file: header, the five objects, the cross-reference table,
    /// and the trailer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PDFError> {
        let mut buffer = ByteBuffer::new();
        buffer.append(format!("%PDF-{}\n", self.options.version));
        buffer.append(BINARY_MARKER);

        let mut objects = ObjectWriter::new(buffer, RefType::COUNT);

        // content and resources go first, the structure that refers to them after
        let operators = render_text_line(&self.line, &self.options)?;
        objects.write_object(RefType::Content.id(), &stream_body(&operators)?);
        objects.write_object(RefType::Font.id(), self.font_dict().as_bytes());
        objects.write_object(RefType::Page.id(), self.page_dict().as_bytes());
        objects.write_object(
            RefType::PageTree.id(),
            format!(
                "<< /Type /Pages /Kids [{}] /Count 1 >>",
                RefType::Page.reference()
            )
            .as_bytes(),
        );
        objects.write_object(
            RefType::Catalog.id(),
            format!("<< /Type /Catalog /Pages {} >>", RefType::PageTree.reference()).as_bytes(),
        );

        let (mut buffer, offsets) = objects.finish();
        let xref_start = write_xref(&mut buffer, &offsets);
        write_trailer(&mut buffer, offsets.len() + 1, RefType::Catalog.id(), xref_start);

        debug!("rendered {} bytes, xref at {xref_start}", buffer.len());
        Ok(buffer.into_bytes())
    }

    /// Render the document and write it to `w`. The document is rendered in memory first.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), PDFError> {
        w.write_all(self.to_bytes()?.as_slice()).map_err(Into::into)
    }

    fn font_dict(&self) -> String {
        format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
            self.options.base_font
        )
    }

    fn page_dict(&self) -> String {
        format!(
            "<< /Type /Page /Parent {} /MediaBox {} /Resources << /Font << /{} {} >> >> /Contents {} >>",
            RefType::PageTree.reference(),
            Rect::from_page_size(self.options.page_size),
            self.options.font_name,
            RefType::Font.reference(),
            RefType::Content.reference(),
        )
    }
}
