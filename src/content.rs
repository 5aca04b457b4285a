//! Content stream rendering for the single text line.

use crate::options::RenderOptions;
use std::io::Write;

/// Renders the text-drawing operators for one line of already escaped, encoded text.
///
/// The output does not end in a newline, so its length is exactly what goes
/// between `stream` and `endstream`.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_text_line(
    escaped: &[u8],
    options: &RenderOptions,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();
    let (x, y) = options.text_origin();

    write!(&mut content, "BT\n")?;
    write!(&mut content, "/{} {} Tf\n", options.font_name, options.font_size)?;
    write!(&mut content, "{x} {y} Td\n")?;
    write!(&mut content, "(")?;
    content.write_all(escaped)?;
    write!(&mut content, ") Tj\n")?;
    write!(&mut content, "ET")?;

    Ok(content)
}

/// Frames operator bytes as the body of a stream object. `/Length` counts only the
/// operator bytes, not the keywords or the line breaks around them.
#[allow(clippy::write_with_newline)]
pub(crate) fn stream_body(data: &[u8]) -> Result<Vec<u8>, std::io::Error> {
    let mut body: Vec<u8> = Vec::with_capacity(data.len() + 48);
    write!(&mut body, "<< /Length {} >>\n", data.len())?;
    write!(&mut body, "stream\n")?;
    body.write_all(data)?;
    write!(&mut body, "\nendstream")?;
    Ok(body)
}
