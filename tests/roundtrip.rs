use lopdf::content::Operation;
use lopdf::Object;
use plainpdf::xref::XREF_ENTRY_LEN;
use plainpdf::{
    MinimalRenderer, OptionsError, PDFError, PdfWriterRenderer, RenderOptions, Renderer,
    TextDocument, ValidationError,
};

fn render(text: &str) -> Vec<u8> {
    TextDocument::new(text).unwrap().to_bytes().unwrap()
}

fn find_last(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

fn parse_number(bytes: &[u8]) -> usize {
    let digits: Vec<u8> = bytes.iter().copied().take_while(u8::is_ascii_digit).collect();
    std::str::from_utf8(&digits).unwrap().parse().unwrap()
}

/// Reads the xref table the way a reader would: via `startxref`
fn xref_offsets(bytes: &[u8]) -> Vec<usize> {
    let marker = find_last(bytes, b"startxref\n").expect("startxref present");
    let start = parse_number(&bytes[marker + b"startxref\n".len()..]);

    let table = &bytes[start..];
    assert!(table.starts_with(b"xref\n0 "), "startxref points at the table");
    let count_start = b"xref\n0 ".len();
    let count = parse_number(&table[count_start..]);
    let entries_start = table[count_start..].iter().position(|&b| b == b'\n').unwrap() + count_start + 1;

    let entries = &table[entries_start..entries_start + count * XREF_ENTRY_LEN];
    assert_eq!(&entries[..XREF_ENTRY_LEN], b"0000000000 65535 f \n");
    entries
        .chunks(XREF_ENTRY_LEN)
        .skip(1)
        .map(|entry| {
            assert!(entry.ends_with(b" 00000 n \n"), "in-use entry {entry:?}");
            parse_number(&entry[..10])
        })
        .collect()
}

fn shown_strings(bytes: &[u8]) -> Vec<Vec<u8>> {
    let doc = lopdf::Document::load_mem(bytes).expect("reader accepts the file");
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);
    let page_id = *pages.values().next().unwrap();
    let content = doc.get_and_decode_page_content(page_id).unwrap();
    content
        .operations
        .iter()
        .filter(|op: &&Operation| op.operator == "Tj")
        .map(|op| match &op.operands[0] {
            Object::String(s, _) => s.clone(),
            other => panic!("Tj operand {other:?}"),
        })
        .collect()
}

#[test]
fn output_starts_with_version_header() {
    for text in ["a", "Hello world", "  spaced  ", "(x)"] {
        assert!(render(text).starts_with(b"%PDF-1.4\n"));
    }
}

#[test]
fn xref_has_entry_per_object_plus_one() {
    let bytes = render("Hello");
    assert_eq!(xref_offsets(&bytes).len(), 5);
    assert!(find_last(&bytes, b"xref\n0 6\n").is_some());
}

#[test]
fn xref_offsets_point_at_object_definitions() {
    let text = lipsum::lipsum(120);
    for bytes in [render("Hello"), render(&text), render("café (déjà) \\ vu")] {
        for (i, offset) in xref_offsets(&bytes).into_iter().enumerate() {
            let expected = format!("{} 0 obj\n", i + 1);
            assert!(
                bytes[offset..].starts_with(expected.as_bytes()),
                "object {} not at {offset}",
                i + 1
            );
        }
    }
}

#[test]
fn reader_sees_one_page_with_the_text() {
    assert_eq!(shown_strings(&render("Hello, world")), vec![b"Hello, world".to_vec()]);
}

#[test]
fn parens_and_backslashes_survive() {
    assert_eq!(
        shown_strings(&render("Answer: (3/4)\nCheck")),
        vec![b"Answer: (3/4)".to_vec()]
    );
    assert_eq!(
        shown_strings(&render(r"C:\temp\(x)")),
        vec![br"C:\temp\(x)".to_vec()]
    );
}

#[test]
fn lone_carriage_return_ends_the_line() {
    assert_eq!(shown_strings(&render("line one\rline two")), vec![b"line one".to_vec()]);
}

#[test]
fn latin1_text_is_one_byte_per_character() {
    assert_eq!(shown_strings(&render("naïve café")), vec![b"na\xEFve caf\xE9".to_vec()]);
}

#[test]
fn catalog_is_the_root() {
    let doc = lopdf::Document::load_mem(&render("root")).unwrap();
    let root = doc.trailer.get(b"Root").unwrap().as_reference().unwrap();
    assert_eq!(root, (1, 0));
    let catalog = doc.get_dictionary(root).unwrap();
    assert_eq!(catalog.get(b"Type").unwrap().as_name().unwrap(), b"Catalog");
}

#[test]
fn identical_input_is_byte_identical() {
    let text = lipsum::lipsum(40);
    assert_eq!(render(&text), render(&text));
}

#[test]
fn blank_text_produces_no_bytes() {
    for text in ["", "   ", "\n\t\r\n"] {
        let err = MinimalRenderer.render(text, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, PDFError::Validation(ValidationError::EmptyText)));
    }
}

#[test]
fn unsupported_characters_are_rejected() {
    let err = TextDocument::new("x = √2").unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnsupportedCharacter {
            character: '√',
            index: 4
        }
    );
}

#[test]
fn options_that_would_break_the_page_are_rejected() {
    let spaced = RenderOptions {
        font_name: "F 1".to_string(),
        ..RenderOptions::default()
    };
    let nan = RenderOptions::new().with_font_size(f32::NAN);
    for options in [spaced, nan] {
        for renderer in [&MinimalRenderer as &dyn Renderer, &PdfWriterRenderer] {
            let err = renderer.render("Hello", &options).unwrap_err();
            assert!(matches!(err, PDFError::Options(_)), "{}: {err}", renderer.name());
        }
    }
    let err = MinimalRenderer
        .render("Hello", &RenderOptions { version: "1.4\n".to_string(), ..RenderOptions::default() })
        .unwrap_err();
    assert!(matches!(err, PDFError::Options(OptionsError::InvalidVersion(_))));
}

#[test]
fn renderers_agree_on_shown_text() {
    let text = r"Total (net): 5\6";
    let minimal = MinimalRenderer.render(text, &RenderOptions::default()).unwrap();
    let writer = PdfWriterRenderer.render(text, &RenderOptions::default()).unwrap();
    assert_eq!(shown_strings(&minimal), shown_strings(&writer));
}

#[test]
fn concurrent_renders_are_independent() {
    let expected = render("shared");
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| MinimalRenderer.render("shared", &RenderOptions::default())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}
