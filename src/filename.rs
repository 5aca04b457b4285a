/// Longest base name kept, in characters, before the extension is added
pub const MAX_BASE_LEN: usize = 80;

/// Base name used when the title is missing or has nothing usable in it
pub const DEFAULT_BASE: &str = "export";

/// Characters that break file systems or a quoted `Content-Disposition` filename
const ILLEGAL: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Turn a document title into a download filename ending in `.pdf`.
///
/// ```
/// assert_eq!(plainpdf::sanitize_filename("report/2024?final"), "report-2024-final.pdf");
/// assert_eq!(plainpdf::sanitize_filename(""), "export.pdf");
/// ```
pub fn sanitize_filename(title: &str) -> String {
    let replaced: String = title
        .trim()
        .chars()
        .map(|c| if ILLEGAL.contains(&c) { '-' } else { c })
        .collect();
    let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");
    let base: String = collapsed.chars().take(MAX_BASE_LEN).collect();

    if base.is_empty() {
        format!("{DEFAULT_BASE}.pdf")
    } else {
        format!("{base}.pdf")
    }
}
