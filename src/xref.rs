//! The cross-reference table and the trailer that closes the file.
//!
//! Readers seek straight to `startxref`, read the table, and use it to jump to any
//! object, so every table entry must be exactly [`XREF_ENTRY_LEN`] bytes wide.

use crate::buffer::ByteBuffer;
use log::debug;
use pdf_writer::Ref;

/// Width of one cross-reference entry, including its two-byte line ending
pub const XREF_ENTRY_LEN: usize = 20;

/// Generation number of the free-list head, object 0
const FREE_HEAD_GENERATION: u16 = 65535;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// `f`: the object number is unused
    Free,
    /// `n`: the object lives at the given offset
    InUse,
}

/// One 20-byte entry: `oooooooooo ggggg k \n`
pub fn xref_entry(offset: usize, generation: u16, kind: EntryKind) -> String {
    let flag = match kind {
        EntryKind::Free => 'f',
        EntryKind::InUse => 'n',
    };
    let entry = format!("{offset:010} {generation:05} {flag} \n");
    assert_eq!(
        entry.len(),
        XREF_ENTRY_LEN,
        "offset {offset} does not fit a cross-reference entry"
    );
    entry
}

/// Appends the table for objects `1..=offsets.len()` and returns the byte offset at
/// which the table starts.
pub fn write_xref(buffer: &mut ByteBuffer, offsets: &[usize]) -> usize {
    let start = buffer.len();
    debug!("xref for {} objects at offset {start}", offsets.len());

    buffer.append(b"xref\n");
    buffer.append(format!("0 {}\n", offsets.len() + 1));
    buffer.append(xref_entry(0, FREE_HEAD_GENERATION, EntryKind::Free));
    for &offset in offsets {
        buffer.append(xref_entry(offset, 0, EntryKind::InUse));
    }

    start
}

/// Appends the trailer, `startxref`, and the end-of-file marker. Nothing may be
/// written after this.
pub fn write_trailer(buffer: &mut ByteBuffer, size: usize, root: Ref, xref_start: usize) {
    buffer.append(b"trailer\n");
    buffer.append(format!("<< /Size {size} /Root {} 0 R >>\n", root.get()));
    buffer.append(b"startxref\n");
    buffer.append(format!("{xref_start}\n"));
    buffer.append(b"%%EOF\n");
}
