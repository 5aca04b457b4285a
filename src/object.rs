use crate::buffer::ByteBuffer;
use log::debug;
use pdf_writer::Ref;

/// Writes numbered indirect objects into a [ByteBuffer], remembering the byte offset
/// at which each one begins.
///
/// Object numbers must lie in `1..=count` and each may be written once; anything else
/// is a bug in the caller and panics rather than producing a corrupt file.
#[derive(Debug)]
pub struct ObjectWriter {
    buffer: ByteBuffer,
    offsets: Vec<Option<usize>>,
}

impl ObjectWriter {
    /// Start writing `count` objects after whatever is already in `buffer`
    pub fn new(buffer: ByteBuffer, count: usize) -> ObjectWriter {
        ObjectWriter {
            buffer,
            offsets: vec![None; count],
        }
    }

    /// Writes `n 0 obj`, the body, and `endobj`. The body is followed by exactly one
    /// newline whether or not it already ends in one.
    pub fn write_object(&mut self, id: Ref, body: &[u8]) {
        let slot = self.slot(id);
        assert!(
            self.offsets[slot].is_none(),
            "object {} written twice",
            id.get()
        );

        let offset = self.buffer.len();
        self.offsets[slot] = Some(offset);
        debug!("object {} at offset {offset}", id.get());

        self.buffer.append(format!("{} 0 obj\n", id.get()));
        self.buffer.append(body);
        if !body.ends_with(b"\n") {
            self.buffer.append(b"\n");
        }
        self.buffer.append(b"endobj\n");
    }

    /// Offset of an object, if it has been written
    pub fn offset(&self, id: Ref) -> Option<usize> {
        self.offsets[self.slot(id)]
    }

    /// Hands back the buffer and the offsets of objects `1..=count`, in order.
    /// Panics if any object was never written.
    pub fn finish(self) -> (ByteBuffer, Vec<usize>) {
        let offsets = self
            .offsets
            .iter()
            .enumerate()
            .map(|(i, offset)| offset.unwrap_or_else(|| panic!("object {} was never written", i + 1)))
            .collect();
        (self.buffer, offsets)
    }

    fn slot(&self, id: Ref) -> usize {
        let number = id.get();
        assert!(
            number >= 1 && number as usize <= self.offsets.len(),
            "object number {number} outside 1..={}",
            self.offsets.len()
        );
        number as usize - 1
    }
}
