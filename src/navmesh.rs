//! Converters for navigation subrecords whose layout depends on counts and flags
//! stored inside the payload.
//!
//! All three walk the buffer with a [`WordCursor`] that reverses words in place.
//! Counts are read big-endian before they are swapped. A walk that runs off the
//! end of the buffer stops there; everything already visited stays converted.

use byteorder::{BigEndian, ByteOrder};
use tracing::trace;

/// `NVMI` flag: the entry carries an island with its own triangles and vertices.
pub const NVMI_ISLAND: u32 = 0x20;

/// In-place word reverser over a console buffer.
struct WordCursor<'a> {
    data: &'a mut [u8],
    pos: usize,
}

impl<'a> WordCursor<'a> {
    fn new(data: &'a mut [u8]) -> Self {
        WordCursor { data, pos: 0 }
    }

    fn take(&mut self, width: usize) -> Option<&mut [u8]> {
        let end = self.pos.checked_add(width)?;
        let word = self.data.get_mut(self.pos..end)?;
        self.pos = end;
        Some(word)
    }

    fn swap(&mut self, width: usize) -> Option<()> {
        self.take(width)?.reverse();
        Some(())
    }

    fn swap_n(&mut self, width: usize, count: usize) -> Option<()> {
        for _ in 0..count {
            self.swap(width)?;
        }
        Some(())
    }

    fn count_u16(&mut self) -> Option<usize> {
        let word = self.take(2)?;
        let n = BigEndian::read_u16(word);
        word.reverse();
        Some(n as usize)
    }

    fn count_u32(&mut self) -> Option<u32> {
        let word = self.take(4)?;
        let n = BigEndian::read_u32(word);
        word.reverse();
        Some(n)
    }

    fn finished(&self) -> bool {
        self.pos == self.data.len()
    }
}

fn report(signature: &str, walked: Option<()>, cursor: &WordCursor<'_>) -> bool {
    if walked.is_none() {
        trace!(
            signature,
            offset = cursor.pos,
            length = cursor.data.len(),
            "navmesh payload truncated"
        );
        return false;
    }
    cursor.finished()
}

/// Navmesh info entry. Returns `true` when the whole buffer was consumed.
pub fn convert_nvmi(data: &mut [u8]) -> bool {
    let mut cursor = WordCursor::new(data);
    let walked = walk_nvmi(&mut cursor);
    report("NVMI", walked, &cursor)
}

fn walk_nvmi(c: &mut WordCursor<'_>) -> Option<()> {
    let flags = c.count_u32()?;
    c.swap_n(4, 2)?; // navmesh, location
    c.swap_n(2, 2)?; // grid x, y
    c.swap_n(4, 3)?; // approximate location
    if flags & NVMI_ISLAND != 0 {
        c.swap_n(4, 6)?; // island bounds
        let triangles = c.count_u16()?;
        let vertices = c.count_u16()?;
        c.swap_n(2, triangles.saturating_mul(6))?;
        c.swap_n(4, vertices.saturating_mul(3))?;
    }
    Some(())
}

/// Navmesh connection info: a FormID followed by three counted FormID lists.
pub fn convert_nvci(data: &mut [u8]) -> bool {
    let mut cursor = WordCursor::new(data);
    let walked = walk_nvci(&mut cursor);
    report("NVCI", walked, &cursor)
}

fn walk_nvci(c: &mut WordCursor<'_>) -> Option<()> {
    c.swap(4)?;
    for _ in 0..3 {
        let n = c.count_u32()?;
        c.swap_n(4, n as usize)?;
    }
    Some(())
}

/// Navmesh cell grid: header, bounds, then `divisor²` cells of counted u16 triangle indices.
pub fn convert_nvgd(data: &mut [u8]) -> bool {
    let mut cursor = WordCursor::new(data);
    let walked = walk_nvgd(&mut cursor);
    report("NVGD", walked, &cursor)
}

fn walk_nvgd(c: &mut WordCursor<'_>) -> Option<()> {
    let divisor = c.count_u32()? as usize;
    c.swap_n(4, 2)?; // max x/y distance
    c.swap_n(4, 6)?; // min, max
    for _ in 0..divisor.saturating_mul(divisor) {
        let n = c.count_u16()?;
        c.swap_n(2, n)?;
    }
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stops_at_end() {
        let mut buf = [1u8, 2, 3];
        let mut c = WordCursor::new(&mut buf);
        assert!(c.swap(2).is_some());
        assert!(c.swap(2).is_none());
        assert_eq!(buf, [2, 1, 3]);
    }
}
