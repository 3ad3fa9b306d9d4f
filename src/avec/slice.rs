//! Slice-based source implementation.

use super::Source;

/// Reads from the front of the slice, which is shortened past the bytes
/// returned.
impl Source for &[u8] {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(self.len());
        let (head, tail) = self.split_at(n);

        buf[..n].copy_from_slice(head);
        *self = tail;

        n
    }
}
