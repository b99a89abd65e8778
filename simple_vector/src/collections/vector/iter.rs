use core::{fmt, ptr, slice};

use super::raw::RawBuffer;

/// An owning iterator over the elements of a [`SimpleVector`](super::SimpleVector).
///
/// Elements in `start..end` are still initialized; whatever the iterator has
/// not yielded is dropped with it.
pub struct IntoIter<T> {
    pub(super) buf: RawBuffer<T>,
    pub(super) start: usize,
    pub(super) end: usize,
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `start..end` is initialized and inside the allocation.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.end {
            return None;
        }

        // SAFETY: `start` is below `end`, so the slot is initialized, and it
        // is moved out exactly once because `start` advances past it.
        let item = unsafe { ptr::read(self.buf.as_ptr().add(self.start)) };
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start >= self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: same as `next`, from the other end.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> core::iter::FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(
            // SAFETY: `start` never exceeds the capacity.
            unsafe { self.buf.as_ptr().add(self.start) },
            self.end - self.start,
        );
        self.start = self.end;
        // SAFETY: the unyielded elements are initialized and owned here.
        // The allocation itself is released by `buf`.
        unsafe { ptr::drop_in_place(remaining) };
    }
}
