use core::{alloc::Layout, marker::PhantomData, mem, ptr::NonNull};

use alloc::alloc::{alloc, dealloc, handle_alloc_error};

use crate::errors::{Error, Result};

/// Sole owner of a heap allocation of `capacity` slots of `T`.
///
/// The buffer never reads, writes or drops the slots; it only hands out the
/// base pointer and frees the memory once. Zero capacity and zero-sized `T`
/// use a dangling pointer and own no allocation.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// SAFETY: the buffer is uniquely owned, so it may move between threads
// whenever the elements it will hold may.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access hands out nothing but the pointer value.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics on layout overflow and aborts through [`handle_alloc_error`]
    /// if the allocator fails.
    pub(crate) fn allocate(capacity: usize) -> Self {
        match Self::try_allocate(capacity) {
            Ok(buffer) => buffer,
            Err(Error::AllocFailed { .. }) => match Layout::array::<T>(capacity) {
                Ok(layout) => handle_alloc_error(layout),
                Err(_) => panic!("capacity overflow"),
            },
            Err(_) => panic!("capacity overflow"),
        }
    }

    pub(crate) fn try_allocate(capacity: usize) -> Result<Self> {
        let layout = Layout::array::<T>(capacity).map_err(|_| Error::CapacityOverflow)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: the layout has a non-zero size.
        let raw = unsafe { alloc(layout).cast::<T>() };
        let ptr = NonNull::new(raw).ok_or(Error::AllocFailed { capacity })?;

        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) const fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if let Ok(layout) = Layout::array::<T>(self.capacity) {
            if layout.size() != 0 {
                // SAFETY: a non-empty layout means `ptr` came from `alloc`
                // with exactly this layout.
                unsafe { dealloc(self.ptr.as_ptr().cast(), layout) };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RawBuffer;
    use crate::errors::Error;

    #[test]
    fn test_empty_buffer_owns_nothing() {
        let buffer: RawBuffer<u64> = RawBuffer::new();
        assert_eq!(buffer.capacity(), 0);
        assert!(!buffer.as_ptr().is_null());
    }

    #[test]
    fn test_allocate_records_capacity() {
        let buffer: RawBuffer<u32> = RawBuffer::allocate(12);
        assert_eq!(buffer.capacity(), 12);
        assert!(buffer.as_ptr().is_aligned());
    }

    #[test]
    fn test_zero_sized_elements_never_allocate() {
        let buffer: RawBuffer<()> = RawBuffer::allocate(1_000);
        assert_eq!(buffer.capacity(), 1_000);
    }

    #[test]
    fn test_try_allocate_rejects_overflow() {
        let result = RawBuffer::<u64>::try_allocate(usize::MAX);
        assert!(matches!(result, Err(Error::CapacityOverflow)));
    }

    #[test]
    fn test_swap_exchanges_ownership() {
        let mut a: RawBuffer<u8> = RawBuffer::allocate(4);
        let mut b: RawBuffer<u8> = RawBuffer::new();
        let a_ptr = a.as_ptr();

        a.swap(&mut b);

        assert_eq!(a.capacity(), 0);
        assert_eq!(b.capacity(), 4);
        assert_eq!(b.as_ptr(), a_ptr);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_allocate_panics_on_overflow() {
        let _ = RawBuffer::<u64>::allocate(usize::MAX);
    }
}
