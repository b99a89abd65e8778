use core::{
    fmt, mem,
    ops::{Index, IndexMut},
    ptr, slice,
};

use raw::RawBuffer;

use super::{growth::next_capacity, reserve::ReserveRequest};
use crate::errors::{Error, Result};

pub use iter::IntoIter;

mod cmp;
mod iter;
mod raw;

/// A contiguous, growable array of `T` with an explicit capacity.
///
/// Slots `[0, len)` hold live elements; `[len, capacity)` is allocated but
/// uninitialized. Positions are plain indices: [`begin`](Self::begin) is `0`
/// and [`end`](Self::end) is `len`. Anything that reallocates or shifts
/// elements invalidates positions computed before it.
pub struct SimpleVector<T> {
    buf: RawBuffer<T>,
    len: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Creates an empty vector with room for exactly `request.capacity()`
    /// elements.
    #[must_use]
    pub fn with_reserve(request: ReserveRequest) -> Self {
        Self {
            buf: RawBuffer::allocate(request.capacity()),
            len: 0,
        }
    }

    /// Creates a vector of `len` default values. Capacity equals `len`.
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut vector = Self::with_reserve(ReserveRequest::new(len));
        vector.fill_to(len, T::default);
        vector
    }

    /// Creates a vector of `len` clones of `value`. Capacity equals `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::SimpleVector;
    ///
    /// let v = SimpleVector::from_elem(3, 7);
    /// assert_eq!(v, [7, 7, 7]);
    /// assert_eq!(v.capacity(), 3);
    /// ```
    #[must_use]
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut vector = Self::with_reserve(ReserveRequest::new(len));
        if len > 0 {
            vector.fill_to(len - 1, || value.clone());
            // SAFETY: one slot is left for the original.
            unsafe { vector.push_unchecked(value) };
        }
        vector
    }

    /// The number of elements in the vector.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// The number of elements the vector can hold without reallocating.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of the first element. Always `0`.
    #[must_use]
    pub const fn begin(&self) -> usize {
        0
    }

    /// Position one past the last element. Equal to [`begin`](Self::begin)
    /// for an empty vector.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized; the pointer is non-null and
        // aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, with unique access through `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Returns a reference to the first element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a reference to the last element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Bounds-checked access.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::{simple_vector, Error};
    ///
    /// let v = simple_vector![1, 2, 3];
    /// assert_eq!(v.at(1), Ok(&2));
    /// assert_eq!(v.at(10), Err(Error::OutOfRange { index: 10, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }

        // SAFETY: checked above.
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Bounds-checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }

        // SAFETY: checked above.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len). Debug builds assert it.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index out of bounds");
        &*self.buf.as_ptr().add(index)
    }

    /// Mutable counterpart of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len). Debug builds assert it.
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index out of bounds");
        &mut *self.buf.as_ptr().add(index)
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements past `new_len`. Does nothing if `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        // SAFETY: `[new_len, len)` is initialized. `len` shrinks first so a
        // panicking destructor cannot cause a double drop.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(
                self.buf.as_ptr().add(new_len),
                self.len - new_len,
            );
            self.len = new_len;
            ptr::drop_in_place(tail);
        }
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    ///
    /// Shrinking never reallocates. Growing past the capacity reallocates to
    /// [`next_capacity`]`(capacity, new_len)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::SimpleVector;
    ///
    /// let mut v = SimpleVector::from_elem(3, 7);
    /// v.resize(5);
    /// assert_eq!(v, [7, 7, 7, 0, 0]);
    /// assert_eq!(v.capacity(), 6);
    /// ```
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Like [`resize`](Self::resize), filling new slots with clones of `value`.
    pub fn resize_with_value(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone());
    }

    /// Like [`resize`](Self::resize), filling new slots with values from `f`.
    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        self.grow_for(new_len);
        self.fill_to(new_len, f);
    }

    /// Appends `item`, doubling the capacity when the vector is full.
    pub fn push_back(&mut self, item: T) {
        self.grow_for(self.len + 1);
        // SAFETY: `grow_for` left at least one free slot.
        unsafe { self.push_unchecked(item) };
    }

    /// Inserts `item` at `index`, shifting `[index, len)` one slot right, and
    /// returns the position of the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::simple_vector;
    ///
    /// let mut v = simple_vector![1, 2, 3];
    /// let at = v.insert(1, 9);
    /// assert_eq!(at, 1);
    /// assert_eq!(v, [1, 9, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, item: T) -> usize {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );

        if len < self.capacity() {
            // SAFETY: there is a free slot at `len`, so shifting `[index, len)`
            // right by one stays inside the allocation.
            unsafe {
                let at = self.buf.as_ptr().add(index);
                ptr::copy(at, at.add(1), len - index);
                ptr::write(at, item);
            }
        } else {
            let mut fresh = RawBuffer::allocate(next_capacity(self.capacity(), len + 1));
            // SAFETY: `fresh` holds more than `len` slots and does not overlap
            // the current buffer. Elements are moved, never duplicated: the
            // old buffer is only freed afterwards, not dropped element-wise.
            unsafe {
                let src = self.buf.as_ptr();
                let dst = fresh.as_ptr();
                ptr::copy_nonoverlapping(src, dst, index);
                ptr::write(dst.add(index), item);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), len - index);
            }
            self.buf.swap(&mut fresh);
        }

        self.len = len + 1;
        index
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) -> T {
        assert!(!self.is_empty(), "pop_back on an empty vector");

        self.len -= 1;
        // SAFETY: the slot at the old last index is initialized and now
        // outside `[0, len)`, so it is read out exactly once.
        unsafe { ptr::read(self.buf.as_ptr().add(self.len)) }
    }

    /// Removes and returns the last element, or `None` if the vector is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.pop_back())
        }
    }

    /// Drops the element at `index`, shifting the rest left, and returns the
    /// position of its successor (`len` if it was the last one).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Removes and returns the element at `index`, shifting the rest left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );

        // SAFETY: `index < len`, so the read is of a live element and the
        // shifted range `[index + 1, len)` is initialized.
        unsafe {
            let at = self.buf.as_ptr().add(index);
            let item = ptr::read(at);
            ptr::copy(at.add(1), at, len - index - 1);
            self.len = len - 1;
            item
        }
    }

    /// Reallocates to exactly `new_capacity` if it exceeds the current one.
    /// The length never changes.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.relocate(RawBuffer::allocate(new_capacity));
        }
    }

    /// Fallible [`reserve`](Self::reserve). On error the vector is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::{Error, SimpleVector};
    ///
    /// let mut v: SimpleVector<u64> = SimpleVector::new();
    /// assert_eq!(v.try_reserve(usize::MAX), Err(Error::CapacityOverflow));
    /// assert_eq!(v.try_reserve(10), Ok(()));
    /// assert_eq!(v.capacity(), 10);
    /// ```
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity > self.capacity() {
            self.relocate(RawBuffer::try_allocate(new_capacity)?);
        }
        Ok(())
    }

    /// Reallocates so that the capacity equals the length.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            self.relocate(RawBuffer::allocate(self.len));
        }
    }

    /// Exchanges contents with `other` without moving any element.
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving `self` empty with no allocation.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    fn grow_for(&mut self, required: usize) {
        if required > self.capacity() {
            self.relocate(RawBuffer::allocate(next_capacity(self.capacity(), required)));
        }
    }

    /// Moves `[0, len)` into `fresh` and adopts it. The old allocation is
    /// freed only after the move.
    fn relocate(&mut self, mut fresh: RawBuffer<T>) {
        debug_assert!(fresh.capacity() >= self.len);
        // SAFETY: `fresh` is a distinct allocation with room for `len`
        // elements; the old slots are released without being dropped.
        unsafe { ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_ptr(), self.len) };
        self.buf.swap(&mut fresh);
    }

    /// Appends values from `f` until `len == new_len`.
    ///
    /// The capacity must already cover `new_len`. `len` is bumped after each
    /// write, so a panic in `f` leaves a consistent vector.
    fn fill_to<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        debug_assert!(new_len <= self.capacity());
        while self.len < new_len {
            // SAFETY: `len < new_len <= capacity`.
            unsafe { self.push_unchecked(f()) };
        }
    }

    /// # Safety
    ///
    /// `len` must be less than the capacity.
    unsafe fn push_unchecked(&mut self, item: T) {
        ptr::write(self.buf.as_ptr().add(self.len), item);
        self.len += 1;
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SimpleVector<T> {
    fn drop(&mut self) {
        // SAFETY: drops `[0, len)` exactly once; `buf` frees the memory next.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    /// Deep copy with capacity equal to the source length.
    fn clone(&self) -> Self {
        Self::from(self.as_slice())
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> From<ReserveRequest> for SimpleVector<T> {
    fn from(request: ReserveRequest) -> Self {
        Self::with_reserve(request)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(values: [T; N]) -> Self {
        let mut vector = Self::with_reserve(ReserveRequest::new(N));
        for value in values {
            // SAFETY: capacity is `N` and at most `N` values are written.
            unsafe { vector.push_unchecked(value) };
        }
        vector
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(values: &[T]) -> Self {
        let mut vector = Self::with_reserve(ReserveRequest::new(values.len()));
        for value in values {
            // SAFETY: capacity is `values.len()`.
            unsafe { vector.push_unchecked(value.clone()) };
        }
        vector
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Self::new();
        vector.extend(iter);
        vector
    }
}

impl<T> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.grow_for(self.len.saturating_add(lower));
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(
            index < self.len,
            "index out of bounds: the len is {} but the index is {index}",
            self.len
        );
        // SAFETY: checked above.
        unsafe { self.get_unchecked(index) }
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(
            index < self.len,
            "index out of bounds: the len is {} but the index is {index}",
            self.len
        );
        // SAFETY: checked above.
        unsafe { self.get_unchecked_mut(index) }
    }
}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let end = mem::replace(&mut self.len, 0);
        let buf = mem::take(&mut self.buf);

        IntoIter { buf, start: 0, end }
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Creates a [`SimpleVector`] from a list of elements, or from
/// `value; count` like `vec!`.
///
/// # Examples
///
/// ```
/// use simple_vector::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
///
/// let w = simple_vector!["x"; 2];
/// assert_eq!(w, ["x", "x"]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $count:expr) => {
        $crate::SimpleVector::from_elem($count, $elem)
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($elem),+])
    };
}
