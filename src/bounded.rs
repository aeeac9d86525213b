//! Fixed-capacity growable sequence container.
//!
//! Provides [`BoundedVec`], which replicates the growable-array contract of a
//! `Vec` on top of a fixed backing array, so lines, names and argument lists
//! can grow and shrink without ever touching a heap. Capacity-exceeding
//! mutations return [`CapacityError`] and leave the container unchanged;
//! call sites that prefer clamp-and-drop (the line accumulator does) make
//! that an explicit decision by ignoring the error.

use core::cmp::Ordering;
use core::ops::{Deref, DerefMut, Range};

/// An operation would have grown a container past its fixed capacity.
///
/// The container is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapacityError;

impl core::fmt::Display for CapacityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "fixed capacity exceeded")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CapacityError {}

/// A growable sequence with a fixed maximum capacity and no heap.
///
/// Live elements always occupy the contiguous prefix `[0, len)` of the backing
/// array, and every mutating operation preserves the relative order of the
/// surviving elements. `insert` and `remove` shift exactly the minimal
/// contiguous run of elements needed to open or close the gap.
///
/// Dereferences to `[T]`, so indexing, `first`/`last`, iteration and the
/// whole slice API come for free. Equality and ordering compare the valid
/// range only (elementwise, lexicographic), including across different
/// capacities.
///
/// # Type Parameters
/// * `T` - Element type; `Copy + Default` so the backing array is fully
///   initialized without `unsafe`
/// * `CAP` - Fixed maximum capacity
#[derive(Clone, Copy)]
pub struct BoundedVec<T, const CAP: usize> {
    buf: [T; CAP],
    len: usize,
}

impl<T, const CAP: usize> BoundedVec<T, CAP> {
    /// Returns the fixed maximum capacity.
    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Returns the logical length.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no elements are stored.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if one more `push` would be rejected.
    pub const fn is_full(&self) -> bool {
        self.len == CAP
    }

    /// Returns the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// Returns the live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf[..self.len]
    }

    /// Shortens the vector to `len` elements; a no-op if already shorter.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchanges the contents of two vectors of the same capacity.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

impl<T: Copy + Default, const CAP: usize> BoundedVec<T, CAP> {
    /// Creates an empty vector.
    pub fn new() -> Self {
        Self {
            buf: [T::default(); CAP],
            len: 0,
        }
    }

    /// Creates a vector holding a copy of `values`.
    ///
    /// # Errors
    /// Returns [`CapacityError`] if `values` is longer than `CAP`.
    pub fn from_slice(values: &[T]) -> Result<Self, CapacityError> {
        let mut vec = Self::new();
        vec.assign_from_slice(values)?;
        Ok(vec)
    }

    /// Appends an element at the back.
    ///
    /// # Errors
    /// Returns `Err(value)` if the vector is full; nothing changes.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.len == CAP {
            return Err(value);
        }
        self.buf[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.buf[self.len])
    }

    /// Inserts `value` at `index`, shifting everything after it one slot back.
    ///
    /// # Errors
    /// Returns `Err(value)` if the vector is full; nothing changes.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), T> {
        assert!(index <= self.len, "insert index out of bounds");
        if self.len == CAP {
            return Err(value);
        }
        self.buf.copy_within(index..self.len, index + 1);
        self.buf[index] = value;
        self.len += 1;
        Ok(())
    }

    /// Inserts `count` copies of `value` at `index` in one block move.
    ///
    /// # Errors
    /// Returns [`CapacityError`] if the result would exceed `CAP`; nothing changes.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert_fill(&mut self, index: usize, count: usize, value: T) -> Result<(), CapacityError> {
        assert!(index <= self.len, "insert index out of bounds");
        if self.len + count > CAP {
            return Err(CapacityError);
        }
        self.buf.copy_within(index..self.len, index + count);
        for slot in &mut self.buf[index..index + count] {
            *slot = value;
        }
        self.len += count;
        Ok(())
    }

    /// Inserts a copy of `values` at `index` in one block move.
    ///
    /// # Errors
    /// Returns [`CapacityError`] if the result would exceed `CAP`; nothing changes.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert_slice(&mut self, index: usize, values: &[T]) -> Result<(), CapacityError> {
        assert!(index <= self.len, "insert index out of bounds");
        if self.len + values.len() > CAP {
            return Err(CapacityError);
        }
        self.buf.copy_within(index..self.len, index + values.len());
        self.buf[index..index + values.len()].copy_from_slice(values);
        self.len += values.len();
        Ok(())
    }

    /// Removes and returns the element at `index`, closing the gap.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "remove index out of bounds");
        let value = self.buf[index];
        self.buf.copy_within(index + 1..self.len, index);
        self.len -= 1;
        value
    }

    /// Removes the elements in `range`, closing the gap in one block move.
    ///
    /// # Panics
    /// Panics if the range is decreasing or ends past `len`.
    pub fn remove_range(&mut self, range: Range<usize>) {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "remove range out of bounds"
        );
        self.buf.copy_within(range.end..self.len, range.start);
        self.len -= range.end - range.start;
    }

    /// Replaces the contents with a copy of `values`.
    ///
    /// # Errors
    /// Returns [`CapacityError`] if `values` is longer than `CAP`; nothing changes.
    pub fn assign_from_slice(&mut self, values: &[T]) -> Result<(), CapacityError> {
        if values.len() > CAP {
            return Err(CapacityError);
        }
        self.buf[..values.len()].copy_from_slice(values);
        self.len = values.len();
        Ok(())
    }

    /// Resizes to `new_len`, filling any new slots with `value`.
    ///
    /// # Errors
    /// Returns [`CapacityError`] if `new_len` exceeds `CAP`; nothing changes.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), CapacityError> {
        if new_len > CAP {
            return Err(CapacityError);
        }
        if new_len > self.len {
            for slot in &mut self.buf[self.len..new_len] {
                *slot = value;
            }
        }
        self.len = new_len;
        Ok(())
    }
}

impl<T: Copy + Default, const CAP: usize> Default for BoundedVec<T, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const CAP: usize> Deref for BoundedVec<T, CAP> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const CAP: usize> DerefMut for BoundedVec<T, CAP> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, const CAP: usize> IntoIterator for &'a BoundedVec<T, CAP> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<T: core::fmt::Debug, const CAP: usize> core::fmt::Debug for BoundedVec<T, CAP> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.as_slice().fmt(f)
    }
}

// Comparisons look only at the valid range, so vectors of different
// capacities can be compared.

impl<T: PartialEq, const CAP: usize, const OTHER_CAP: usize> PartialEq<BoundedVec<T, OTHER_CAP>>
    for BoundedVec<T, CAP>
{
    fn eq(&self, other: &BoundedVec<T, OTHER_CAP>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const CAP: usize> Eq for BoundedVec<T, CAP> {}

impl<T: PartialOrd, const CAP: usize, const OTHER_CAP: usize> PartialOrd<BoundedVec<T, OTHER_CAP>>
    for BoundedVec<T, CAP>
{
    fn partial_cmp(&self, other: &BoundedVec<T, OTHER_CAP>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, const CAP: usize> Ord for BoundedVec<T, CAP> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
