//! Fixed-capacity circular FIFO queue.

/// A fixed-capacity ring buffer with power-of-two storage.
///
/// The queue is the transport between pipeline stages: exactly one stage
/// enqueues and exactly one stage dequeues, in the fixed order of the polling
/// loop, so no synchronization is involved. One slot is sacrificed to tell a
/// full queue from an empty one using only the two indices, so a buffer of
/// size `N` holds at most `N - 1` elements.
///
/// `N` must be a power of two; wraparound is then a single AND with `N - 1`.
/// This is checked at compile time when the buffer is constructed.
///
/// # Type Parameters
/// * `T` - Element type; elements cross the queue by value
/// * `N` - Storage size (power of two); capacity is `N - 1`
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    buf: [T; N],
    put: usize,
    get: usize,
}

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    const INDEX_MASK: usize = N - 1;

    /// Creates an empty ring buffer.
    pub fn new() -> Self {
        const {
            assert!(N.is_power_of_two(), "ring buffer size must be a power of two");
        }

        Self {
            buf: [T::default(); N],
            put: 0,
            get: 0,
        }
    }

    /// Returns the number of elements the buffer can hold at once.
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Returns the number of elements currently queued.
    pub fn len(&self) -> usize {
        if self.put >= self.get {
            self.put - self.get
        } else {
            (N - self.get) + self.put
        }
    }

    /// Returns true if no elements are queued.
    pub fn is_empty(&self) -> bool {
        self.put == self.get
    }

    /// Returns true if one more `enqueue` would be rejected.
    pub fn is_full(&self) -> bool {
        Self::next(self.put) == self.get
    }

    /// Appends an element at the back of the queue.
    ///
    /// A full queue is left unchanged; the rejected value is handed back to
    /// the caller. Queued elements are never overwritten.
    ///
    /// # Errors
    /// Returns `Err(value)` if the queue is full.
    pub fn enqueue(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.buf[self.put] = value;
        self.put = Self::next(self.put);
        Ok(())
    }

    /// Removes and returns the oldest queued element.
    ///
    /// Returns `None` when the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.buf[self.get];
        self.get = Self::next(self.get);
        Some(value)
    }

    const fn next(index: usize) -> usize {
        (index + 1) & Self::INDEX_MASK
    }
}

impl<T: Copy + Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
