//! A FIFO queue implemented as a growable ring buffer.
//!
//! Elements live in a circular buffer indexed modulo its capacity; when
//! the buffer fills up it doubles, copying the live elements back into
//! FIFO order. Enqueue and dequeue are amortized `O(1)`.
//!
//! # Examples
//!
//! ```
//! use dsa::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//!
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.dequeue(), Some(2));
//! assert_eq!(queue.dequeue(), None);
//! ```

/// A first-in, first-out ring-buffer queue.
#[derive(Clone, Debug)]
pub struct Queue<T> {
    buf: Vec<Option<T>>,
    head: usize,
    size: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            head: 0,
            size: 0,
        }
    }

    /// Adds an element to the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.grow_if_needed();
        let tail = (self.head + self.size) % self.buf.len();
        self.buf[tail] = Some(value);
        self.size += 1;
    }

    /// Removes and returns the element at the front of the queue, or
    /// `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        let value = self.buf[self.head].take();
        self.head = (self.head + 1) % self.buf.len();
        self.size -= 1;
        value
    }

    /// Returns the front element without removing it, or `None` if the
    /// queue is empty.
    pub fn peek(&self) -> Option<&T> {
        if self.size == 0 {
            return None;
        }
        self.buf[self.head].as_ref()
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Reports whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes all elements and releases the backing storage.
    pub fn clear(&mut self) {
        self.buf = Vec::new();
        self.head = 0;
        self.size = 0;
    }

    /// The elements in FIFO order, front first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.size);
        for i in 0..self.size {
            if let Some(v) = &self.buf[(self.head + i) % self.buf.len()] {
                out.push(v.clone());
            }
        }
        out
    }

    fn grow_if_needed(&mut self) {
        if self.buf.is_empty() {
            self.buf.resize_with(1, || None);
            return;
        }
        if self.size < self.buf.len() {
            return;
        }
        let old_len = self.buf.len();
        let mut buf = Vec::new();
        buf.resize_with(self.size * 2, || None);
        // Unwrap the ring back into index order from the head.
        for (i, slot) in buf.iter_mut().enumerate().take(self.size) {
            *slot = self.buf[(self.head + i) % old_len].take();
        }
        self.buf = buf;
        self.head = 0;
    }
}
