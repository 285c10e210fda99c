//! Circular-buffer FIFO used as the BFS frontier

const INITIAL_CAPACITY: usize = 16;

/// FIFO queue over a growable circular buffer.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    buf: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn push(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.grow();
        }
        let tail = (self.head + self.len) % self.buf.len();
        self.buf[tail] = Some(value);
        self.len += 1;
    }

    /// Remove the oldest element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buf[self.head].take();
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        value
    }

    /// Double the buffer, unrolling the live window to start at slot 0.
    fn grow(&mut self) {
        let new_capacity = if self.buf.is_empty() {
            INITIAL_CAPACITY
        } else {
            self.buf.len() * 2
        };
        let mut grown: Vec<Option<T>> = Vec::with_capacity(new_capacity);
        let old_capacity = self.buf.len();
        for i in 0..self.len {
            grown.push(self.buf[(self.head + i) % old_capacity].take());
        }
        grown.resize_with(new_capacity, || None);
        self.buf = grown;
        self.head = 0;
    }
}
