//! Binary min-heap used as the Dijkstra frontier

/// Binary min-heap over a dense array, ordered by a caller-supplied
/// less-than predicate.
///
/// There is no decrease-key: callers push a fresh entry and skip stale ones
/// when they surface.
pub struct MinHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    items: Vec<T>,
    less: F,
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(less: F) -> Self {
        Self {
            items: Vec::new(),
            less,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the minimum, or `None` when empty.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !(self.less)(&self.items[idx], &self.items[parent]) {
                break;
            }
            self.items.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < len && (self.less)(&self.items[left], &self.items[smallest]) {
                smallest = left;
            }
            if right < len && (self.less)(&self.items[right], &self.items[smallest]) {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.items.swap(idx, smallest);
            idx = smallest;
        }
    }
}
