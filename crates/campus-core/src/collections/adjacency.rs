//! Arena-backed singly-linked adjacency lists
//!
//! Every link of every list lives in one dense `Vec`; a list is just the
//! head/tail indices into that arena. Lists are append-only.

/// Index of a link inside an [`AdjacencyArena`]
pub type LinkId = usize;

#[derive(Debug, Clone)]
struct Link<T> {
    value: T,
    next: Option<LinkId>,
}

/// Handle to one append-only list stored in an [`AdjacencyArena`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    head: Option<LinkId>,
    tail: Option<LinkId>,
    len: usize,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Shared storage for the links of many adjacency lists
#[derive(Debug, Clone)]
pub struct AdjacencyArena<T> {
    links: Vec<Link<T>>,
}

impl<T> Default for AdjacencyArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AdjacencyArena<T> {
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Total links across all lists
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Append `value` to the end of `list`
    pub fn push_back(&mut self, list: &mut AdjacencyList, value: T) {
        let id = self.links.len();
        self.links.push(Link { value, next: None });
        match list.tail {
            Some(tail) => self.links[tail].next = Some(id),
            None => list.head = Some(id),
        }
        list.tail = Some(id);
        list.len += 1;
    }

    /// Iterate `list` in insertion order
    pub fn iter<'a>(&'a self, list: &AdjacencyList) -> Iter<'a, T> {
        Iter {
            arena: self,
            cursor: list.head,
            remaining: list.len,
        }
    }
}

/// Forward iterator over one list
pub struct Iter<'a, T> {
    arena: &'a AdjacencyArena<T>,
    cursor: Option<LinkId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let link = &self.arena.links[self.cursor?];
        self.cursor = link.next;
        self.remaining -= 1;
        Some(&link.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
