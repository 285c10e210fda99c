//! Open-addressing hash map keyed by strings
//!
//! Linear probing over a flat slot table. Erased entries become tombstones so
//! probe chains stay intact; tombstones are dropped on the next full rehash.

const INITIAL_CAPACITY: usize = 16;
const MIN_SHRINK_CAPACITY: usize = 32;
const GROW_LOAD_PERCENT: usize = 65;
const SHRINK_LOAD_PERCENT: usize = 20;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over the key's bytes
pub fn fnv1a64(key: &str) -> u64 {
    key.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

#[derive(Debug, Clone)]
enum Slot<V> {
    Empty,
    Filled { key: String, value: V },
    Tombstone,
}

/// Result of probing for a key
enum Probe {
    Found(usize),
    /// Key absent; insert at this slot
    Vacant(usize),
    /// Key absent and the table has no reusable slot
    Full,
}

/// Hash map from names to values (dense location indices in the graph).
#[derive(Debug, Clone)]
pub struct StringIndexMap<V = usize> {
    slots: Vec<Slot<V>>,
    filled: usize,
    tombstones: usize,
}

impl<V> Default for StringIndexMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> StringIndexMap<V> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || Slot::Empty);
        Self {
            slots,
            filled: 0,
            tombstones: 0,
        }
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Current slot table size
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of erased slots still occupying the table
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    fn home_slot(&self, key: &str) -> usize {
        (fnv1a64(key) % self.slots.len() as u64) as usize
    }

    fn find(&self, key: &str) -> Option<usize> {
        let capacity = self.slots.len();
        let mut idx = self.home_slot(key);
        for _ in 0..capacity {
            match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Filled { key: k, .. } if k == key => return Some(idx),
                _ => {}
            }
            idx = (idx + 1) % capacity;
        }
        None
    }

    /// Probe for `key`, remembering the first tombstone as the insertion
    /// candidate while continuing to look for an existing entry.
    fn probe(&self, key: &str) -> Probe {
        let capacity = self.slots.len();
        let mut idx = self.home_slot(key);
        let mut first_tombstone = None;
        for _ in 0..capacity {
            match &self.slots[idx] {
                Slot::Filled { key: k, .. } if k == key => return Probe::Found(idx),
                Slot::Filled { .. } => {}
                Slot::Tombstone => {
                    first_tombstone.get_or_insert(idx);
                }
                Slot::Empty => return Probe::Vacant(first_tombstone.unwrap_or(idx)),
            }
            idx = (idx + 1) % capacity;
        }
        first_tombstone.map_or(Probe::Full, Probe::Vacant)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.find(key).and_then(|idx| match &self.slots[idx] {
            Slot::Filled { value, .. } => Some(value),
            _ => None,
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Insert or overwrite. Overwriting leaves occupancy counts unchanged.
    pub fn put(&mut self, key: &str, value: V) {
        self.ensure_capacity();
        loop {
            match self.probe(key) {
                Probe::Found(idx) => {
                    if let Slot::Filled { value: v, .. } = &mut self.slots[idx] {
                        *v = value;
                    }
                    return;
                }
                Probe::Vacant(idx) => {
                    if matches!(self.slots[idx], Slot::Tombstone) {
                        self.tombstones -= 1;
                    }
                    self.slots[idx] = Slot::Filled {
                        key: key.to_string(),
                        value,
                    };
                    self.filled += 1;
                    return;
                }
                Probe::Full => {
                    let grown = self.slots.len() * 2;
                    self.rehash(grown);
                }
            }
        }
    }

    /// Mark the entry as a tombstone. Shrinking is deferred to the next `put`.
    pub fn erase(&mut self, key: &str) -> bool {
        match self.find(key) {
            Some(idx) => {
                self.slots[idx] = Slot::Tombstone;
                self.filled -= 1;
                self.tombstones += 1;
                true
            }
            None => false,
        }
    }

    /// Live keys in slot order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Filled { key, .. } => Some(key.as_str()),
            _ => None,
        })
    }

    fn ensure_capacity(&mut self) {
        let capacity = self.slots.len();
        if (self.filled + self.tombstones) * 100 >= capacity * GROW_LOAD_PERCENT {
            self.rehash(capacity * 2);
        }
        let capacity = self.slots.len();
        if self.filled * 100 <= capacity * SHRINK_LOAD_PERCENT && capacity > MIN_SHRINK_CAPACITY
        {
            self.rehash((capacity / 2).max(MIN_SHRINK_CAPACITY));
        }
    }

    /// Re-insert every live entry into a fresh table of `new_capacity` slots.
    fn rehash(&mut self, new_capacity: usize) {
        tracing::trace!(
            from = self.slots.len(),
            to = new_capacity,
            filled = self.filled,
            tombstones = self.tombstones,
            "rehash"
        );
        let old = std::mem::replace(self, Self::with_capacity(new_capacity));
        for slot in old.slots {
            if let Slot::Filled { key, value } = slot {
                let mut idx = self.home_slot(&key);
                while !matches!(self.slots[idx], Slot::Empty) {
                    idx = (idx + 1) % new_capacity;
                }
                self.slots[idx] = Slot::Filled { key, value };
                self.filled += 1;
            }
        }
    }
}
