/// Fixed-capacity FIFO with a read cursor.
///
/// Reading an empty buffer yields `None` and changes nothing. Writing into a
/// full buffer overwrites the oldest unread entry.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    reads: u64,
    writes: u64,
}

impl<T> RingBuffer<T> {
    /// Empty buffer holding at most `capacity` unread entries.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            reads: 0,
            writes: 0,
        }
    }

    /// Maximum number of unread entries.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of unread entries.
    pub fn len(&self) -> usize {
        (self.writes - self.reads) as usize
    }

    /// Whether there is nothing left to read.
    pub fn is_empty(&self) -> bool {
        self.reads == self.writes
    }

    /// Total number of successful reads so far.
    pub fn read_count(&self) -> u64 {
        self.reads
    }

    /// Append `value`. Returns false only for a zero-capacity buffer, which drops it.
    pub fn write(&mut self, value: T) -> bool {
        let cap = self.slots.len() as u64;
        if cap == 0 {
            return false;
        }
        self.slots[(self.writes % cap) as usize] = Some(value);
        self.writes += 1;
        if self.writes - self.reads > cap {
            self.reads = self.writes - cap;
        }
        true
    }

    /// Take the oldest unread entry.
    pub fn read(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let cap = self.slots.len() as u64;
        let value = self.slots[(self.reads % cap) as usize].take();
        self.reads += 1;
        value
    }
}

impl<T> FromIterator<T> for RingBuffer<T> {
    /// Buffer sized exactly to the items, all unread.
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut ring = Self::with_capacity(items.len());
        for item in items {
            ring.write(item);
        }
        ring
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slideshow/ring.rs"]
mod tests;
