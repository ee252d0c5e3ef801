//! # Record Collection
//!
//! Insertion-ordered collection of id-carrying records with a monotonic id
//! counter. Ids start at 1, are assigned strictly increasing, and are never
//! reused, even after deletion. Each collection owns its own counter.

/// A record that carries a numeric id
pub trait Record {
    fn id(&self) -> u64;
}

/// Insertion-ordered record collection with its own id counter
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    next_id: u64,
}

impl<T: Record> Collection<T> {
    /// Create an empty collection; the first allocated id is 1
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// All records in insertion order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Look up a record by id
    pub fn get(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Look up a record by id for mutation
    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Whether a record with this id exists
    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    /// Take the next id from the counter
    ///
    /// The counter only moves forward; removing records does not return ids
    /// to the pool.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a record, preserving insertion order
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove a record by id, returning it if it existed
    pub fn remove(&mut self, id: u64) -> Option<T> {
        let idx = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(idx))
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop all records and restart the id counter at 1
    pub fn reset(&mut self) {
        self.items.clear();
        self.next_id = 1;
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
