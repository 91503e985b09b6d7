//! Ordered in-memory collection of todo records
//!
//! Records keep insertion order. Positions shift on removal and insertion, so an
//! index is only meaningful while the caller holds exclusive access.

use super::types::{Todo, TodoId};

/// Ordered sequence of todos plus the counter that hands out new IDs
#[derive(Debug, Clone, Default)]
pub struct TodoCollection {
    items: Vec<Todo>,
    /// Next ID to hand out; never decreases, so IDs are not reused after deletes
    next_id: u64,
}

/// Predicate matching records with the given ID
pub fn by_id(id: TodoId) -> impl Fn(&Todo) -> bool {
    move |todo| todo.id == id
}

impl TodoCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in order
    pub fn get(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a record. No uniqueness check is made.
    pub fn push(&mut self, todo: Todo) {
        self.observe_id(todo.id);
        self.items.push(todo);
    }

    /// Reserve the next ID
    pub fn allocate_id(&mut self) -> TodoId {
        let id = TodoId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Sub-collection of records matching `predicate`, order preserved
    pub fn filter<P>(&self, predicate: P) -> TodoCollection
    where
        P: Fn(&Todo) -> bool,
    {
        TodoCollection {
            items: self.items.iter().filter(|t| predicate(t)).cloned().collect(),
            next_id: self.next_id,
        }
    }

    pub fn first(&self) -> Option<&Todo> {
        self.items.first()
    }

    /// Position of the first record sharing `todo`'s ID
    pub fn index(&self, todo: &Todo) -> Option<usize> {
        self.index_of(todo.id)
    }

    pub fn index_of(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }

    /// Remove the record at `index`, or `None` if out of bounds
    pub fn remove_at(&mut self, index: usize) -> Option<Todo> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Insert at `index`, shifting later records right.
    ///
    /// `index == len()` appends. Beyond that the record is handed back.
    pub fn insert_at(&mut self, index: usize, todo: Todo) -> Result<(), Todo> {
        if index > self.items.len() {
            return Err(todo);
        }
        self.observe_id(todo.id);
        self.items.insert(index, todo);
        Ok(())
    }

    fn observe_id(&mut self, id: TodoId) {
        if id.0 >= self.next_id {
            self.next_id = id.0.saturating_add(1);
        }
    }
}

impl FromIterator<Todo> for TodoCollection {
    fn from_iter<I: IntoIterator<Item = Todo>>(iter: I) -> Self {
        let mut collection = Self::new();
        for todo in iter {
            collection.push(todo);
        }
        collection
    }
}
