//! Floor plan: the table collection for one logical view.

use serde::{Deserialize, Serialize};

use crate::model::Table;

/// Table store for a single view (ceremony or banquet).
///
/// Owns the tables and hands out monotonic ids. Cloning a plan is a
/// deep copy, which is what the history manager snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlan {
    tables: Vec<Table>,
    next_id: u64,
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl FloorPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            next_id: 1,
        }
    }

    /// Generates a new unique table id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Number of tables in the plan.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True when the plan holds no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Inserts a table. The caller obtains ids via [`generate_id`].
    ///
    /// [`generate_id`]: FloorPlan::generate_id
    pub fn insert(&mut self, table: Table) {
        self.next_id = self.next_id.max(table.id + 1);
        self.tables.push(table);
    }

    /// Removes a table by id, returning it when present.
    pub fn remove(&mut self, id: u64) -> Option<Table> {
        let idx = self.tables.iter().position(|t| t.id == id)?;
        Some(self.tables.remove(idx))
    }

    /// Gets a reference to a table by id.
    pub fn get(&self, id: u64) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Gets a mutable reference to a table by id.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.id == id)
    }

    /// All tables in insertion order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Iterates over the tables.
    pub fn iter(&self) -> std::slice::Iter<'_, Table> {
        self.tables.iter()
    }

    /// Iterates mutably over the tables.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Table> {
        self.tables.iter_mut()
    }

    /// Replaces the whole table set, keeping id generation ahead of
    /// every table in it.
    pub fn replace_tables(&mut self, tables: Vec<Table>) {
        self.next_id = tables.iter().map(|t| t.id + 1).max().unwrap_or(1).max(self.next_id);
        self.tables = tables;
    }

    /// Removes every table.
    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableShape;

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let mut plan = FloorPlan::new();
        let a = plan.generate_id();
        let b = plan.generate_id();
        assert!(b > a);
    }

    #[test]
    fn test_insert_bumps_id_generation() {
        let mut plan = FloorPlan::new();
        plan.insert(Table::new(7, "T", TableShape::Round { diameter: 120.0 }, 0.0, 0.0, 4));
        assert!(plan.generate_id() > 7);
    }

    #[test]
    fn test_remove_returns_table() {
        let mut plan = FloorPlan::new();
        let id = plan.generate_id();
        plan.insert(Table::new(id, "T", TableShape::Round { diameter: 120.0 }, 0.0, 0.0, 4));
        assert_eq!(plan.len(), 1);
        let removed = plan.remove(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(plan.is_empty());
        assert!(plan.remove(id).is_none());
    }
}
