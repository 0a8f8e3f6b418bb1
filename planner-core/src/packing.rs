//! Packing checklist
//!
//! Local only, like the cuisine list. Items are numbered by id in the view.

use log::{debug, info};

use crate::config::PlannerConfig;
use crate::domain::{PackingItem, PlannerError, PlannerResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackingList {
    items: Vec<PackingItem>,
}

impl PackingList {
    pub fn new(items: Vec<PackingItem>) -> Self {
        Self { items }
    }

    /// Seed from the configured item names, numbered from 1
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(
            config
                .packing_items
                .iter()
                .zip(1..)
                .map(|(name, id)| PackingItem::new(id, name.as_str()))
                .collect(),
        )
    }

    pub fn items(&self) -> &[PackingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn packed_count(&self) -> usize {
        self.items.iter().filter(|i| i.packed).count()
    }

    pub fn add(&mut self, name: &str) -> PlannerResult<&PackingItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlannerError::Validation("packing item must not be empty".to_string()));
        }
        let id = self.items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        self.items.push(PackingItem::new(id, name));
        info!("Added packing item {:?} ({})", name, id);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Flip the packed flag; returns the new value, or None for an unknown id
    pub fn toggle(&mut self, id: u32) -> Option<bool> {
        let item = self.items.iter_mut().find(|i| i.id == id)?;
        item.packed = !item.packed;
        debug!("Packing item {} packed: {}", id, item.packed);
        Some(item.packed)
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        before != self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_and_numbered_from_one() {
        let list = PackingList::from_config(&PlannerConfig::default());
        assert_eq!(list.len(), 10);
        assert_eq!(list.items()[0].id, 1);
        assert_eq!(list.items()[0].name, "Warm clothing (jackets, thermals)");
        assert_eq!(list.items()[9].id, 10);
        assert_eq!(list.packed_count(), 0);
    }

    #[test]
    fn test_toggle_marks_packed() {
        let mut list = PackingList::from_config(&PlannerConfig::default());
        assert_eq!(list.toggle(2), Some(true));
        assert_eq!(list.packed_count(), 1);
        assert_eq!(list.toggle(2), Some(false));
        assert_eq!(list.toggle(99), None);
        assert_eq!(list.packed_count(), 0);
    }

    #[test]
    fn test_add_and_remove() {
        let mut list = PackingList::from_config(&PlannerConfig::default());
        assert!(list.remove(10));
        assert_eq!(list.add(" Trekking poles ").unwrap().id, 10);
        assert!(matches!(list.add("  "), Err(PlannerError::Validation(_))));
        assert_eq!(list.len(), 10);
        assert!(!list.remove(42));
    }
}
