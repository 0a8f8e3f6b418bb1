//! Local cuisine list
//!
//! Purely local: nothing here talks to the network.

use log::info;

use crate::config::PlannerConfig;
use crate::domain::{Cuisine, PlannerError, PlannerResult};

pub const DEFAULT_DESCRIPTION: &str = "A delicious local specialty.";
pub const DEFAULT_RATING: f32 = 4.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CuisineList {
    items: Vec<Cuisine>,
}

impl CuisineList {
    pub fn new(items: Vec<Cuisine>) -> Self {
        Self { items }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.cuisines.clone())
    }

    pub fn items(&self) -> &[Cuisine] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a dish with the default description and rating
    pub fn add(&mut self, name: &str) -> PlannerResult<&Cuisine> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlannerError::Validation("cuisine name must not be empty".to_string()));
        }
        let id = self.items.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        self.items.push(Cuisine::new(id, name, DEFAULT_DESCRIPTION, DEFAULT_RATING));
        info!("Added cuisine {:?} ({})", name, id);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Returns whether anything was removed
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|c| c.id != id);
        before != self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_from_config() {
        let list = CuisineList::from_config(&PlannerConfig::default());
        assert_eq!(list.len(), 5);
        assert_eq!(list.items()[0].name, "Siddu");
    }

    #[test]
    fn test_add_uses_defaults() {
        let mut list = CuisineList::from_config(&PlannerConfig::default());
        let added = list.add("  Dham ").unwrap();
        assert_eq!(added.id, 6);
        assert_eq!(added.name, "Dham");
        assert_eq!(added.description, DEFAULT_DESCRIPTION);
        assert_eq!(added.rating, DEFAULT_RATING);
    }

    #[test]
    fn test_ids_stay_unique_after_remove() {
        let mut list = CuisineList::from_config(&PlannerConfig::default());
        assert!(list.remove(2));
        let id = list.add("Dham").unwrap().id;
        assert_eq!(id, 6);
        assert_eq!(list.items().iter().filter(|c| c.id == id).count(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut list = CuisineList::default();
        assert!(matches!(list.add(""), Err(PlannerError::Validation(_))));
        assert!(list.is_empty());
        assert!(!list.remove(1));
    }
}
