//! Cuisine Entity

use serde::{Deserialize, Serialize};

/// A local dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cuisine {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub rating: f32,
}

/// One of the five rating stars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Cuisine {
    pub fn new(id: u32, name: impl Into<String>, description: impl Into<String>, rating: f32) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            rating,
        }
    }

    /// Five stars for the rating: full below the floor, half below the rating
    pub fn stars(&self) -> [Star; 5] {
        let mut stars = [Star::Empty; 5];
        for (i, star) in stars.iter_mut().enumerate() {
            let i = i as f32;
            *star = if i < self.rating.floor() {
                Star::Full
            } else if i < self.rating {
                Star::Half
            } else {
                Star::Empty
            };
        }
        stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_for_fractional_rating() {
        let dish = Cuisine::new(1, "Siddu", "Steamed bread", 4.8);
        assert_eq!(
            dish.stars(),
            [Star::Full, Star::Full, Star::Full, Star::Full, Star::Half]
        );
    }

    #[test]
    fn test_stars_for_whole_rating() {
        let dish = Cuisine::new(1, "Babru", "Fried bread", 4.0);
        assert_eq!(dish.stars()[3], Star::Full);
        assert_eq!(dish.stars()[4], Star::Empty);
    }
}
