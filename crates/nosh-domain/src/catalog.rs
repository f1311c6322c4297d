//! Food catalog - owns the set of foods and answers search queries

use crate::food::{CompositeFood, Food, FoodServing, SimpleFood};
use std::collections::HashSet;
use std::rc::Rc;
use thiserror::Error;

/// Errors that can occur when mutating the catalog
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A food with this identifier already exists (simple or composite)
    #[error("food already exists: {0}")]
    DuplicateIdentifier(String),

    /// A composite food was given no components
    #[error("composite food has no components: {0}")]
    EmptyComposition(String),
}

/// The catalog of known foods.
///
/// Simple and composite foods live in separate groups sharing one
/// identifier space: an identifier used by either group cannot be
/// reused. Each group keeps insertion order, which fixes the order of
/// search results. The catalog owns every food it creates; callers get
/// shared read-only `Rc<Food>` handles.
///
/// A rejected add leaves the catalog untouched.
#[derive(Debug, Default)]
pub struct FoodCatalog {
    simple: Vec<Rc<Food>>,
    composite: Vec<Rc<Food>>,
    identifiers: HashSet<String>,
}

impl FoodCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a simple food with a fixed calorie count.
    ///
    /// Fails with [`CatalogError::DuplicateIdentifier`] if the
    /// identifier is already taken by any food.
    pub fn add_simple_food(
        &mut self,
        identifier: impl Into<String>,
        keywords: Vec<String>,
        calories_per_serving: f64,
    ) -> Result<Rc<Food>, CatalogError> {
        let identifier = identifier.into();
        self.check_identifier(&identifier)?;

        let food = Rc::new(Food::Simple(SimpleFood::new(
            identifier.clone(),
            keywords,
            calories_per_serving,
        )));
        self.identifiers.insert(identifier);
        self.simple.push(Rc::clone(&food));
        Ok(food)
    }

    /// Add a composite food built from servings of existing foods.
    ///
    /// Fails with [`CatalogError::DuplicateIdentifier`] on an identifier
    /// collision and [`CatalogError::EmptyComposition`] when `components`
    /// is empty. Calories are not computed here; they are derived on
    /// demand from the component tree.
    pub fn add_composite_food(
        &mut self,
        identifier: impl Into<String>,
        keywords: Vec<String>,
        components: Vec<FoodServing>,
    ) -> Result<Rc<Food>, CatalogError> {
        let identifier = identifier.into();
        self.check_identifier(&identifier)?;
        if components.is_empty() {
            return Err(CatalogError::EmptyComposition(identifier));
        }

        let food = Rc::new(Food::Composite(CompositeFood::new(
            identifier.clone(),
            keywords,
            components,
        )));
        self.identifiers.insert(identifier);
        self.composite.push(Rc::clone(&food));
        Ok(food)
    }

    /// Search foods by keywords.
    ///
    /// With `match_all` every keyword must appear in a food's keyword
    /// set; otherwise one match suffices. An empty query matches every
    /// food. Results list simple foods first, then composite foods,
    /// each group in catalog insertion order. No match is an empty
    /// result, never an error.
    pub fn search(&self, keywords: &[String], match_all: bool) -> Vec<Rc<Food>> {
        self.simple
            .iter()
            .chain(self.composite.iter())
            .filter(|food| food.matches_keywords(keywords, match_all))
            .cloned()
            .collect()
    }

    /// Look up a food by its exact identifier
    pub fn food(&self, identifier: &str) -> Option<Rc<Food>> {
        self.simple
            .iter()
            .chain(self.composite.iter())
            .find(|food| food.identifier() == identifier)
            .cloned()
    }

    /// Simple foods in insertion order
    pub fn simple_foods(&self) -> impl Iterator<Item = &Rc<Food>> {
        self.simple.iter()
    }

    /// Composite foods in insertion order
    pub fn composite_foods(&self) -> impl Iterator<Item = &Rc<Food>> {
        self.composite.iter()
    }

    /// Total number of foods in the catalog
    pub fn len(&self) -> usize {
        self.simple.len() + self.composite.len()
    }

    /// True when the catalog holds no foods
    pub fn is_empty(&self) -> bool {
        self.simple.is_empty() && self.composite.is_empty()
    }

    fn check_identifier(&self, identifier: &str) -> Result<(), CatalogError> {
        if self.identifiers.contains(identifier) {
            return Err(CatalogError::DuplicateIdentifier(identifier.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn test_add_and_lookup_simple_food() {
        let mut catalog = FoodCatalog::new();
        catalog
            .add_simple_food("Apple", keywords(&["fruit"]), 95.0)
            .unwrap();

        let apple = catalog.food("Apple").unwrap();
        assert_eq!(apple.identifier(), "Apple");
        assert_eq!(apple.calories_per_serving(), 95.0);
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let mut catalog = FoodCatalog::new();
        catalog
            .add_simple_food("Apple", keywords(&["fruit"]), 95.0)
            .unwrap();

        let result = catalog.add_simple_food("Apple", vec![], 1.0);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateIdentifier("Apple".to_string())
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_identifier_space_is_shared_across_groups() {
        let mut catalog = FoodCatalog::new();
        let apple = catalog
            .add_simple_food("Apple", keywords(&["fruit"]), 95.0)
            .unwrap();

        let result = catalog.add_composite_food(
            "Apple",
            vec![],
            vec![FoodServing::new(apple, 1.0)],
        );
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateIdentifier(_))
        ));
    }

    #[test]
    fn test_empty_composition_rejected() {
        let mut catalog = FoodCatalog::new();
        let result = catalog.add_composite_food("Nothing", vec![], vec![]);

        assert_eq!(
            result.unwrap_err(),
            CatalogError::EmptyComposition("Nothing".to_string())
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_search_match_any_vs_match_all() {
        let mut catalog = FoodCatalog::new();
        catalog
            .add_simple_food("Milk", keywords(&["milk", "dairy"]), 42.0)
            .unwrap();
        catalog
            .add_simple_food("Bread", keywords(&["bread", "grain"]), 80.0)
            .unwrap();

        let query = keywords(&["milk", "grain"]);

        let any = catalog.search(&query, false);
        assert_eq!(any.len(), 2);

        let all = catalog.search(&query, true);
        assert!(all.is_empty());
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        let mut catalog = FoodCatalog::new();
        let milk = catalog
            .add_simple_food("Milk", keywords(&["dairy"]), 42.0)
            .unwrap();
        catalog
            .add_composite_food(
                "Cereal Bowl",
                keywords(&["breakfast"]),
                vec![FoodServing::new(milk, 1.0)],
            )
            .unwrap();

        let results = catalog.search(&[], true);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_orders_simple_before_composite() {
        let mut catalog = FoodCatalog::new();
        let milk = catalog
            .add_simple_food("Milk", keywords(&["white"]), 42.0)
            .unwrap();
        catalog
            .add_composite_food(
                "Milkshake",
                keywords(&["white"]),
                vec![FoodServing::new(milk, 2.0)],
            )
            .unwrap();
        catalog
            .add_simple_food("Rice", keywords(&["white"]), 130.0)
            .unwrap();

        let results = catalog.search(&keywords(&["white"]), true);
        let identifiers: Vec<&str> = results.iter().map(|food| food.identifier()).collect();
        assert_eq!(identifiers, vec!["Milk", "Rice", "Milkshake"]);
    }

    #[test]
    fn test_rejected_add_leaves_no_trace() {
        let mut catalog = FoodCatalog::new();
        catalog
            .add_simple_food("Apple", keywords(&["fruit"]), 95.0)
            .unwrap();
        catalog.add_composite_food("Empty", vec![], vec![]).ok();
        catalog.add_simple_food("Apple", vec![], 1.0).ok();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.food("Empty").is_none());
    }
}
