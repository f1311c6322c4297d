//! Food module - the value model shared by the catalog and the log

use std::rc::Rc;

/// A food known to the catalog.
///
/// Foods come in two variants: a simple food stores its calories
/// directly, a composite food derives them from servings of other
/// foods. Foods are immutable once constructed; the catalog is the sole
/// creator and hands them out as shared `Rc<Food>` references.
#[derive(Debug, Clone, PartialEq)]
pub enum Food {
    /// A food with a fixed, stored calorie count per serving
    Simple(SimpleFood),

    /// A food assembled from servings of other foods
    Composite(CompositeFood),
}

impl Food {
    /// Get the food's unique identifier
    pub fn identifier(&self) -> &str {
        match self {
            Food::Simple(food) => &food.identifier,
            Food::Composite(food) => &food.identifier,
        }
    }

    /// Get the food's search keywords
    pub fn keywords(&self) -> &[String] {
        match self {
            Food::Simple(food) => &food.keywords,
            Food::Composite(food) => &food.keywords,
        }
    }

    /// Calories in one serving of this food
    ///
    /// For a composite food this walks the component tree on every
    /// call; nothing is cached, so there is no invalidation concern.
    pub fn calories_per_serving(&self) -> f64 {
        match self {
            Food::Simple(food) => food.calories_per_serving,
            Food::Composite(food) => food
                .components
                .iter()
                .map(|component| component.calories())
                .sum(),
        }
    }

    /// Check whether this food's keyword set matches a query.
    ///
    /// Matching is case-insensitive set membership, not substring
    /// matching. An empty query matches every food. With `match_all`
    /// every query keyword must be present; otherwise one suffices.
    pub fn matches_keywords(&self, query: &[String], match_all: bool) -> bool {
        if query.is_empty() {
            return true;
        }

        let own: Vec<String> = self
            .keywords()
            .iter()
            .map(|keyword| keyword.to_lowercase())
            .collect();

        let mut matcher = query
            .iter()
            .map(|keyword| own.contains(&keyword.to_lowercase()));

        if match_all {
            matcher.all(|hit| hit)
        } else {
            matcher.any(|hit| hit)
        }
    }
}

/// A basic food item with a fixed calorie count.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleFood {
    identifier: String,
    keywords: Vec<String>,
    calories_per_serving: f64,
}

impl SimpleFood {
    /// Create a new simple food
    pub fn new(
        identifier: impl Into<String>,
        keywords: Vec<String>,
        calories_per_serving: f64,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            keywords,
            calories_per_serving,
        }
    }

    /// Stored calories per serving
    pub fn calories_per_serving(&self) -> f64 {
        self.calories_per_serving
    }
}

/// A food composed of servings of other foods.
///
/// Components are fixed at construction. A composite may contain other
/// composites; the catalog only ever builds compositions from foods
/// that already exist, so cycles cannot arise.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeFood {
    identifier: String,
    keywords: Vec<String>,
    components: Vec<FoodServing>,
}

impl CompositeFood {
    /// Create a new composite food from its component servings
    pub fn new(
        identifier: impl Into<String>,
        keywords: Vec<String>,
        components: Vec<FoodServing>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            keywords,
            components,
        }
    }

    /// The component servings this food is built from
    pub fn components(&self) -> &[FoodServing] {
        &self.components
    }
}

/// A number of servings of one food.
///
/// Pairs a shared food reference with a serving count. Two servings are
/// equal when they name the same food (identifiers are unique within a
/// catalog) and the same count.
#[derive(Debug, Clone)]
pub struct FoodServing {
    food: Rc<Food>,
    servings: f64,
}

impl FoodServing {
    /// Create a new serving of the given food
    pub fn new(food: Rc<Food>, servings: f64) -> Self {
        Self { food, servings }
    }

    /// The food being served
    pub fn food(&self) -> &Rc<Food> {
        &self.food
    }

    /// Number of servings
    pub fn servings(&self) -> f64 {
        self.servings
    }

    /// Total calories for this serving
    pub fn calories(&self) -> f64 {
        self.food.calories_per_serving() * self.servings
    }
}

impl PartialEq for FoodServing {
    fn eq(&self, other: &Self) -> bool {
        self.food.identifier() == other.food.identifier() && self.servings == other.servings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(identifier: &str, calories: f64) -> Rc<Food> {
        Rc::new(Food::Simple(SimpleFood::new(
            identifier,
            vec!["test".to_string()],
            calories,
        )))
    }

    #[test]
    fn test_simple_food_calories() {
        let apple = simple("Apple", 95.0);
        assert_eq!(apple.calories_per_serving(), 95.0);
    }

    #[test]
    fn test_composite_food_aggregates_components() {
        let apple = simple("Apple", 95.0);
        let peanut_butter = simple("Peanut Butter", 190.0);

        let snack = Food::Composite(CompositeFood::new(
            "PB Apple Snack",
            vec!["snack".to_string()],
            vec![
                FoodServing::new(Rc::clone(&apple), 1.0),
                FoodServing::new(Rc::clone(&peanut_butter), 0.5),
            ],
        ));

        assert!((snack.calories_per_serving() - 190.0).abs() < 1e-9);
    }

    #[test]
    fn test_nested_composite_recurses() {
        let bread = simple("Bread", 80.0);
        let jam = simple("Jam", 50.0);

        let toast = Rc::new(Food::Composite(CompositeFood::new(
            "Jam Toast",
            vec![],
            vec![
                FoodServing::new(Rc::clone(&bread), 2.0),
                FoodServing::new(Rc::clone(&jam), 1.0),
            ],
        )));

        let plate = Food::Composite(CompositeFood::new(
            "Toast Plate",
            vec![],
            vec![FoodServing::new(Rc::clone(&toast), 2.0)],
        ));

        // toast = 2*80 + 50 = 210, plate = 2*210
        assert!((plate.calories_per_serving() - 420.0).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let food = Food::Simple(SimpleFood::new(
            "Milk",
            vec!["Dairy".to_string(), "Drink".to_string()],
            42.0,
        ));

        assert!(food.matches_keywords(&["dairy".to_string()], false));
        assert!(food.matches_keywords(&["DRINK".to_string()], true));
    }

    #[test]
    fn test_keyword_match_is_set_membership_not_substring() {
        let food = Food::Simple(SimpleFood::new("Milk", vec!["dairy".to_string()], 42.0));

        assert!(!food.matches_keywords(&["dair".to_string()], false));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let food = Food::Simple(SimpleFood::new("Milk", vec![], 42.0));

        assert!(food.matches_keywords(&[], true));
        assert!(food.matches_keywords(&[], false));
    }

    #[test]
    fn test_serving_value_equality() {
        let apple = simple("Apple", 95.0);
        let other_apple = simple("Apple", 95.0);

        let a = FoodServing::new(Rc::clone(&apple), 2.0);
        let b = FoodServing::new(other_apple, 2.0);
        let c = FoodServing::new(apple, 3.0);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
