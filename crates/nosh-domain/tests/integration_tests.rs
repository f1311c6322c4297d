//! Integration tests for nosh-domain
//!
//! End-to-end scenarios exercising the catalog and the daily log
//! together, the way the CLI drives them.

use chrono::NaiveDate;
use nosh_domain::{CatalogError, DailyLog, FoodCatalog, FoodServing};

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

#[test]
fn test_compose_and_log_a_snack() {
    let mut catalog = FoodCatalog::new();

    let apple = catalog
        .add_simple_food("Apple", keywords(&["fruit"]), 95.0)
        .unwrap();
    let peanut_butter = catalog
        .add_simple_food("Peanut Butter", keywords(&["spread"]), 190.0)
        .unwrap();

    let snack = catalog
        .add_composite_food(
            "PB Apple Snack",
            keywords(&["snack"]),
            vec![
                FoodServing::new(apple, 1.0),
                FoodServing::new(peanut_butter, 0.5),
            ],
        )
        .unwrap();

    // 95 + 190 * 0.5
    assert!((snack.calories_per_serving() - 190.0).abs() < 1e-9);

    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut log = DailyLog::new();
    log.add_food_serving(date, FoodServing::new(snack, 2.0));

    assert!((log.total_calories(date) - 380.0).abs() < 1e-9);
}

#[test]
fn test_catalog_rejections_do_not_disturb_the_log() {
    let mut catalog = FoodCatalog::new();
    let apple = catalog
        .add_simple_food("Apple", keywords(&["fruit"]), 95.0)
        .unwrap();

    let mut log = DailyLog::new();
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    log.add_food_serving(date, FoodServing::new(apple.clone(), 1.0));

    // Rejected catalog operations are atomic and independent of the log.
    assert_eq!(
        catalog.add_simple_food("Apple", vec![], 1.0).unwrap_err(),
        CatalogError::DuplicateIdentifier("Apple".to_string())
    );
    assert!(matches!(
        catalog.add_composite_food("Empty", vec![], vec![]),
        Err(CatalogError::EmptyComposition(_))
    ));

    assert_eq!(catalog.len(), 1);
    assert_eq!(log.food_servings_for_date(date).len(), 1);
    assert!((log.total_calories(date) - 95.0).abs() < 1e-9);
}

#[test]
fn test_log_references_survive_catalog_searches() {
    let mut catalog = FoodCatalog::new();
    let milk = catalog
        .add_simple_food("Milk", keywords(&["dairy", "drink"]), 42.0)
        .unwrap();

    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let mut log = DailyLog::new();
    log.add_food_serving(date, FoodServing::new(milk, 3.0));

    // Search hands out shared references to the same food the log holds.
    let hits = catalog.search(&keywords(&["dairy"]), true);
    assert_eq!(hits.len(), 1);
    assert!((log.total_calories(date) - 126.0).abs() < 1e-9);
}
