//! Catalog persistence - simple and composite food files

use crate::{StoreError, TextStore};
use nosh_domain::{Food, FoodCatalog, FoodServing};

impl TextStore {
    /// Save the catalog to the simple- and composite-food files.
    ///
    /// Composite foods are written in catalog insertion order, so every
    /// component's definition lands before the line that references it.
    pub fn save_catalog(&self, catalog: &FoodCatalog) -> Result<(), StoreError> {
        let mut simple = String::new();
        for food in catalog.simple_foods() {
            simple.push_str(&format!(
                "{}|{}|{:.2}\n",
                food.identifier(),
                food.keywords().join(","),
                food.calories_per_serving()
            ));
        }

        let mut composite = String::new();
        for food in catalog.composite_foods() {
            let Food::Composite(item) = food.as_ref() else {
                continue;
            };
            let components = item
                .components()
                .iter()
                .map(|component| {
                    format!(
                        "{}:{}",
                        component.food().identifier(),
                        component.servings()
                    )
                })
                .collect::<Vec<_>>()
                .join(";");
            composite.push_str(&format!(
                "{}|{}|{}\n",
                food.identifier(),
                food.keywords().join(","),
                components
            ));
        }

        self.write_file(&self.simple_foods_path(), &simple)?;
        self.write_file(&self.composite_foods_path(), &composite)?;
        Ok(())
    }

    /// Load a catalog from the simple- and composite-food files.
    ///
    /// Simple foods load first; composite components then resolve
    /// against everything loaded so far, so a composite may reference
    /// earlier composites. Unresolvable components and malformed lines
    /// are skipped with a warning.
    pub fn load_catalog(&self) -> Result<FoodCatalog, StoreError> {
        let mut catalog = FoodCatalog::new();

        for line in self.read_lines(&self.simple_foods_path())? {
            let Some((identifier, keywords, rest)) = split_record(&line) else {
                tracing::warn!(%line, "skipping malformed simple food line");
                continue;
            };
            let Ok(calories) = rest.trim().parse::<f64>() else {
                tracing::warn!(%line, "skipping simple food with unparseable calories");
                continue;
            };
            if let Err(error) = catalog.add_simple_food(identifier, keywords, calories) {
                tracing::warn!(%error, "skipping simple food");
            }
        }

        for line in self.read_lines(&self.composite_foods_path())? {
            let Some((identifier, keywords, rest)) = split_record(&line) else {
                tracing::warn!(%line, "skipping malformed composite food line");
                continue;
            };

            let mut components = Vec::new();
            for part in rest.split(';').filter(|part| !part.is_empty()) {
                let Some((component_id, servings)) = part.split_once(':') else {
                    tracing::warn!(component = %part, "skipping malformed component");
                    continue;
                };
                let component_id = component_id.trim();
                let Ok(servings) = servings.trim().parse::<f64>() else {
                    tracing::warn!(component = %part, "skipping component with unparseable servings");
                    continue;
                };
                match catalog.food(component_id) {
                    Some(food) => components.push(FoodServing::new(food, servings)),
                    None => {
                        tracing::warn!(
                            component = %component_id,
                            composite = %identifier,
                            "dropping reference to unknown food"
                        );
                    }
                }
            }

            if let Err(error) = catalog.add_composite_food(identifier, keywords, components) {
                tracing::warn!(%error, "skipping composite food");
            }
        }

        Ok(catalog)
    }
}

/// Split a `|`-delimited record into identifier, keyword list and tail.
///
/// The keyword field is comma-joined; an empty field means no keywords.
fn split_record(line: &str) -> Option<(String, Vec<String>, &str)> {
    let mut fields = line.splitn(3, '|');
    let identifier = fields.next()?.trim();
    let keywords = fields.next()?;
    let rest = fields.next()?;
    if identifier.is_empty() {
        return None;
    }

    let keywords = keywords
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect();

    Some((identifier.to_string(), keywords, rest))
}
