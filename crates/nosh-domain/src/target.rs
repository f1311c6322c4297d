//! Calorie target strategies
//!
//! Two closed-form BMR formulas, each scaled by the profile's activity
//! multiplier. Both are pure functions of the profile.

use crate::profile::{DietProfile, Sex};
use serde::{Deserialize, Serialize};

/// Strategy for computing a daily calorie target from a profile
pub trait CalorieTarget {
    /// Recommended daily calorie intake for the given profile
    fn daily_target(&self, profile: &DietProfile) -> f64;

    /// Human-readable name of this strategy
    fn name(&self) -> &'static str;
}

/// Harris-Benedict equation for basal metabolic rate
pub struct HarrisBenedict;

impl CalorieTarget for HarrisBenedict {
    fn daily_target(&self, profile: &DietProfile) -> f64 {
        let age = f64::from(profile.age_years);
        let bmr = match profile.sex {
            Sex::Male => {
                88.362 + 13.397 * profile.weight_kg + 4.799 * profile.height_cm - 5.677 * age
            }
            Sex::Female => {
                447.593 + 9.247 * profile.weight_kg + 3.098 * profile.height_cm - 4.330 * age
            }
        };
        bmr * profile.activity.multiplier()
    }

    fn name(&self) -> &'static str {
        "Harris-Benedict Equation"
    }
}

/// Mifflin-St Jeor equation for basal metabolic rate
pub struct MifflinStJeor;

impl CalorieTarget for MifflinStJeor {
    fn daily_target(&self, profile: &DietProfile) -> f64 {
        let age = f64::from(profile.age_years);
        let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * age;
        let bmr = match profile.sex {
            Sex::Male => base + 5.0,
            Sex::Female => base - 161.0,
        };
        bmr * profile.activity.multiplier()
    }

    fn name(&self) -> &'static str {
        "Mifflin-St Jeor Equation"
    }
}

/// Selectable target strategy, for configuration and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetStrategy {
    /// [`HarrisBenedict`]
    HarrisBenedict,
    /// [`MifflinStJeor`]
    MifflinStJeor,
}

impl TargetStrategy {
    /// All selectable strategies
    pub const ALL: [TargetStrategy; 2] =
        [TargetStrategy::HarrisBenedict, TargetStrategy::MifflinStJeor];

    /// The strategy implementation behind this selection
    pub fn strategy(&self) -> &'static dyn CalorieTarget {
        match self {
            TargetStrategy::HarrisBenedict => &HarrisBenedict,
            TargetStrategy::MifflinStJeor => &MifflinStJeor,
        }
    }

    /// Get the strategy selector as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetStrategy::HarrisBenedict => "harris-benedict",
            TargetStrategy::MifflinStJeor => "mifflin-st-jeor",
        }
    }

    /// Parse a strategy selector from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "harris-benedict" | "harris" => Some(TargetStrategy::HarrisBenedict),
            "mifflin-st-jeor" | "mifflin" => Some(TargetStrategy::MifflinStJeor),
            _ => None,
        }
    }
}

impl std::str::FromStr for TargetStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid target strategy: {}", s))
    }
}
