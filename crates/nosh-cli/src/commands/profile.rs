//! Diet profile and calorie target commands.

use crate::cli::ProfileArgs;
use crate::config::{Config, DietConfig};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use nosh_domain::{DietProfile, TargetStrategy};

/// Execute the profile command.
///
/// With no flags the current profile is printed. With flags the profile
/// is created (all of sex/weight/height/age/activity are then required)
/// or updated field by field, and saved to the configuration file.
pub fn execute_profile(
    args: ProfileArgs,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<()> {
    let has_updates = args.sex.is_some()
        || args.weight.is_some()
        || args.height.is_some()
        || args.age.is_some()
        || args.activity.is_some()
        || args.strategy.is_some();

    if !has_updates {
        return show_profile(config, formatter);
    }

    let updated = match config.diet {
        Some(existing) => DietConfig {
            profile: DietProfile {
                sex: args.sex.unwrap_or(existing.profile.sex),
                weight_kg: args.weight.unwrap_or(existing.profile.weight_kg),
                height_cm: args.height.unwrap_or(existing.profile.height_cm),
                age_years: args.age.unwrap_or(existing.profile.age_years),
                activity: args.activity.unwrap_or(existing.profile.activity),
            },
            strategy: args.strategy.unwrap_or(existing.strategy),
        },
        None => {
            let (Some(sex), Some(weight), Some(height), Some(age), Some(activity)) =
                (args.sex, args.weight, args.height, args.age, args.activity)
            else {
                return Err(CliError::InvalidInput(
                    "Setting up a profile needs --sex, --weight, --height, --age and --activity"
                        .to_string(),
                ));
            };
            DietConfig {
                profile: DietProfile {
                    sex,
                    weight_kg: weight,
                    height_cm: height,
                    age_years: age,
                    activity,
                },
                strategy: args.strategy.unwrap_or(TargetStrategy::HarrisBenedict),
            }
        }
    };

    validate_profile(&updated.profile)?;
    config.diet = Some(updated);
    config.save()?;

    println!("{}", formatter.success("Profile saved"));
    show_profile(config, formatter)
}

/// Execute the target command.
pub fn execute_target(config: &Config, formatter: &Formatter) -> Result<()> {
    let Some(diet) = &config.diet else {
        return Err(CliError::NoProfile);
    };

    let strategy = diet.strategy.strategy();
    let target = strategy.daily_target(&diet.profile);

    println!("{}", formatter.info(&format!("Method: {}", strategy.name())));
    println!(
        "{}",
        formatter.info(&format!("Daily calorie target: {:.2} calories", target))
    );
    Ok(())
}

fn show_profile(config: &Config, formatter: &Formatter) -> Result<()> {
    let Some(diet) = &config.diet else {
        return Err(CliError::NoProfile);
    };

    let profile = &diet.profile;
    println!(
        "{}",
        formatter.info(&format!(
            "Profile: {}, {:.1} kg, {:.1} cm, {} years, {}",
            profile.sex.as_str(),
            profile.weight_kg,
            profile.height_cm,
            profile.age_years,
            profile.activity.as_str()
        ))
    );
    println!(
        "{}",
        formatter.info(&format!("Strategy: {}", diet.strategy.strategy().name()))
    );
    Ok(())
}

fn validate_profile(profile: &DietProfile) -> Result<()> {
    if profile.weight_kg <= 0.0 || profile.height_cm <= 0.0 {
        return Err(CliError::InvalidInput(
            "Weight and height must be positive".to_string(),
        ));
    }
    Ok(())
}
