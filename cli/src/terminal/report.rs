//! Report layouts for assessments and district registries.

use appraisr_common::config::Config;
use appraisr_common::error::EstateError;
use appraisr_common::estate::{Assessment, District};
use colored::*;

use crate::terminal::{colors, format, print};

pub fn assessment(assessment: &Assessment, district: &str, cfg: &Config) {
    print::section("assessment", cfg);

    let largest: ColoredString = match &assessment.largest_room {
        Some(room) => format!(
            "{} {}",
            room.name.color(colors::SECONDARY),
            format!("({})", format::surface(room.surface, cfg.precision)).color(colors::SEPARATOR)
        )
        .normal(),
        None => "none".color(colors::SEPARATOR),
    };
    print::key_values(&[
        (String::from("Property"), assessment.property_name.as_str().color(colors::TEXT_DEFAULT)),
        (String::from("District"), district.color(colors::TEXT_DEFAULT)),
        (String::from("Surface"), format::surface(assessment.total_surface, cfg.precision)),
        (String::from("Price"), format::price(assessment.total_price, cfg.precision)),
        (String::from("Largest room"), largest),
    ]);

    if cfg.quiet < 2 {
        print::blank();
        if assessment.rooms.is_empty() {
            print::notice("This property has no rooms.");
        } else {
            print::tree(
                "rooms",
                &format::room_pairs(&assessment.rooms, assessment.largest_room.as_ref(), cfg.precision),
            );
        }
    }

    print::closing_rule(cfg);
}

pub fn districts(districts: &[District], cfg: &Config) {
    print::section("districts", cfg);

    if districts.is_empty() {
        print::notice("No districts registered. Use --district NAME=PRICE.");
    } else {
        let pairs: Vec<(String, ColoredString)> = districts
            .iter()
            .map(|d| (d.name().to_string(), format::price(d.unit_price(), cfg.precision)))
            .collect();
        print::key_values(&pairs);
    }

    print::closing_rule(cfg);
}

/// One line per registration attempt, success or failure.
pub fn registration(outcomes: &[(String, Result<&'static str, EstateError>)], cfg: &Config) {
    print::section("registration", cfg);
    print::key_values(&registration_pairs(outcomes));
    print::blank();
}

fn registration_pairs(outcomes: &[(String, Result<&'static str, EstateError>)]) -> Vec<(String, ColoredString)> {
    outcomes
        .iter()
        .map(|(name, outcome)| {
            let value = match outcome {
                Ok(message) => message.color(colors::SECONDARY),
                Err(e) => e.to_string().color(colors::FAILURE),
            };
            (name.clone(), value)
        })
        .collect()
}
