use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::NutritionalInfo;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("number pattern is valid"));

/// Reference daily values, based on a 2,000 calorie diet.
pub const DAILY_VALUES: [(&str, u32); 5] = [
    ("calories", 2000),
    ("protein", 50),
    ("carbs", 275),
    ("fat", 78),
    ("fiber", 28),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutrientShare {
    pub nutrient: String,
    /// Leading integer of the free-text amount, 0 when there is none.
    pub amount: u32,
    pub unit_text: String,
    /// Percent of daily value, capped at 100.
    pub percent_of_daily_value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionBreakdown {
    pub nutrients: Vec<NutrientShare>,
}

/// First run of digits in an amount string: "~300 kcal" is 300, "1.5g" is 1.
pub fn parse_nutrition_value(value: &str) -> u32 {
    FIRST_NUMBER
        .find(value)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

pub fn percent_of_daily_value(nutrient: &str, amount: u32) -> Option<u32> {
    let (_, daily) = DAILY_VALUES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(nutrient))?;

    let percent = (f64::from(amount) / f64::from(*daily) * 100.0).round();
    Some(percent.min(100.0) as u32)
}

impl From<&NutritionalInfo> for NutritionBreakdown {
    fn from(info: &NutritionalInfo) -> Self {
        let nutrients = DAILY_VALUES
            .iter()
            .map(|(nutrient, _)| {
                let unit_text = info.get(nutrient).unwrap_or_default().to_string();
                let amount = parse_nutrition_value(&unit_text);

                NutrientShare {
                    nutrient: nutrient.to_string(),
                    amount,
                    unit_text,
                    percent_of_daily_value: percent_of_daily_value(nutrient, amount)
                        .unwrap_or_default(),
                }
            })
            .collect();

        Self { nutrients }
    }
}
