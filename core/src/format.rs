//! Human and machine renderings of a `FruitRecord`.
//!
//! Both functions are total. Missing values print as `None` in the human
//! layout and as `null` in JSON. Numbers print exactly as the API sent them:
//! `22` stays `22` and `22.0` stays `22.0` in both.

use serde_json::{json, Number};

use crate::types::FruitRecord;

/// Placeholder for a missing value in the human layout.
pub const MISSING: &str = "None";

/// Which rendering the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Machine,
}

impl OutputFormat {
    pub fn render(self, record: &FruitRecord) -> String {
        match self {
            OutputFormat::Human => human(record),
            OutputFormat::Machine => machine(record),
        }
    }
}

/// Five-line text layout, without a trailing newline.
pub fn human(record: &FruitRecord) -> String {
    format!(
        "Fruit: {}\nID: {}\nFamily: {}\nSugar: {} g\nCarbohydrates: {} g",
        text(record.name.as_deref()),
        record.id.map_or_else(|| MISSING.to_string(), |id| id.to_string()),
        text(record.family.as_deref()),
        number(record.sugar.as_ref()),
        number(record.carbohydrates.as_ref()),
    )
}

/// Pretty JSON with two-space indentation and a fixed key order.
pub fn machine(record: &FruitRecord) -> String {
    let value = json!({
        "name": record.name,
        "id": record.id,
        "family": record.family,
        "sugar": record.sugar,
        "carbohydrates": record.carbohydrates,
    });
    format!("{value:#}")
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

fn number(value: Option<&Number>) -> String {
    value.map_or_else(|| MISSING.to_string(), Number::to_string)
}
