//! Domain record and wire DTOs for the fruit API.
//!
//! # Design
//! `FruitResponse` mirrors the API payload with every field optional, so a
//! missing key decodes to `None` instead of failing. Keys the lookup does not
//! use (`genus`, `order`, `calories`, ...) are ignored. `FruitRecord` is the
//! flattened result handed to the formatters; its sugar and carbohydrate
//! values come from the nested `nutritions` object only. They stay
//! `serde_json::Number`, so `22` and `22.0` are reproduced as sent.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Normalized result of a lookup.
///
/// Field order is the output key order of the machine format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FruitRecord {
    pub name: Option<String>,
    pub id: Option<i64>,
    pub family: Option<String>,
    pub sugar: Option<Number>,
    pub carbohydrates: Option<Number>,
}

/// Response payload of `GET {base}/{name}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FruitResponse {
    pub name: Option<String>,
    pub id: Option<i64>,
    pub family: Option<String>,
    pub nutritions: Option<Nutritions>,
}

/// The nested `nutritions` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Nutritions {
    pub sugar: Option<Number>,
    pub carbohydrates: Option<Number>,
}

impl From<FruitResponse> for FruitRecord {
    fn from(raw: FruitResponse) -> Self {
        let nutritions = raw.nutritions.unwrap_or_default();
        FruitRecord {
            name: raw.name,
            id: raw.id,
            family: raw.family,
            sugar: nutritions.sugar,
            carbohydrates: nutritions.carbohydrates,
        }
    }
}
