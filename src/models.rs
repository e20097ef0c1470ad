// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One financial event. Positive `amount` is income, negative is expense;
/// zero counts as neither. `id == -1` means "not yet persisted / not found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Value")]
    pub amount: i64,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "date", with = "wire_date")]
    pub date: NaiveDate,
}

impl Operation {
    pub fn new(amount: i64, category: impl Into<String>, date: NaiveDate, id: i64) -> Self {
        Operation {
            id,
            amount,
            category: category.into(),
            date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub name: String,
    pub surname: String,
}

/// Dates cross the service boundary as `yyyy-MM-dd`, sometimes with a
/// time-of-day suffix (`2025-04-23T00:00:00`). Only the date part counts.
pub mod wire_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(de)?;
        let day = raw.get(..10).unwrap_or(&raw);
        NaiveDate::parse_from_str(day, FORMAT).map_err(serde::de::Error::custom)
    }
}
