// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Catalog entry: canonical English name, Russian alias, icon name, and
/// display color. The catalog is fixed configuration and never changes at
/// runtime.
#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub name_ru: &'static str,
    pub icon: &'static str,
    pub color: (u8, u8, u8),
}

impl Category {
    /// Display label for a settings language code ("ru" selects the alias).
    pub fn label(&self, language: &str) -> &'static str {
        if language == "ru" { self.name_ru } else { self.name }
    }
}

pub static EXPENSE_CATEGORIES: [Category; 8] = [
    Category { name: "Clothes", name_ru: "Одежда", icon: "clothes", color: (93, 138, 197) },
    Category { name: "Jewelry", name_ru: "Ювелирия", icon: "jewelry", color: (3, 168, 99) },
    Category { name: "Food", name_ru: "Продукты", icon: "food", color: (246, 144, 121) },
    Category { name: "Hobbies", name_ru: "Хобби", icon: "hobbies", color: (91, 49, 151) },
    Category { name: "Restaurants", name_ru: "Рестораны", icon: "restaurants", color: (239, 29, 38) },
    Category { name: "Transport", name_ru: "Транспорт", icon: "transport", color: (89, 199, 200) },
    Category { name: "Travel", name_ru: "Путешествия", icon: "travel", color: (247, 126, 115) },
    Category { name: "Other expenses", name_ru: "Прочие расходы", icon: "other", color: (192, 129, 184) },
];

pub static INCOME_CATEGORIES: [Category; 4] = [
    Category { name: "Salary", name_ru: "Зарплата", icon: "salary", color: (246, 144, 121) },
    Category { name: "Pension", name_ru: "Пенсия", icon: "pension", color: (93, 138, 197) },
    Category { name: "Scholarship", name_ru: "Стипендия", icon: "scholarship", color: (237, 65, 61) },
    Category { name: "Other income", name_ru: "Прочие доходы", icon: "income", color: (192, 129, 184) },
];

// Keyed by both language names; expense entries are inserted first and win
// any collision, matching the expenses-then-incomes scan order of the
// catalog this table replaces.
static BY_NAME: Lazy<HashMap<&'static str, &'static Category>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for cat in EXPENSE_CATEGORIES.iter().chain(INCOME_CATEGORIES.iter()) {
        map.entry(cat.name).or_insert(cat);
        map.entry(cat.name_ru).or_insert(cat);
    }
    map
});

/// The catch-all entry unmatched names resolve to.
pub fn fallback() -> &'static Category {
    &INCOME_CATEGORIES[3]
}

/// Resolves a display name (either language) to its catalog entry, falling
/// back to "Other income" when nothing matches. Never fails.
pub fn resolve(name: &str) -> &'static Category {
    BY_NAME.get(name).copied().unwrap_or_else(fallback)
}
