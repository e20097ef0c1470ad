// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use std::collections::HashMap;

use crate::categories::{self, Category};
use crate::models::Operation;

/// Per-category rollup: resolved catalog entry, operation count, amount sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: &'static Category,
    pub count: usize,
    pub sum: i64,
}

/// The working set of one user's operations, in fetch order.
///
/// Queries are pure; only `add` and `remove` mutate. Derived views
/// (`select_within_period`, `select_by_category`) are independent snapshots:
/// mutation goes through the canonical total store and callers rebuild their
/// views afterwards. "Not found" is always an empty result or a `-1`
/// sentinel, never an error.
#[derive(Debug, Clone, Default)]
pub struct OperationStore {
    ops: Vec<Operation>,
}

impl OperationStore {
    pub fn new(ops: Vec<Operation>) -> Self {
        OperationStore { ops }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Operations with `amount > 0`, original order. Zero is neither income
    /// nor expense.
    pub fn incomes(&self) -> Vec<Operation> {
        self.ops.iter().filter(|o| o.amount > 0).cloned().collect()
    }

    /// Operations with `amount < 0`, original order.
    pub fn expenses(&self) -> Vec<Operation> {
        self.ops.iter().filter(|o| o.amount < 0).cloned().collect()
    }

    pub fn total_incomes(&self) -> i64 {
        self.ops.iter().filter(|o| o.amount > 0).map(|o| o.amount).sum()
    }

    /// Sum of negative amounts; `<= 0` by construction.
    pub fn total_expenses(&self) -> i64 {
        self.ops.iter().filter(|o| o.amount < 0).map(|o| o.amount).sum()
    }

    /// Income rollup per resolved category, largest sum first.
    pub fn by_category_incomes(&self) -> Vec<CategoryTotal> {
        let mut totals = self.roll_up(|amount| amount > 0);
        totals.sort_by(|a, b| b.sum.cmp(&a.sum));
        totals
    }

    /// Expense rollup per resolved category, most negative sum first.
    pub fn by_category_expenses(&self) -> Vec<CategoryTotal> {
        let mut totals = self.roll_up(|amount| amount < 0);
        totals.sort_by(|a, b| a.sum.cmp(&b.sum));
        totals
    }

    fn roll_up(&self, keep: impl Fn(i64) -> bool) -> Vec<CategoryTotal> {
        let mut acc: HashMap<&'static str, CategoryTotal> = HashMap::new();
        for op in &self.ops {
            if !keep(op.amount) {
                continue;
            }
            let category = categories::resolve(&op.category);
            let entry = acc.entry(category.name).or_insert(CategoryTotal {
                category,
                count: 0,
                sum: 0,
            });
            entry.count += 1;
            entry.sum += op.amount;
        }
        acc.into_values().collect()
    }

    /// Every operation as a (date, resolved category, amount) triple, date
    /// descending. The sort is stable: same-date operations keep their
    /// original relative order.
    pub fn sorted_by_date(&self) -> Vec<(NaiveDate, &'static Category, i64)> {
        let mut rows: Vec<(NaiveDate, &'static Category, i64)> = self
            .ops
            .iter()
            .map(|o| (o.date, categories::resolve(&o.category), o.amount))
            .collect();
        rows.sort_by(|a, b| b.0.cmp(&a.0));
        rows
    }

    /// Operations dated strictly after `today - days`. The window is rolling:
    /// today is read at call time, so results shift across midnight.
    pub fn select_within_period(&self, days: u32) -> Vec<Operation> {
        self.select_within_period_from(days, Utc::now().date_naive())
    }

    pub fn select_within_period_from(&self, days: u32, today: NaiveDate) -> Vec<Operation> {
        let cutoff = today - chrono::Duration::days(i64::from(days));
        self.ops.iter().filter(|o| o.date > cutoff).cloned().collect()
    }

    /// Snapshot store of the operations labeled with the given category
    /// (exact, case-sensitive match on either of its bilingual names).
    pub fn select_by_category(&self, category: &Category) -> OperationStore {
        let ops = self
            .ops
            .iter()
            .filter(|o| o.category == category.name || o.category == category.name_ru)
            .cloned()
            .collect();
        OperationStore::new(ops)
    }

    /// Per-date (income sum, expense sum) pairs. Built by reversing the
    /// date-descending sort and folding by first-seen date, so keys come out
    /// in that traversal's order (ascending date); callers rely on it and the
    /// result is deliberately not re-sorted.
    pub fn by_date_income_expense(&self) -> Vec<(NaiveDate, i64, i64)> {
        let mut order: Vec<NaiveDate> = Vec::new();
        let mut sums: HashMap<NaiveDate, (i64, i64)> = HashMap::new();
        for (date, _, amount) in self.sorted_by_date().into_iter().rev() {
            let entry = sums.entry(date).or_insert_with(|| {
                order.push(date);
                (0, 0)
            });
            if amount < 0 {
                entry.1 += amount;
            } else {
                entry.0 += amount;
            }
        }
        order
            .into_iter()
            .map(|date| {
                let (income, expense) = sums[&date];
                (date, income, expense)
            })
            .collect()
    }

    /// Id of the first operation matching all three fields, or `-1`. With
    /// duplicate (date, amount, category) records this returns the first in
    /// store order; that ambiguity is inherent to the lookup.
    pub fn find_id(&self, date: NaiveDate, amount: i64, category: &Category) -> i64 {
        self.ops
            .iter()
            .find(|o| {
                o.date == date
                    && o.amount == amount
                    && (o.category == category.name || o.category == category.name_ru)
            })
            .map_or(-1, |o| o.id)
    }

    /// Removes the first operation with this id; silently does nothing when
    /// absent.
    pub fn remove(&mut self, id: i64) {
        if let Some(pos) = self.ops.iter().position(|o| o.id == id) {
            self.ops.remove(pos);
        }
    }

    /// Appends a record. The caller is responsible for having obtained a
    /// valid id from the service first.
    pub fn add(&mut self, amount: i64, category: impl Into<String>, date: NaiveDate, id: i64) {
        self.ops.push(Operation::new(amount, category, date, id));
    }
}
