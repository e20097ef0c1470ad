// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate, Utc};
use std::collections::HashMap;

use crate::models::Operation;

const HORIZON_DAYS: i64 = 30;

/// Projects the next 30 days of spending from historical expense operations.
///
/// Amounts are summed per calendar day, an ordinary least-squares line is
/// fit over (day number, day sum), and the line is evaluated at today + i
/// for i in 0..=30; the 31 predicted values are summed. Expense amounts are
/// negative, so the projection normally is too.
///
/// Degenerate inputs short-circuit: no data returns 0.0, a single day of
/// data returns that day's sum times 30 (a flat extrapolation; one point
/// has no slope to fit).
pub fn project_expenses(expenses: &[Operation]) -> f64 {
    project_expenses_from(expenses, Utc::now().date_naive())
}

/// Same projection anchored at an explicit date instead of the current day.
pub fn project_expenses_from(expenses: &[Operation], today: NaiveDate) -> f64 {
    let mut by_day: HashMap<i64, i64> = HashMap::new();
    for op in expenses {
        *by_day.entry(day_number(op.date)).or_insert(0) += op.amount;
    }

    if by_day.is_empty() {
        return 0.0;
    }
    if by_day.len() == 1 {
        let only = by_day.values().next().copied().unwrap_or(0);
        return only as f64 * HORIZON_DAYS as f64;
    }

    let n = by_day.len() as f64;
    let x_mean = by_day.keys().map(|&x| x as f64).sum::<f64>() / n;
    let y_mean = by_day.values().map(|&y| y as f64).sum::<f64>() / n;
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&day, &sum) in &by_day {
        let dx = day as f64 - x_mean;
        sxx += dx * dx;
        sxy += dx * (sum as f64 - y_mean);
    }
    // Two or more distinct days, so sxx > 0.
    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    let start = day_number(today);
    (0..=HORIZON_DAYS)
        .map(|i| intercept + slope * (start + i) as f64)
        .sum()
}

fn day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}
