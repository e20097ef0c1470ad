// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use outlay::forecast::{project_expenses, project_expenses_from};
use outlay::models::Operation;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn expense(amount: i64, date: &str, id: i64) -> Operation {
    Operation::new(amount, "Food", d(date), id)
}

fn assert_close(actual: f64, expected: f64) {
    let tol = 1e-6 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() < tol,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn no_data_projects_zero() {
    assert_eq!(project_expenses(&[]), 0.0);
}

#[test]
fn single_day_extrapolates_flat() {
    let ops = [expense(-100, "2025-01-01", 1)];
    assert_eq!(project_expenses(&ops), -3000.0);
}

#[test]
fn single_day_sums_before_extrapolating() {
    let ops = [
        expense(-100, "2025-01-01", 1),
        expense(-150, "2025-01-01", 2),
    ];
    assert_eq!(project_expenses(&ops), -7500.0);
}

#[test]
fn two_days_match_the_line_through_both_points() {
    let ops = [
        expense(-100, "2025-01-01", 1),
        expense(-200, "2025-01-02", 2),
    ];
    let today = d("2025-01-05");

    // With two points the least-squares line passes through both exactly.
    let x1 = f64::from(d("2025-01-01").num_days_from_ce());
    let x2 = f64::from(d("2025-01-02").num_days_from_ce());
    let (y1, y2) = (-100.0, -200.0);
    let slope = (y2 - y1) / (x2 - x1);
    let intercept = y1 - slope * x1;

    let start = f64::from(today.num_days_from_ce());
    let mut expected = 0.0;
    for i in 0..=30 {
        expected += intercept + slope * (start + f64::from(i));
    }

    assert_close(project_expenses_from(&ops, today), expected);
}

#[test]
fn collinear_days_follow_the_common_line() {
    // Day sums -100, -110, -120 on consecutive days: slope is exactly -10.
    let ops = [
        expense(-100, "2025-03-01", 1),
        expense(-110, "2025-03-02", 2),
        expense(-60, "2025-03-03", 3),
        expense(-60, "2025-03-03", 4),
    ];
    let today = d("2025-03-04");

    let x1 = f64::from(d("2025-03-01").num_days_from_ce());
    let slope = -10.0;
    let intercept = -100.0 - slope * x1;

    let start = f64::from(today.num_days_from_ce());
    let mut expected = 0.0;
    for i in 0..=30 {
        expected += intercept + slope * (start + f64::from(i));
    }

    assert_close(project_expenses_from(&ops, today), expected);
}

#[test]
fn per_day_grouping_matches_presummed_input() {
    let split = [
        expense(-40, "2025-04-01", 1),
        expense(-60, "2025-04-01", 2),
        expense(-30, "2025-04-03", 3),
        expense(-90, "2025-04-03", 4),
    ];
    let summed = [
        expense(-100, "2025-04-01", 5),
        expense(-120, "2025-04-03", 6),
    ];
    let today = d("2025-04-10");
    assert_close(
        project_expenses_from(&split, today),
        project_expenses_from(&summed, today),
    );
}
