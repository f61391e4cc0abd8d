//! Folds a day's entries into the read response.

use crate::models::category::Category;
use crate::models::day_summary::{CategoryTotal, DayLogs, RowView};
use crate::models::time_log::TimeLogEntry;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Exact per-category sums, in order of first appearance.
/// Categories without entries are not listed.
pub fn category_totals(entries: &[TimeLogEntry]) -> Vec<(Category, Decimal)> {
    let mut totals: Vec<(Category, Decimal)> = Vec::new();

    for entry in entries {
        match totals.iter_mut().find(|(cat, _)| *cat == entry.category) {
            Some((_, sum)) => *sum += entry.hours,
            None => totals.push((entry.category, entry.hours)),
        }
    }

    totals
}

/// Build the response for one day. `log_date` is echoed back as given.
pub fn summarize(log_date: &str, entries: &[TimeLogEntry]) -> DayLogs {
    let rows = entries
        .iter()
        .map(|e| RowView {
            category: e.category,
            task_name: e.task_name.clone(),
            hours: to_display(e.hours),
        })
        .collect();

    let category_totals = category_totals(entries)
        .into_iter()
        .map(|(category, sum)| CategoryTotal {
            category,
            hours: to_display(sum),
        })
        .collect();

    DayLogs {
        log_date: log_date.to_string(),
        rows,
        category_totals,
    }
}

// Floating point only at the response boundary.
fn to_display(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
