use super::category::Category;
use serde::Serialize;

/// Read-side shape of one day: the rows as stored plus per-category totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLogs {
    pub log_date: String,
    pub rows: Vec<RowView>,
    pub category_totals: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    pub category: Category,
    pub task_name: String,
    pub hours: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub hours: f64,
}
