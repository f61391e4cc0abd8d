use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::category_totals;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::query_day;
use crate::errors::{AppError, AppResult};
use crate::models::time_log::DEFAULT_USER_ID;
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, GREEN, RESET};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date: d } = cmd {
        let day = match d {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;
        let entries = query_day(&pool.conn, day, DEFAULT_USER_ID)?;

        if entries.is_empty() {
            info(format!("No time logs for {}", day));
            return Ok(());
        }

        header(format!("Time logs for {}", day));

        let task_w = entries
            .iter()
            .map(|e| e.task_name.chars().count())
            .max()
            .unwrap_or(4)
            .max(4);

        for e in &entries {
            println!(
                "{CYAN}{:<14}{RESET} {:<task_w$} {:>8}",
                e.category.label(),
                e.task_name,
                e.hours.normalize(),
                task_w = task_w
            );
        }

        println!("\nTotals:");
        for (category, total) in category_totals(&entries) {
            println!(
                "  {CYAN}{:<14}{RESET} {GREEN}{}{RESET}",
                category.label(),
                total.normalize()
            );
        }
    }

    Ok(())
}
