use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{DailyEntry, Session};
use crate::store::TimesStore;
use crate::utils::colors::{color_for_balance, colorize_optional, paint};
use crate::utils::table::{Column, Table};
use crate::utils::time::parse_signed_duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { days } = cmd {
        let entries = TimesStore::new(cfg.times_path()).load()?;

        let shown: Vec<&DailyEntry> = entries
            .iter()
            .take(days.unwrap_or(usize::MAX))
            .collect();

        if shown.is_empty() {
            println!("No sessions recorded yet.");
            return Ok(());
        }

        println!("📅 Recorded days:\n");
        print!("{}", render(&shown)?);
    }
    Ok(())
}

fn session_cell(s: &Session) -> String {
    let end = s.end_str().unwrap_or_else(|| "--:--".to_string());
    match &s.project {
        Some(p) => format!("{}-{} [{}]", s.start_str(), end, p),
        None => format!("{}-{}", s.start_str(), end),
    }
}

fn render(entries: &[&DailyEntry]) -> AppResult<String> {
    let mut table = Table::new(vec![
        Column::new("DATE"),
        Column::new("DAILY"),
        Column::new("BALANCE"),
        Column::new("SESSIONS"),
    ]);

    for e in entries {
        let daily = e.daily_total.clone().unwrap_or_else(|| "--:--".into());
        let grand = match &e.grand_total {
            Some(g) => paint(color_for_balance(parse_signed_duration(g)?), g),
            None => colorize_optional("--:--"),
        };
        let sessions = e.times.iter().map(session_cell).collect::<Vec<_>>().join(", ");

        table.add_row(vec![e.date.clone(), colorize_optional(&daily), grand, sessions]);
    }

    Ok(table.render())
}
