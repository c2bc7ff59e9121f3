use crate::errors::AppResult;
use crate::store::log::{LogLine, read_all};
use ansi_term::Colour;
use std::path::Path;

const MAX_OP_WIDTH: usize = 60;

/// Colour of the operation column
fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" => Colour::Green,
        "logout" => Colour::Red,
        "project" => Colour::Yellow,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to `MAX_OP_WIDTH` visible characters.
fn op_target(line: &LogLine) -> String {
    let text = if line.target.is_empty() {
        line.operation.clone()
    } else {
        format!("{} ({})", line.operation, line.target)
    };

    if text.chars().count() > MAX_OP_WIDTH {
        let mut cut: String = text.chars().take(MAX_OP_WIDTH - 3).collect();
        cut.push_str("...");
        cut
    } else {
        text
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = read_all(path)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(usize, &LogLine, String)> = entries
            .iter()
            .enumerate()
            .map(|(i, l)| (i + 1, l, op_target(l)))
            .collect();

        let id_w = rows.len().to_string().len();
        let date_w = rows.iter().map(|(_, l, _)| l.date.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|(_, _, t)| t.chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, line, text) in rows {
            let color = color_for_operation(&line.operation);

            // only the operation word is coloured; padding uses visible width
            let padding = " ".repeat(op_w.saturating_sub(text.chars().count()));
            let colored = match text.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(text.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                line.date,
                colored,
                padding,
                line.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
