use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    match Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// ANSI color for an operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "project_add" | "clock_in" => Colour::Green,
        "project_remove" | "remove_time" => Colour::Red,
        "clock_out" => Colour::Yellow,
        "register" | "unregister" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "backup" | "restore" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(entry: &LogEntry) -> String {
    if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    }
}

/// Truncate to `MAX_OP_WIDTH` visible chars, coloring only the operation.
fn render_op_target(entry: &LogEntry) -> String {
    let color = color_for_operation(&entry.operation);
    let visible = op_target(entry);

    let truncated = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    match truncated.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for entry in &entries {
            let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| entry.date.clone());

            let rendered = render_op_target(entry);
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&rendered).chars().count()));

            println!(
                "{:>id_w$}: {:<25} | {}{} => {}",
                entry.id,
                date,
                rendered,
                padding,
                entry.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_targets_are_truncated() {
        let entry = LogEntry {
            id: 1,
            date: String::new(),
            operation: "register".into(),
            target: "1,".repeat(60),
            message: String::new(),
        };
        let visible = strip_ansi(&render_op_target(&entry));
        assert_eq!(visible.chars().count(), MAX_OP_WIDTH);
        assert!(visible.starts_with("register ("));
        assert!(visible.ends_with("..."));
    }
}
