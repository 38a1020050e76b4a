use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour for a log operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "import" => Colour::Cyan,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)`, or just the operation when there is no target.
fn op_target(op: &str, target: &str) -> String {
    if target.is_empty() {
        op.to_string()
    } else {
        format!("{op} ({target})")
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);

        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| UnicodeWidthStr::width(op_target(op, target).as_str()))
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in &entries {
            let color = color_for_operation(operation);

            let mut visible = op_target(operation, target);
            if visible.chars().count() > MAX_OP_WIDTH {
                visible = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>() + "...";
            }
            let padding = " ".repeat(op_w.saturating_sub(UnicodeWidthStr::width(visible.as_str())));

            // only the operation word is coloured
            let rendered = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                rendered,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
