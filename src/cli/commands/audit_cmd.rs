//! `hexlock audit` — display the audit log.
//!
//! Usage:
//!   hexlock audit               # show last 50 entries
//!   hexlock audit --last 20     # show last 20
//!   hexlock audit --since 7d    # entries from last 7 days

use chrono::Utc;

use crate::audit::{AuditEntry, AuditLog};
use crate::cli::{output, Cli};
use crate::config::Settings;
use crate::errors::{HexLockError, Result};

/// Execute the `audit` command.
pub fn execute(_cli: &Cli, last: usize, since: Option<&str>) -> Result<()> {
    let config_dir = Settings::config_dir()
        .ok_or_else(|| HexLockError::AuditError("cannot determine config directory".into()))?;
    std::fs::create_dir_all(&config_dir)?;

    let audit = AuditLog::open(&config_dir)
        .ok_or_else(|| HexLockError::AuditError("failed to open audit database".into()))?;

    let since_dt = match since {
        Some(s) => Some(parse_duration(s)?),
        None => None,
    };

    let entries = audit.query(last, since_dt)?;

    if entries.is_empty() {
        output::info("No audit entries found.");
        return Ok(());
    }

    print_audit_table(&entries);

    Ok(())
}

/// Parse a human-friendly duration string like "7d", "24h", "30m".
fn parse_duration(input: &str) -> Result<chrono::DateTime<Utc>> {
    let input = input.trim();

    let (num_str, unit) = if let Some(s) = input.strip_suffix('d') {
        (s, 'd')
    } else if let Some(s) = input.strip_suffix('h') {
        (s, 'h')
    } else if let Some(s) = input.strip_suffix('m') {
        (s, 'm')
    } else {
        return Err(HexLockError::CommandFailed(format!(
            "invalid duration '{input}' — use format like 7d, 24h, or 30m"
        )));
    };

    let num: i64 = num_str.parse().map_err(|_| {
        HexLockError::CommandFailed(format!(
            "invalid duration '{input}' — number part is not valid"
        ))
    })?;

    let duration = match unit {
        'd' => chrono::Duration::days(num),
        'h' => chrono::Duration::hours(num),
        'm' => chrono::Duration::minutes(num),
        _ => unreachable!(),
    };

    Ok(Utc::now() - duration)
}

/// Print audit entries in a formatted table.
pub fn print_audit_table(entries: &[AuditEntry]) {
    use comfy_table::{ContentArrangement, Table};
    use console::style;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Operation", "Principal", "Site", "Details"]);

    for entry in entries {
        let time = entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
        let op = colorize_operation(&entry.operation);
        let site = entry.site.as_deref().unwrap_or("-");
        let details = entry.details.as_deref().unwrap_or("-");

        table.add_row(vec![
            time,
            op,
            entry.principal.clone(),
            site.to_string(),
            details.to_string(),
        ]);
    }

    println!(
        "{}",
        style(format!("{} audit entries:", entries.len())).bold()
    );
    println!("{table}");
}

/// Colorize operation names for display.
fn colorize_operation(op: &str) -> String {
    use console::style;

    match op {
        "login" => style(op).green().to_string(),
        "add" | "edit" => style(op).blue().to_string(),
        "delete" => style(op).red().to_string(),
        "logout" => style(op).yellow().to_string(),
        _ => op.to_string(),
    }
}
