//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.  Password cells are masked
//! unless the caller explicitly revealed the record.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::gateway::CredentialRecord;

/// What a hidden password renders as.
const MASK: &str = "••••••••";

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of credential records (Site, Username, Password).
///
/// `is_revealed` decides per site whether the password is shown or
/// masked; the records themselves are printed in the order given.
pub fn print_credentials_table(records: &[&CredentialRecord], is_revealed: impl Fn(&str) -> bool) {
    if records.is_empty() {
        info("No credentials to show.");
        tip("Run `hexlock add <SITE> <USERNAME>` to store your first credential.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Site", "Username", "Password"]);

    for record in records {
        let password = if is_revealed(&record.site) {
            record.secret.clone()
        } else {
            MASK.to_string()
        };
        table.add_row(vec![record.site.clone(), record.username.clone(), password]);
    }

    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_is_never_a_valid_generated_secret() {
        // Generated secrets are lowercase hex; the mask must be
        // distinguishable from any real value.
        assert!(MASK.chars().all(|c| !c.is_ascii_hexdigit()));
    }
}
