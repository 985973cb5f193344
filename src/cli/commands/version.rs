//! `hexlock version` — display version and check for updates.

use console::style;

use crate::config::Settings;
use crate::errors::Result;
use crate::version_check;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    let current = env!("CARGO_PKG_VERSION");
    println!("hexlock {current}");

    // The update probe never fails the command; without a config dir
    // there is nowhere to cache, so skip it entirely.
    let latest = Settings::config_dir().and_then(|dir| version_check::newer_release(&dir, current));

    match latest {
        Some(latest) => {
            println!(
                "\n{} A newer version is available: {} → {}",
                style("Update available!").yellow().bold(),
                style(current).red(),
                style(&latest).green().bold()
            );
            println!(
                "  Run {} to update",
                style("cargo install hexlock-cli").cyan()
            );
        }
        None => {
            println!("{}", style("You're up to date!").green());
        }
    }

    Ok(())
}
