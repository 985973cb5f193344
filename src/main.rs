use clap::Parser;
use hexlock::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Login => hexlock::cli::commands::login::execute(&cli),
        Commands::Logout => hexlock::cli::commands::logout::execute(&cli),
        Commands::Status => hexlock::cli::commands::status::execute(&cli),
        Commands::List {
            ref filter,
            ref reveal,
        } => hexlock::cli::commands::list::execute(&cli, filter.as_deref(), reveal),
        Commands::Add {
            ref site,
            ref username,
            ref password,
            generate,
        } => hexlock::cli::commands::add::execute(
            &cli,
            site,
            username,
            password.as_deref(),
            generate,
        ),
        Commands::Get {
            ref site,
            copy,
            copy_username,
        } => hexlock::cli::commands::get::execute(&cli, site, copy, copy_username),
        Commands::Edit {
            ref site,
            ref username,
            ref password,
            generate,
        } => hexlock::cli::commands::edit::execute(
            &cli,
            site,
            username,
            password.as_deref(),
            generate,
        ),
        Commands::Delete { ref site, force } => {
            hexlock::cli::commands::delete::execute(&cli, site, force)
        }
        Commands::Generate { bytes, copy } => {
            hexlock::cli::commands::generate::execute(&cli, bytes, copy)
        }
        #[cfg(feature = "audit-log")]
        Commands::Audit { last, ref since } => {
            hexlock::cli::commands::audit_cmd::execute(&cli, last, since.as_deref())
        }
        Commands::Version => hexlock::cli::commands::version::execute(),
        Commands::Completions { ref shell } => hexlock::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        hexlock::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
