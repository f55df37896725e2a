use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "dotperm")]
#[command(version, about = "Inspect and edit dot-delimited permission sets", long_about = None)]
struct Cli {
    /// Log what grant/revoke do to the set (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a permission document (.toml, .yaml, .yml)
    Check {
        /// Path to the permission document
        file: String,
    },
    /// Check permissions against a set
    Has {
        /// Permission list, e.g. "document.4,!document.4.edit"
        #[arg(short, long, default_value = "")]
        set: String,

        /// Permissions to check
        #[arg(required = true)]
        permissions: Vec<String>,
    },
    /// Grant permissions and print the resulting set
    Grant {
        /// Starting permission list
        #[arg(short, long, default_value = "")]
        set: String,

        /// Permissions to grant, applied in order
        #[arg(required = true)]
        permissions: Vec<String>,
    },
    /// Revoke permissions and print the resulting set
    Revoke {
        /// Starting permission list
        #[arg(short, long, default_value = "")]
        set: String,

        /// Permissions to revoke, applied in order
        #[arg(required = true)]
        permissions: Vec<String>,
    },
    /// Replay a grant/revoke walkthrough, printing the set after each step
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Check { file } => commands::check::check(&file)?,
        Commands::Has { set, permissions } => commands::has::has(&set, &permissions)?,
        Commands::Grant { set, permissions } => commands::mutate::grant(&set, &permissions)?,
        Commands::Revoke { set, permissions } => commands::mutate::revoke(&set, &permissions)?,
        Commands::Demo => commands::demo::run()?,
    }

    Ok(())
}
