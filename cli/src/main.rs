use clap::{CommandFactory, Parser, Subcommand};
use colored::*;
use orr_admin::commands::{self, ActionKind, BuiltinAction};
use orr_admin::config::{Config, ConfigManager, Credentials};
use orr_admin::utils::logging;
use orr_admin::{OrrError, OrrResult};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "orr-admin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Maintenance tool for the ORR ontology registry",
    long_about = "orr-admin adjusts the visibility and status of registry entries, or removes them.\n\
                  Authenticated commands read ORR_USERNAME and ORR_TOKEN; run `orr-admin login` to obtain a token."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(long, global = true, help = "Path to a config file")]
    config: Option<PathBuf>,

    #[arg(long, global = true, help = "Registry API base URL (overrides ORR_API_URL)")]
    registry_url: Option<String>,

    #[arg(long, global = true, help = "Enable debug logging on stderr")]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a bearer token for the given credentials
    Login {
        username: String,

        /// Prompted for when omitted
        password: Option<String>,
    },

    /// Update the configured test entry
    TestUpdate {
        #[arg(long, help = "Visibility to set")]
        visibility: Option<String>,

        #[arg(long, help = "Status to set")]
        status: Option<String>,
    },

    /// Delete the configured test entry's version
    TestDelete,

    /// Set visibility and status on an entry version
    Update {
        iri: String,
        version: String,

        #[arg(long, help = "Visibility to set")]
        visibility: Option<String>,

        #[arg(long, help = "Status to set")]
        status: Option<String>,
    },

    /// Delete an entry version, or the whole entry when no version is given
    Delete { iri: String, version: Option<String> },

    /// List every registry entry
    List,

    /// Show the entries matching the selection filter
    ShowSelected {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Apply an action to each entry matching the selection filter
    ProcessSelected {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, value_enum, default_value_t = ActionKind::Noop, help = "Per-entry action")]
        action: ActionKind,
    },
}

#[derive(clap::Args)]
struct FilterArgs {
    #[arg(long, help = "Required visibility")]
    visibility: Option<String>,

    #[arg(long, help = "Substring the entry name must contain")]
    name_contains: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            // Unknown command or bad arguments: show usage, exit normally.
            print_usage();
            return;
        }
        Err(e) => e.exit(),
    };

    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        match &e {
            OrrError::Api { .. } | OrrError::MissingEnv(_) => println!("{}", e),
            _ => eprintln!("{} {}", "Error:".red().bold(), e),
        }
        process::exit(e.exit_code());
    }
}

fn print_usage() {
    println!("{}", Cli::command().render_help());
}

async fn run(cli: Cli) -> OrrResult<()> {
    let Some(command) = cli.command else {
        print_usage();
        return Ok(());
    };

    let config = ConfigManager::load(cli.config.as_deref(), cli.registry_url)?;

    match command {
        Commands::Login { username, password } => {
            commands::login::execute(&config, username, password).await
        }
        Commands::TestUpdate { visibility, status } => {
            let credentials = Credentials::from_env()?;
            let policy = config.update.clone().with_overrides(visibility, status);
            let entry = &config.test_entry;
            commands::update::execute(&config, &credentials, &entry.iri, &entry.version, &policy)
                .await
        }
        Commands::TestDelete => {
            let credentials = Credentials::from_env()?;
            let entry = &config.test_entry;
            commands::delete::execute(&config, &credentials, &entry.iri, Some(&entry.version))
                .await
        }
        Commands::Update {
            iri,
            version,
            visibility,
            status,
        } => {
            let credentials = Credentials::from_env()?;
            let policy = config.update.clone().with_overrides(visibility, status);
            commands::update::execute(&config, &credentials, &iri, &version, &policy).await
        }
        Commands::Delete { iri, version } => {
            let credentials = Credentials::from_env()?;
            commands::delete::execute(&config, &credentials, &iri, version.as_deref()).await
        }
        Commands::List => {
            let credentials = Credentials::from_env()?;
            commands::list::execute(&config, &credentials).await
        }
        Commands::ShowSelected { filter } => {
            let credentials = Credentials::from_env()?;
            let filter = selection_filter(&config, filter);
            commands::selected::show(&config, &credentials, &filter).await
        }
        Commands::ProcessSelected { filter, action } => {
            let credentials = Credentials::from_env()?;
            let filter = selection_filter(&config, filter);
            let action = BuiltinAction::new(action, config.update.clone());
            commands::selected::process(&config, &credentials, &filter, &action).await
        }
    }
}

fn selection_filter(config: &Config, args: FilterArgs) -> orr_admin::config::SelectFilter {
    config
        .select
        .clone()
        .with_overrides(args.visibility, args.name_contains)
}
