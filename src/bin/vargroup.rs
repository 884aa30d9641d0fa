//! `vargroup` command-line entry point.
//!
//! Authenticates with a personal access token, then lists, exports or
//! imports the variable groups of a project. Results go to stdout as JSON;
//! logging goes to stderr.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vargroup::auth::{authenticate, authenticate_at, Session};
use vargroup::commands::{export_command, import_command, list_command};
use vargroup::config::{load_config, ClientConfig};
use vargroup::executor::{ExecutionConfig, HttpTransport};
use vargroup::logging::init_logging;
use vargroup::variable_groups::ImportSource;

/// Export and import Azure DevOps variable groups
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Account (organization) name
    #[arg(short, long, env = "VARGROUP_ACCOUNT", global = true)]
    account: Option<String>,

    /// Personal access token
    #[arg(short, long, env = "VARGROUP_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Base URL to use instead of the configured account URL template
    #[arg(long, env = "VARGROUP_BASE_URL", global = true)]
    base_url: Option<String>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the account and token are accepted
    Authenticate,

    /// List variable groups of a project
    List {
        #[command(flatten)]
        target: Target,
    },

    /// Serialize variable groups to JSON, optionally one file per group
    Export {
        #[command(flatten)]
        target: Target,

        /// Re-export groups from these JSON files instead of fetching them
        #[arg(short, long = "input")]
        inputs: Vec<PathBuf>,

        /// Directory that receives one `{name}.json` per group
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Create or update variable groups from JSON documents
    Import {
        /// Project to write to
        #[arg(short, long)]
        project: String,

        /// Replace the existing group of the same name instead of creating one
        #[arg(short, long)]
        update: bool,

        /// Inline JSON document to import
        #[arg(long, conflicts_with = "files")]
        json: Option<String>,

        /// Files holding one group document each
        #[arg(required_unless_present = "json")]
        files: Vec<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct Target {
    /// Project to read from
    #[arg(short, long)]
    project: String,

    /// Only include groups with this name (repeatable)
    #[arg(short, long = "name")]
    names: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let transport = HttpTransport::new(&ExecutionConfig::from(&config))?;
    let session = open_session(&transport, &config, &cli)?;

    match cli.command {
        Command::Authenticate => {
            println!(
                "Authenticated to {} as account '{}'",
                session.base_url(),
                session.account()
            );
        }
        Command::List { target } => {
            let output = list_command(&transport, &session, &target.project, &target.names)
                .with_context(|| format!("listing variable groups of '{}'", target.project))?;
            println!("{}", output);
        }
        Command::Export {
            target,
            inputs,
            out_dir,
        } => {
            let (report, output) = export_command(
                &transport,
                &session,
                &config,
                &target.project,
                &target.names,
                &inputs,
                out_dir.as_deref(),
            )
            .with_context(|| format!("exporting variable groups of '{}'", target.project))?;

            if let Some(output) = output {
                println!("{}", output);
            }
            if !report.is_complete() {
                for failure in &report.failures {
                    log::error!("{}", failure);
                }
                bail!(
                    "{} of {} file(s) could not be written",
                    report.failures.len(),
                    report.documents.len()
                );
            }
        }
        Command::Import {
            project,
            update,
            json,
            files,
        } => {
            let source = match json {
                Some(json) => ImportSource::json(json),
                None => ImportSource::Files(files),
            };
            let output = import_command(&transport, &session, &config, &project, source, update)
                .with_context(|| format!("importing variable groups into '{}'", project))?;
            println!("{}", output);
        }
    }

    Ok(())
}

fn open_session(transport: &HttpTransport, config: &ClientConfig, cli: &Cli) -> Result<Session> {
    let token = match cli.token.as_deref() {
        Some(token) => token,
        None => bail!("a personal access token is required (--token or VARGROUP_TOKEN)"),
    };

    let session = match (cli.base_url.as_deref(), cli.account.as_deref()) {
        (Some(base_url), account) => authenticate_at(
            transport,
            config,
            account.unwrap_or_default(),
            base_url,
            token,
        )?,
        (None, Some(account)) => authenticate(transport, config, account, token)?,
        (None, None) => bail!("an account name is required (--account or VARGROUP_ACCOUNT)"),
    };

    Ok(session)
}
