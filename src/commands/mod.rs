pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod next;
pub mod validate;
pub mod watch;

use crate::libs::messages::macros::is_debug_mode;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a break slot to the timeline")]
    Add(add::AddArgs),
    #[command(about = "Edit an existing break slot")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a break slot")]
    Delete(delete::DeleteArgs),
    #[command(about = "List all break slots")]
    List,
    #[command(about = "Show the next upcoming break")]
    Next,
    #[command(about = "Check the timeline for issues")]
    Validate,
    #[command(about = "Watch the timeline and notify when a break is due")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        if is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::List => list::cmd(),
            Commands::Next => next::cmd(),
            Commands::Validate => validate::cmd(),
            Commands::Watch => watch::cmd().await,
        }
    }
}
