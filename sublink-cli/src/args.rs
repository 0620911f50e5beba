use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// sublink - manage external subscriptions and node groups on a sublink server
#[derive(Parser, Debug)]
#[command(name = "sublink")]
#[command(version)]
#[command(about = "Command-line client for the sublink subscription API", long_about = None)]
pub struct Cli {
    /// Server URL (e.g., http://127.0.0.1:8000), overrides the config file
    #[arg(short = 's', long = "server")]
    pub server: Option<String>,

    /// Path to a JSON config file (default: <config dir>/sublink/config.json)
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// External subscription sources
    #[command(subcommand)]
    Subs(SubsCommand),
    /// Node groups
    #[command(subcommand)]
    Groups(GroupsCommand),
}

#[derive(Subcommand, Debug)]
pub enum SubsCommand {
    List {
        /// One line per subscription instead of the JSON reply
        #[arg(long)]
        brief: bool,
    },
    Add(SubscriptionArgs),
    Update {
        #[arg(long)]
        id: u64,
        #[command(flatten)]
        fields: SubscriptionArgs,
    },
    Delete {
        #[arg(long)]
        id: u64,
    },
    /// Ask the server to re-fetch a subscription's nodes
    Refresh {
        #[arg(long)]
        id: u64,
    },
}

#[derive(Args, Debug)]
pub struct SubscriptionArgs {
    #[arg(long)]
    pub name: String,

    /// Source list URL
    #[arg(long)]
    pub url: String,

    /// Create the subscription disabled
    #[arg(long)]
    pub disabled: bool,

    /// Seconds between refreshes
    #[arg(long, default_value_t = 3600)]
    pub interval: u64,

    #[arg(long)]
    pub group: Option<String>,

    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum GroupsCommand {
    List,
    Add {
        #[arg(long)]
        name: String,
    },
    Update {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        name: String,
    },
    Delete {
        #[arg(long)]
        id: u64,
    },
    /// Move a node into a group, both given by name
    Set {
        #[arg(long)]
        node: String,
        #[arg(long)]
        group: String,
    },
    /// List the nodes of a group
    Nodes {
        #[arg(long = "group-id")]
        group_id: u64,
    },
}
