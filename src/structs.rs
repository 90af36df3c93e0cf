use clap::{Parser, Subcommand};
use crate::common::common::parse_key_value;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    #[command(subcommand)]
    pub command: CliCommand
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Connect every node and print its identity and state.
    Status,
    /// Send one API command.
    Api {
        group: String,
        action: String,
        /// Node name (or URI) to send to; defaults to any node.
        #[arg(long, conflicts_with = "all")]
        node: Option<String>,
        /// Send to every node and print every reply.
        #[arg(long)]
        all: bool,
        /// Command attribute, as key=value.
        #[arg(long = "attr", value_parser = parse_key_value)]
        attributes: Vec<(String, String)>,
        /// Command parameter, as name=value.
        #[arg(long = "param", value_parser = parse_key_value)]
        parameters: Vec<(String, String)>,
        /// Module the serving node must provide.
        #[arg(long = "module")]
        modules: Vec<String>
    },
    /// Subscribe to an event type and print events until interrupted.
    Watch {
        event_type: String,
        group: String,
        action: String,
        #[arg(long)]
        object_id: Option<u64>,
        #[arg(long)]
        node: Option<String>,
        /// Command attribute of the embedded command, as key=value.
        #[arg(long = "attr", value_parser = parse_key_value)]
        attributes: Vec<(String, String)>
    }
}
