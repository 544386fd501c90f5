use std::path::PathBuf;

use clap::Parser;

use super::logging::LogDestination;

/// Drive the selection plugin controller against a scripted host session.
#[derive(Debug, Parser)]
#[command(name = "plugin-sim", version, about)]
pub struct Cli {
    /// RON file listing the host and UI events to replay.
    pub script: PathBuf,

    /// Menu command the plugin is launched with (e.g. openPlugin, quickAction).
    #[arg(long)]
    pub command: Option<String>,

    /// RON controller configuration; defaults apply when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where diagnostic records go.
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log: LogDestination,
}
