//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pinlog")]
#[command(about = "Log activities pinned to map points", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Keep entries in memory for this invocation only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new log
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Map center used when no position is available (LAT,LNG)
        #[arg(long, allow_hyphen_values = true)]
        home: Option<String>,
    },

    /// Log an activity at a map point
    Add {
        /// Entry kind (distance-based, elevation-based)
        #[arg(short, long, default_value = "distance-based")]
        kind: String,

        /// Distance in km
        #[arg(short, long, allow_hyphen_values = true)]
        distance: String,

        /// Duration in minutes
        #[arg(short = 't', long, allow_hyphen_values = true)]
        duration: String,

        /// Cadence (steps/min) for distance-based, elevation gain (m) for elevation-based
        #[arg(short, long, allow_hyphen_values = true)]
        metric: String,

        /// Map point (LAT,LNG)
        #[arg(long, allow_hyphen_values = true)]
        at: String,
    },

    /// List logged entries
    List {
        /// Also place map markers
        #[arg(long)]
        markers: bool,
    },

    /// Center the map on an entry
    Show {
        /// Entry id (see 'pinlog list')
        id: String,
    },

    /// Erase every persisted entry
    #[command(hide = true)]
    Clear,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
