//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::InputSource;
use crate::domain::IslandSearch;

/// Level-order traversal, digit-chain addition and island counting
#[derive(Parser, Debug)]
#[command(name = "nodewalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project directory holding .nodewalk.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a binary tree level by level
    Levels {
        /// Tree literal, e.g. "[3,9,20,null,null,15,7]", or @FILE
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        tree: Option<InputSource>,

        /// Read the tree literal from a file
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,

        /// Draw the tree before its levels
        #[arg(short = 't', long = "tree")]
        draw: bool,
    },

    /// Add two digit chains (least significant digit first)
    Add {
        /// First operand, e.g. "[2,4,3]", "null" or @FILE
        left: InputSource,

        /// Second operand
        right: InputSource,

        /// Operands are conventional decimals (most significant digit first)
        #[arg(short, long)]
        numbers: bool,
    },

    /// Count islands of 1s in a 0/1 grid
    Islands {
        /// Grid literal with rows separated by ';' or newlines, or @FILE
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        grid: Option<InputSource>,

        /// Read the grid from a file
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,

        /// Flood fill: depth-first or breadth-first (default from config)
        #[arg(short, long)]
        search: Option<IslandSearch>,

        /// Also print the size of every island
        #[arg(long)]
        sizes: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show config file locations
    Path,
    /// Write a commented template to the global config location
    Init,
    /// Print the config template
    Template,
}
