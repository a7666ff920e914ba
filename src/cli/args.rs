// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Sign in with an access token obtained from the backend
    Login {
        /// User name of the account
        #[arg(value_name = "USERNAME")]
        username: String,

        /// Access token for the data service
        #[arg(long, value_name = "TOKEN")]
        token: String,

        /// Storage identity id for object paths
        #[arg(long, value_name = "IDENTITY")]
        identity: String,
    },

    /// Sign out, discarding the persisted session
    Logout,

    /// Fetch and render the notes of the signed-in user
    List {
        /// Output notes as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Create a note, optionally with an image attachment
    Create {
        /// Note name
        #[arg(value_name = "NAME")]
        name: String,

        /// Note description
        #[arg(value_name = "DESCRIPTION")]
        description: String,

        /// Path to a PNG or JPEG image to attach
        #[arg(short, long, value_name = "IMAGE")]
        image: Option<PathBuf>,
    },

    /// Delete a note by id
    Delete {
        /// Note id to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },
}
