use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "tournament-hub screens and records")]
pub struct Cli {
    /// Directory of JSON record files (defaults to the bundled mock data)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Upcoming tournaments and recent results
    Home,
    /// Players ranked by points
    Rankings,
    /// Tournament listing
    Tournaments,
    /// Registered players of a tournament
    Tournament {
        id: i64,
    },
    /// Sign up for a tournament
    Join {
        id: i64,
    },
    /// Current and past live streams
    Live,
    /// Add a live stream for a match
    GoLive {
        /// Tournament name (defaults to the first offered one)
        #[arg(short, long)]
        tournament: Option<String>,
        #[arg(long)]
        player1: String,
        #[arg(long)]
        player2: String,
        /// Stream URL
        #[arg(short, long)]
        url: String,
    },
    /// Profile and tournament points history
    Profile,
    /// Change the profile's first and last name
    EditProfile {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
    /// Print a M/D/YYYY date in long form
    FormatDate {
        raw: String,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}
