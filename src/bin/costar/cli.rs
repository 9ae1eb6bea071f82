use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI для costar
#[derive(Parser, Debug)]
#[command(
    name = "costar",
    version,
    about = "Shortest co-star chains over actordata/moviedata",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Shortest chain of shared films between two actors
    ///
    /// Пример:
    ///   costar path "Kevin Bacon" "Tom Hanks" --data ./data
    Path {
        start: String,
        end: String,
        /// Directory with actordata/moviedata (overrides COSTAR_DATA_DIR)
        #[arg(long)]
        data: Option<PathBuf>,
        /// Give up on chains longer than this many films
        #[arg(long)]
        max_hops: Option<usize>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the films an actor appeared in
    Credits {
        actor: String,
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the cast of a film
    Cast {
        title: String,
        year: u16,
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print record counts and buffer sizes
    Status {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Decode every record and cross-reference; exit 1 on any fault
    Doctor {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}
