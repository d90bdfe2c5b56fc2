use std::{fmt::Display, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use reelbase::{CollectionConfig, MovieCollection, PersistenceMode, ReelbaseError};
use serde::Serialize;
use tracing::{debug, warn};

/// Add command module.
pub mod add;
/// Count command module.
pub mod count;
/// Get command module.
pub mod get;
/// Info command module.
pub mod info;
/// Init command module.
pub mod init;
/// List command module.
pub mod list;
/// Remove command module.
pub mod remove;
/// Search command module.
pub mod search;
/// Stats command module.
pub mod stats;
/// Update command module.
pub mod update;

/// The main CLI structure for Reelbase.
///
/// Every command works on one collection file, selected with `--file`.
///
/// # Examples
///
/// Create an empty collection:
/// ```bash
/// reelbase --file movies.json init
/// ```
///
/// Add a movie:
/// ```bash
/// reelbase --file movies.json add --title Heat --director "Michael Mann" --year 1995 --genre Crime
/// ```
#[derive(Parser)]
#[command(name = "reelbase")]
#[command(about = "Manage a movie collection stored in a JSON file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Collection file and write options
    #[command(flatten)]
    pub collection: CollectionOptions,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (can be used multiple times: -v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Options selecting the collection file and how it is written.
#[derive(Args, Clone, Debug, Default)]
pub struct CollectionOptions {
    /// Path to the collection JSON file (relative paths are resolved against the current
    /// directory)
    #[arg(short, long, global = true, env = "REELBASE_FILE")]
    pub file: Option<PathBuf>,

    /// Fail and roll back a change when the file cannot be written, instead of keeping it in
    /// memory with a warning
    #[arg(long, global = true)]
    pub strict: bool,

    /// Write the file in place instead of through a temporary file and rename
    #[arg(long, global = true)]
    pub no_atomic: bool,
}

impl CollectionOptions {
    /// Resolve the collection file to an absolute path.
    pub fn resolve_path(&self) -> reelbase::Result<PathBuf> {
        let Some(file) = &self.file
        else {
            return Err(ReelbaseError::ConfigError {
                message: "no collection file given (use --file or REELBASE_FILE)".to_owned(),
            });
        };
        let path = std::path::absolute(file)?;
        debug!("Using collection file {:?}", path);
        Ok(path)
    }

    /// Convert the CLI flags to a collection configuration.
    pub fn to_config(&self) -> CollectionConfig {
        let mode = if self.strict {
            PersistenceMode::Strict
        }
        else {
            PersistenceMode::Warn
        };
        CollectionConfig::default()
            .with_persistence_mode(mode)
            .with_atomic_writes(!self.no_atomic)
    }

    /// Load the selected collection.
    pub async fn open(&self) -> reelbase::Result<MovieCollection> {
        MovieCollection::load_with_config(self.resolve_path()?, self.to_config()).await
    }
}

/// Enumeration of all available CLI commands.
///
/// Each variant represents a different operation on the movie collection.
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new, empty collection file.
    Init(init::InitArgs),
    /// Append a movie to the collection.
    Add(add::AddArgs),
    /// Remove the first movie with the given title.
    ///
    /// The removed movie is printed to stdout as JSON.
    Remove(remove::RemoveArgs),
    /// Change the director, year or genres of a movie.
    ///
    /// Fields that are not given keep their value. The updated movie is printed to stdout as
    /// JSON.
    Update(update::UpdateArgs),
    /// Print the movie with the given title.
    Get(get::GetArgs),
    /// Print every movie, or only the titles.
    List(list::ListArgs),
    /// Count the movies, optionally only those of one director.
    Count(count::CountArgs),
    /// Find movies by title substring, year or genre.
    Search(search::SearchArgs),
    /// Aggregate statistics over the collection.
    #[command(subcommand)]
    Stats(stats::StatsCommands),
    /// Show information about the collection file.
    Info,
}

/// Execute the specified CLI command.
///
/// This function dispatches to the appropriate command handler based on the
/// provided command variant, delegating the actual work to isolated modules.
///
/// # Arguments
/// * `cli` - The parsed CLI arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or a `ReelbaseError` on failure.
pub async fn run_command(cli: Cli) -> reelbase::Result<()> {
    let options = cli.collection;
    match cli.command {
        Commands::Init(args) => init::run(options, args).await,
        Commands::Add(args) => add::run(options, args).await,
        Commands::Remove(args) => remove::run(options, args).await,
        Commands::Update(args) => update::run(options, args).await,
        Commands::Get(args) => get::run(options, args).await,
        Commands::List(args) => list::run(options, args).await,
        Commands::Count(args) => count::run(options, args).await,
        Commands::Search(args) => search::run(options, args).await,
        Commands::Stats(command) => stats::run(options, command).await,
        Commands::Info => info::run(options).await,
    }
}

/// Print a value to stdout as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> reelbase::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    print_line(json);
    Ok(())
}

/// Print a single line to stdout.
pub fn print_line(line: impl Display) {
    #[allow(clippy::print_stdout, reason = "CLI output")]
    {
        println!("{}", line);
    }
}

/// Warn when a change could not be written to the collection file.
pub fn report_persistence(persistence: &reelbase::Persistence) {
    if !persistence.is_persisted() {
        warn!("The collection file was not updated: {}", persistence);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    /// Test CLI command parsing.
    ///
    /// This test verifies that the CLI correctly parses various commands
    /// and their arguments using clap's testing utilities.
    #[test]
    fn test_cli_parsing() {
        let cli_parsed = Cli::try_parse_from(["test", "--file", "/tmp/movies.json", "init"]).unwrap();
        assert!(matches!(cli_parsed.command, Commands::Init(_)));
        assert_eq!(
            cli_parsed.collection.file,
            Some(PathBuf::from("/tmp/movies.json"))
        );

        let cli_parsed = Cli::try_parse_from([
            "test",
            "add",
            "--title",
            "Heat",
            "--director",
            "Michael Mann",
            "--year",
            "1995",
            "--genre",
            "Crime",
            "--genre",
            "Thriller",
            "--file",
            "movies.json",
        ])
        .unwrap();
        match cli_parsed.command {
            Commands::Add(args) => {
                assert_eq!(args.title, "Heat");
                assert_eq!(args.director, "Michael Mann");
                assert_eq!(args.year, 1995);
                assert_eq!(args.genres, vec!["Crime", "Thriller"]);
            },
            _ => panic!("Expected Add command"),
        }

        let cli_parsed = Cli::try_parse_from([
            "test",
            "-f",
            "movies.json",
            "stats",
            "between",
            "--start",
            "1990",
            "--end",
            "1999",
        ])
        .unwrap();
        match cli_parsed.command {
            Commands::Stats(stats::StatsCommands::Between(args)) => {
                assert_eq!(args.start, 1990);
                assert_eq!(args.end, 1999);
            },
            _ => panic!("Expected Stats Between command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli_parsed = Cli::try_parse_from([
            "test", "-vv", "--json", "info", "--strict", "--no-atomic", "-f", "m.json",
        ])
        .unwrap();
        assert_eq!(cli_parsed.verbose, 2);
        assert!(cli_parsed.json);
        assert!(cli_parsed.collection.strict);
        assert!(cli_parsed.collection.no_atomic);
        assert!(matches!(cli_parsed.command, Commands::Info));
    }

    #[test]
    fn test_search_requires_one_criterion() {
        assert!(Cli::try_parse_from(["test", "-f", "m.json", "search"]).is_err());
        assert!(Cli::try_parse_from(["test", "-f", "m.json", "search", "--year", "1999", "--genre", "Drama"]).is_err());
        assert!(Cli::try_parse_from(["test", "-f", "m.json", "search", "--genre", "Drama"]).is_ok());
    }

    #[test]
    fn test_to_config() {
        let options = CollectionOptions::default();
        assert_eq!(options.to_config(), CollectionConfig::default());

        let options = CollectionOptions {
            file:      None,
            strict:    true,
            no_atomic: true,
        };
        let config = options.to_config();
        assert_eq!(config.persistence_mode, PersistenceMode::Strict);
        assert!(!config.atomic_writes);
    }

    #[test]
    fn test_resolve_path_makes_relative_paths_absolute() {
        let options = CollectionOptions {
            file: Some(PathBuf::from("movies.json")),
            ..CollectionOptions::default()
        };
        let path = options.resolve_path().unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("movies.json"));
    }

    #[test]
    fn test_resolve_path_requires_file() {
        let result = CollectionOptions::default().resolve_path();
        assert!(matches!(
            result,
            Err(ReelbaseError::ConfigError { .. })
        ));
    }
}
