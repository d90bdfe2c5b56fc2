use clap::{Args, Subcommand};
use reelbase::MovieCollection;
use tracing::{debug, warn};

use crate::commands::{print_line, CollectionOptions};

/// Statistics that can be computed over a collection.
#[derive(Subcommand, Clone)]
pub enum StatsCommands {
    /// Print the title of the movie with the earliest release year.
    Oldest,
    /// Print the mean release year, rounded to two decimal places.
    AverageYear,
    /// Print the longest title.
    Longest,
    /// Print the release year shared by the most movies.
    MostCommonYear,
    /// Print the titles released within a year range (inclusive).
    Between(BetweenArgs),
}

/// Arguments for the between statistic.
#[derive(Args, Clone, Default)]
pub struct BetweenArgs {
    /// First year of the range
    #[arg(long, allow_negative_numbers = true)]
    pub start: i32,
    /// Last year of the range
    #[arg(long, allow_negative_numbers = true)]
    pub end:   i32,
}

impl StatsCommands {
    /// Compute the statistic and render it for stdout.
    ///
    /// Returns `None` when there is nothing to print, i.e. for the title and
    /// year statistics of an empty collection.
    fn render(&self, collection: &MovieCollection) -> reelbase::Result<Option<String>> {
        let output = match self {
            Self::Oldest => collection.oldest_movie_title().map(str::to_owned),
            Self::AverageYear => Some(collection.average_release_year().to_string()),
            Self::Longest => collection.longest_title().map(str::to_owned),
            Self::MostCommonYear => collection.most_common_year().map(|year| year.to_string()),
            Self::Between(args) => {
                if args.start > args.end {
                    warn!(
                        "Start year {} is after end year {}; no movies can match",
                        args.start, args.end
                    );
                }
                let titles = collection.titles_between_years(args.start, args.end);
                debug!("{} movies between {} and {}", titles.len(), args.start, args.end);
                Some(serde_json::to_string_pretty(&titles)?)
            },
        };
        Ok(output)
    }
}

/// Compute and print one statistic.
///
/// Statistics over an empty collection print nothing (or `0` for the
/// average) and log a warning.
///
/// # Arguments
/// * `options` - The collection file and write options.
/// * `command` - The statistic to compute.
///
/// # Returns
/// Returns `Ok(())` on success, or a `ReelbaseError` on failure.
pub async fn run(options: CollectionOptions, command: StatsCommands) -> reelbase::Result<()> {
    let collection = options.open().await?;

    if let Some(output) = command.render(&collection)? {
        print_line(output);
    }
    Ok(())
}
