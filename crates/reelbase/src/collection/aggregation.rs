use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{constants::AVERAGE_YEAR_PRECISION, Movie};
use super::coll::MovieCollection;

impl MovieCollection {
    /// Returns the title of the movie with the earliest release year.
    ///
    /// On ties the first movie in insertion order wins. An empty collection
    /// yields `None` and logs a warning.
    pub fn oldest_movie_title(&self) -> Option<&str> {
        let oldest = self
            .movies
            .iter()
            .reduce(|oldest, movie| {
                if movie.year < oldest.year {
                    movie
                }
                else {
                    oldest
                }
            });
        self.title_or_warn(oldest)
    }

    /// Returns the mean release year rounded to two decimal places.
    ///
    /// Rounding works on the exact binary value of the mean and breaks exact
    /// ties to even, so `2000.125` becomes `2000.12`.
    ///
    /// An empty collection yields `0.0` and logs a warning.
    pub fn average_release_year(&self) -> f64 {
        if self.movies.is_empty() {
            warn!("Cannot average release years: the collection is empty");
            return 0.0;
        }

        let total: i64 = self.movies.iter().map(|movie| i64::from(movie.year)).sum();
        let mean = total as f64 / self.movies.len() as f64;
        let average = round_to_precision(mean, AVERAGE_YEAR_PRECISION);
        debug!("Average release year: {}", average);
        average
    }

    /// Returns the title with the most characters.
    ///
    /// On ties the first movie in insertion order wins. An empty collection
    /// yields `None` and logs a warning.
    pub fn longest_title(&self) -> Option<&str> {
        let longest = self
            .movies
            .iter()
            .reduce(|longest, movie| {
                if movie.title_len() > longest.title_len() {
                    movie
                }
                else {
                    longest
                }
            });
        self.title_or_warn(longest)
    }

    /// Returns the titles of the movies released between `start_year` and `end_year`, inclusive.
    ///
    /// An inverted range matches nothing.
    pub fn titles_between_years(&self, start_year: i32, end_year: i32) -> Vec<&str> {
        self.movies
            .iter()
            .filter(|movie| (start_year ..= end_year).contains(&movie.year))
            .map(|movie| movie.title.as_str())
            .collect()
    }

    /// Returns the release year shared by the most movies.
    ///
    /// Movies are scanned in insertion order and a year replaces the current
    /// best only when its count is strictly greater, so on ties the year of
    /// the earliest movie wins. An empty collection yields `None` and logs a
    /// warning.
    pub fn most_common_year(&self) -> Option<i32> {
        let mut counts: HashMap<i32, usize> = HashMap::new();
        for movie in &self.movies {
            let count = counts.entry(movie.year).or_insert(0);
            *count = count.saturating_add(1);
        }

        let mut best: Option<(i32, usize)> = None;
        for movie in &self.movies {
            let count = counts.get(&movie.year).copied().unwrap_or_default();
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((movie.year, count));
            }
        }

        if best.is_none() {
            warn!("Cannot find the most common year: the collection is empty");
        }
        best.map(|(year, _)| year)
    }

    /// Maps an aggregate pick to its title, warning when the collection is empty.
    fn title_or_warn<'a>(&self, movie: Option<&'a Movie>) -> Option<&'a str> {
        if movie.is_none() {
            warn!("No movies in collection {:?}", self.path);
        }
        movie.map(|movie| movie.title.as_str())
    }
}

/// Rounds `value` to `digits` decimal places.
///
/// Works on the exact decimal expansion of the float with ties to even, so
/// the result never depends on the error of scaling by a power of ten.
fn round_to_precision(value: f64, digits: usize) -> f64 {
    format!("{:.*}", digits, value)
        .parse()
        .unwrap_or(value)
}
