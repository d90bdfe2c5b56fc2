use tracing::{trace, warn};

use crate::{validation::eq_folded, Movie};
use super::coll::MovieCollection;

impl MovieCollection {
    /// Returns every movie in insertion order.
    pub fn movies(&self) -> &[Movie] { &self.movies }

    /// Returns the number of movies.
    pub fn count(&self) -> usize { self.movies.len() }

    /// Returns true if the collection holds no movies.
    pub fn is_empty(&self) -> bool { self.movies.is_empty() }

    /// Returns every title in insertion order.
    pub fn titles(&self) -> Vec<&str> {
        self.movies
            .iter()
            .map(|movie| movie.title.as_str())
            .collect()
    }

    /// Returns the first movie whose title equals `title`, ignoring case.
    ///
    /// A missing title is not an error: `None` is returned and a warning is logged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reelbase::MovieCollection;
    ///
    /// # async fn example() -> reelbase::Result<()> {
    /// let movies = MovieCollection::load("/var/lib/reelbase/movies.json").await?;
    /// let a = movies.find_by_title("The Matrix");
    /// let b = movies.find_by_title("the MATRIX");
    /// assert_eq!(a, b);
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_by_title(&self, title: &str) -> Option<&Movie> {
        trace!("Looking up movie '{}'", title);
        let found = self.movies.iter().find(|movie| movie.has_title(title));
        if found.is_none() {
            warn!("Movie '{}' was not found", title);
        }
        found
    }

    /// Returns the movies whose title contains `substring`.
    ///
    /// Unlike every other text lookup this one is case-sensitive: `"Matrix"`
    /// matches "The Matrix" but `"matrix"` does not.
    pub fn find_by_title_substring(&self, substring: &str) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.title.contains(substring))
            .collect()
    }

    /// Returns the movies released in `year`.
    pub fn find_by_year(&self, year: i32) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.year == year)
            .collect()
    }

    /// Returns the movies tagged with `genre`, ignoring case.
    ///
    /// A movie that lists the genre more than once is returned once.
    pub fn find_by_genre(&self, genre: &str) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.has_genre(genre))
            .collect()
    }

    /// Counts the movies directed by `director`, ignoring case.
    pub fn count_by_director(&self, director: &str) -> usize {
        self.movies
            .iter()
            .filter(|movie| movie.has_director(director))
            .count()
    }

    /// Index of the first movie titled `title`, ignoring case.
    pub(crate) fn position_by_title(&self, title: &str) -> Option<usize> {
        self.movies
            .iter()
            .position(|movie| eq_folded(&movie.title, title))
    }
}
