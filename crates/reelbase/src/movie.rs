use serde::{Deserialize, Serialize};

use crate::validation::eq_folded;

/// A single movie record as stored in the collection file.
///
/// The field names match the JSON keys one to one, so a record round-trips
/// through `serde_json` without any renaming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Title of the movie, used as a case-insensitive lookup key.
    pub title:    String,
    /// Director of the movie.
    pub director: String,
    /// Release year.
    pub year:     i32,
    /// Genre labels, in the order they were given.
    pub genres:   Vec<String>,
}

impl Movie {
    /// Creates a new movie record.
    pub fn new(title: impl Into<String>, director: impl Into<String>, year: i32, genres: Vec<String>) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            year,
            genres,
        }
    }

    /// Returns true if the title equals `title`, ignoring case.
    pub fn has_title(&self, title: &str) -> bool { eq_folded(&self.title, title) }

    /// Returns true if the director equals `director`, ignoring case.
    pub fn has_director(&self, director: &str) -> bool { eq_folded(&self.director, director) }

    /// Returns true if any of the genres equals `genre`, ignoring case.
    pub fn has_genre(&self, genre: &str) -> bool { self.genres.iter().any(|g| eq_folded(g, genre)) }

    /// Number of characters in the title.
    pub fn title_len(&self) -> usize { self.title.chars().count() }
}

/// A partial update for a [`Movie`].
///
/// Each field left as `None` is omitted and keeps its current value when the
/// update is applied. The title is never part of an update.
///
/// # Example
///
/// ```rust
/// use reelbase::{Movie, MovieUpdate};
///
/// let mut movie = Movie::new("Heat", "Michael Mann", 1995, vec!["Crime".to_string()]);
/// MovieUpdate::new().with_year(1996).apply(&mut movie);
/// assert_eq!(movie.year, 1996);
/// assert_eq!(movie.director, "Michael Mann");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieUpdate {
    /// New director, if provided.
    pub director: Option<String>,
    /// New release year, if provided.
    pub year:     Option<i32>,
    /// New genre list, if provided.
    pub genres:   Option<Vec<String>>,
}

impl MovieUpdate {
    /// Creates an empty update.
    pub const fn new() -> Self {
        Self {
            director: None,
            year:     None,
            genres:   None,
        }
    }

    /// Sets the director.
    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    /// Sets the release year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the genre list.
    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = Some(genres);
        self
    }

    /// Returns true if no field is provided.
    pub const fn is_empty(&self) -> bool { self.director.is_none() && self.year.is_none() && self.genres.is_none() }

    /// Overwrites every provided field on `movie`.
    pub fn apply(&self, movie: &mut Movie) {
        if let Some(director) = &self.director {
            movie.director.clone_from(director);
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(genres) = &self.genres {
            movie.genres.clone_from(genres);
        }
    }
}
