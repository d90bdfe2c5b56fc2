use tracing::{debug, trace};

use crate::{Movie, MovieUpdate, Mutation, ReelbaseError, Result};
use super::coll::MovieCollection;

impl MovieCollection {
    /// Appends a movie to the end of the collection and rewrites the file.
    ///
    /// No duplicate check is performed: a movie whose title is already present
    /// is stored again and lookups keep returning the first one.
    ///
    /// # Returns
    ///
    /// Returns the persistence outcome of the write-back. In strict mode a
    /// failed write removes the movie again and returns
    /// `ReelbaseError::Persistence`.
    pub async fn add(&mut self, movie: Movie) -> Result<Mutation<()>> {
        trace!("Adding movie '{}'", movie.title);
        self.movies.push(movie);

        match self.persist().await {
            Ok(persistence) => {
                debug!(
                    "Movie added, collection now holds {} movies ({})",
                    self.movies.len(),
                    persistence
                );
                Ok(Mutation::new((), persistence))
            },
            Err(e) => {
                self.movies.pop();
                Err(e)
            },
        }
    }

    /// Builds a movie from its fields and appends it. See [`MovieCollection::add`].
    pub async fn add_movie(
        &mut self,
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
        genres: Vec<String>,
    ) -> Result<Mutation<()>> {
        self.add(Movie::new(title, director, year, genres)).await
    }

    /// Removes the first movie whose title matches `title`, ignoring case.
    ///
    /// # Returns
    ///
    /// Returns the removed movie, or `ReelbaseError::MovieNotFound` if no
    /// title matches.
    pub async fn remove(&mut self, title: &str) -> Result<Mutation<Movie>> {
        trace!("Removing movie '{}'", title);
        let index = self.require_position(title)?;
        let removed = self.movies.remove(index);

        match self.persist().await {
            Ok(persistence) => {
                debug!("Movie '{}' removed ({})", removed.title, persistence);
                Ok(Mutation::new(removed, persistence))
            },
            Err(e) => {
                self.movies.insert(index, removed);
                Err(e)
            },
        }
    }

    /// Applies `update` to the first movie whose title matches `title`, ignoring case.
    ///
    /// Only the fields set on the update are overwritten; the title itself is
    /// never changed. The file is rewritten even if the update is empty.
    ///
    /// # Returns
    ///
    /// Returns a copy of the updated movie, or `ReelbaseError::MovieNotFound`
    /// if no title matches.
    pub async fn update(&mut self, title: &str, update: MovieUpdate) -> Result<Mutation<Movie>> {
        trace!("Updating movie '{}' with {:?}", title, update);
        let index = self.require_position(title)?;
        let Some(movie) = self.movies.get_mut(index)
        else {
            return Err(not_found(title));
        };
        let previous = movie.clone();
        update.apply(movie);
        let updated = movie.clone();

        match self.persist().await {
            Ok(persistence) => {
                debug!("Movie '{}' updated ({})", updated.title, persistence);
                Ok(Mutation::new(updated, persistence))
            },
            Err(e) => {
                if let Some(movie) = self.movies.get_mut(index) {
                    *movie = previous;
                }
                Err(e)
            },
        }
    }

    /// Index of the first movie titled `title`, or `MovieNotFound`.
    fn require_position(&self, title: &str) -> Result<usize> {
        self.position_by_title(title)
            .ok_or_else(|| not_found(title))
    }
}

/// Builds the error returned when a mutation target is missing.
fn not_found(title: &str) -> ReelbaseError {
    ReelbaseError::MovieNotFound {
        title: title.to_owned(),
    }
}
