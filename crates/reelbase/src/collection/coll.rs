use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::Serialize as _;
use serde_json::ser::{PrettyFormatter, Serializer};
use tokio::{fs as tokio_fs, io::AsyncWriteExt as _};
use tracing::{debug, error, trace, warn};

use crate::{
    constants::{EMPTY_COLLECTION, JSON_INDENT, TEMP_FILE_EXTENSION},
    validation::{parse_records, validate_collection_path},
    CollectionConfig,
    Movie,
    Persistence,
    PersistenceMode,
    ReelbaseError,
    Result,
};

/// A collection of movies mirrored to a single JSON file.
///
/// The whole file is read into memory when the collection is loaded. Every
/// mutation rewrites the whole file before it returns, and every query is a
/// linear scan over the in-memory records in insertion order.
///
/// # Structure
///
/// The backing file holds a JSON array of objects, each with a `title`,
/// `director`, `year` and `genres` key, written with a four-space indent.
///
/// # Concurrency
///
/// Mutations take `&mut self`, so a single value is never mutated
/// concurrently. Nothing guards the file against other processes: two
/// processes working on the same path will overwrite each other.
///
/// # Example
///
/// ```rust
/// use reelbase::{MovieCollection, MovieUpdate};
///
/// # async fn example() -> reelbase::Result<()> {
/// let mut movies = MovieCollection::load("/var/lib/reelbase/movies.json").await?;
///
/// movies
///     .add_movie("Heat", "Michael Mann", 1995, vec!["Crime".to_string()])
///     .await?;
/// movies
///     .update("heat", MovieUpdate::new().with_year(1996))
///     .await?;
///
/// assert_eq!(movies.find_by_title("HEAT").map(|m| m.year), Some(1996));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
#[allow(
    clippy::field_scoped_visibility_modifiers,
    reason = "fields need to be pub(crate) for internal access"
)]
pub struct MovieCollection {
    /// Absolute path of the backing JSON file.
    pub(crate) path:          PathBuf,
    /// The records, in insertion order.
    pub(crate) movies:        Vec<Movie>,
    /// Collection configuration.
    pub(crate) config:        CollectionConfig,
    /// When the records were last read from disk.
    pub(crate) loaded_at:     DateTime<Utc>,
    /// When the records were last written to disk, if ever by this value.
    pub(crate) last_saved_at: Option<DateTime<Utc>>,
}

impl MovieCollection {
    /// Loads a collection from an existing JSON file with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - Absolute path of the collection file.
    ///
    /// # Returns
    ///
    /// - `ReelbaseError::InvalidPath` if `path` is not absolute
    /// - `ReelbaseError::FileNotFound` if the file does not exist
    /// - `ReelbaseError::Json`, `MalformedCollection` or `InvalidRecord` if the content is not an
    ///   array of movies
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_config(path, CollectionConfig::default()).await
    }

    /// Loads a collection from an existing JSON file.
    ///
    /// See [`MovieCollection::load`] for the error cases.
    pub async fn load_with_config(path: impl AsRef<Path>, config: CollectionConfig) -> Result<Self> {
        let path = path.as_ref();
        trace!("Loading movie collection from {:?}", path);
        validate_collection_path(path)?;

        let movies = read_records(path).await?;
        debug!("Loaded {} movies from {:?}", movies.len(), path);

        Ok(Self {
            path: path.to_path_buf(),
            movies,
            config,
            loaded_at: Utc::now(),
            last_saved_at: None,
        })
    }

    /// Creates a new, empty collection file and returns the collection for it.
    ///
    /// # Returns
    ///
    /// - `ReelbaseError::InvalidPath` if `path` is not absolute
    /// - `ReelbaseError::AlreadyExists` if a file is already present at `path`
    pub async fn create(path: impl AsRef<Path>) -> Result<Self> {
        Self::create_with_config(path, CollectionConfig::default()).await
    }

    /// Creates a new, empty collection file with the given configuration.
    ///
    /// See [`MovieCollection::create`] for the error cases.
    pub async fn create_with_config(path: impl AsRef<Path>, config: CollectionConfig) -> Result<Self> {
        let path = path.as_ref();
        trace!("Creating movie collection at {:?}", path);
        validate_collection_path(path)?;

        let mut file = tokio_fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
            .map_err(|e| {
                if e.kind() == ErrorKind::AlreadyExists {
                    ReelbaseError::AlreadyExists {
                        path: path.to_path_buf(),
                    }
                }
                else {
                    error!("Failed to create collection file {:?}: {}", path, e);
                    ReelbaseError::Io {
                        source: e,
                    }
                }
            })?;
        file.write_all(EMPTY_COLLECTION.as_bytes()).await?;
        file.flush().await?;
        debug!("Created empty movie collection at {:?}", path);

        let now = Utc::now();
        Ok(Self {
            path: path.to_path_buf(),
            movies: Vec::new(),
            config,
            loaded_at: now,
            last_saved_at: Some(now),
        })
    }

    /// Re-reads the backing file, replacing the in-memory records.
    ///
    /// The records are validated the same way as in [`MovieCollection::load`];
    /// on error the current records are kept.
    pub async fn reload(&mut self) -> Result<()> {
        trace!("Reloading movie collection from {:?}", self.path);
        self.movies = read_records(&self.path).await?;
        self.loaded_at = Utc::now();
        debug!(
            "Reloaded {} movies from {:?}",
            self.movies.len(),
            self.path
        );
        Ok(())
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path { &self.path }

    /// Returns the collection configuration.
    pub const fn config(&self) -> &CollectionConfig { &self.config }

    /// Returns when the records were last read from disk.
    pub const fn loaded_at(&self) -> DateTime<Utc> { self.loaded_at }

    /// Returns when this value last wrote the records to disk, if it has.
    pub const fn last_saved_at(&self) -> Option<DateTime<Utc>> { self.last_saved_at }

    /// Writes the whole collection to the backing file.
    ///
    /// The records are serialized as a JSON array with a four-space indent.
    /// With atomic writes enabled the document goes to a sibling temporary
    /// file first, which is then renamed over the collection file.
    ///
    /// Mutations call this automatically; it is public for callers that
    /// want to force a rewrite, e.g. after the file was edited externally.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` on success, or `ReelbaseError::Persistence` if the
    /// file could not be written.
    pub async fn save(&mut self) -> Result<()> {
        self.write_back().await.map_err(|e| {
            error!("Failed to write collection to {:?}: {}", self.path, e);
            ReelbaseError::Persistence {
                path:   self.path.clone(),
                source: e,
            }
        })
    }

    /// Saves after a mutation, applying the configured persistence mode.
    ///
    /// In `Warn` mode a failed write is downgraded to
    /// `Persistence::InMemoryOnly`. In `Strict` mode it is returned as an
    /// error and the caller must roll its change back.
    pub(crate) async fn persist(&mut self) -> Result<Persistence> {
        let Err(e) = self.write_back().await
        else {
            return Ok(Persistence::Persisted);
        };

        match self.config.persistence_mode {
            PersistenceMode::Warn => {
                warn!(
                    "Change to {:?} is only held in memory: {}",
                    self.path, e
                );
                Ok(Persistence::InMemoryOnly {
                    reason: e.to_string(),
                })
            },
            PersistenceMode::Strict => {
                error!("Failed to write collection to {:?}: {}", self.path, e);
                Err(ReelbaseError::Persistence {
                    path:   self.path.clone(),
                    source: e,
                })
            },
        }
    }

    /// Writes the records and records the save time.
    async fn write_back(&mut self) -> std::io::Result<()> {
        trace!(
            "Saving {} movies to {:?}",
            self.movies.len(),
            self.path
        );
        self.write_document().await?;
        self.last_saved_at = Some(Utc::now());
        debug!("Collection saved to {:?}", self.path);
        Ok(())
    }

    /// Serializes the records and writes them out.
    async fn write_document(&self) -> std::io::Result<()> {
        let indent = b" ".repeat(JSON_INDENT);
        let mut buffer = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(&indent));
        self.movies.serialize(&mut serializer)?;

        if !self.config.atomic_writes {
            return tokio_fs::write(&self.path, &buffer).await;
        }

        let temp_path = self.temp_path();
        tokio_fs::write(&temp_path, &buffer).await?;
        if let Err(e) = tokio_fs::rename(&temp_path, &self.path).await {
            if let Err(cleanup) = tokio_fs::remove_file(&temp_path).await {
                debug!(
                    "Could not remove temporary file {:?}: {}",
                    temp_path, cleanup
                );
            }
            return Err(e);
        }
        Ok(())
    }

    /// Path of the temporary file used by atomic writes, next to the collection file.
    pub(crate) fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".");
        file_name.push(TEMP_FILE_EXTENSION);
        self.path.with_file_name(file_name)
    }
}

/// Reads and validates the records of a collection file.
async fn read_records(path: &Path) -> Result<Vec<Movie>> {
    let content = tokio_fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ReelbaseError::FileNotFound {
                path: path.to_path_buf(),
            }
        }
        else {
            error!("Failed to read collection file {:?}: {}", path, e);
            ReelbaseError::Io {
                source: e,
            }
        }
    })?;
    parse_records(&content)
}
