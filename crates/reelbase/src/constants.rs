//! Constants shared by the collection loader and writer.

/// Number of spaces used to indent the JSON document on disk.
pub const JSON_INDENT: usize = 4;

/// Extension appended to the collection file name for the temporary file used by atomic writes.
pub const TEMP_FILE_EXTENSION: &str = "tmp";

/// Content written by [`crate::MovieCollection::create`] for a fresh collection.
pub const EMPTY_COLLECTION: &str = "[]";

/// Number of decimal places kept by the average release year.
pub const AVERAGE_YEAR_PRECISION: usize = 2;
