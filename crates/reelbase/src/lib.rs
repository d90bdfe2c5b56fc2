pub mod collection;
pub mod config;
pub mod constants;
pub mod error;
pub mod movie;
pub mod persistence;
pub mod validation;

pub use collection::MovieCollection;
pub use config::{CollectionConfig, PersistenceMode};
pub use error::{ReelbaseError, Result};
pub use movie::{Movie, MovieUpdate};
pub use persistence::{Mutation, Persistence};
