//! Client for the Subsonic REST API.
//!
//! Responses are normalized while they are deserialized: list fields are
//! always lists and identifiers are integers, see [`deserialize`].

pub mod connection;
pub mod deserialize;
pub mod models;
pub mod queries;

pub use connection::{Connection, ConnectionError};
pub use models::CoverArtId;
pub use queries::{AlbumListQuery, AlbumListType, RandomSongsQuery};
