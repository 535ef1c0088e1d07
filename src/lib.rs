//! Search4Faces - client for the Search4Faces face search API
//!
//! Uploads (or forwards) a photo, lets the service detect the faces on it and
//! returns the social network profiles whose photos match the first face.
//! Documentation of the remote API: <https://search4faces.com/api.html>
//!
//! Two clients share one request pipeline: [`SearchClient`] blocks the
//! calling thread, [`AsyncSearchClient`] awaits every round trip.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::config::{ClientConfig, Settings};
pub use crate::error::{SearchError, SearchResult};
pub use crate::models::{ImageInput, MatchedPerson, SearchOptions, Source};
pub use crate::services::{AsyncSearchClient, SearchClient, SearchCore, Transport};
