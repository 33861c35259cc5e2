pub mod datastore;
pub mod youtube_api;
