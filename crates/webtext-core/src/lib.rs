pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod page;
pub mod render;
pub mod url_model;

pub use error::FetchError;
pub use fetch::{fetch, fetch_response, FetchOptions, Response};
pub use url_model::{parse, ParsedUrl};
