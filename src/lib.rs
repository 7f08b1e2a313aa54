pub mod error;
pub mod maven;
pub mod search;
pub mod util;

pub use error::{InvalidSearchResult, SearchError};
