//! Helper functions for presentation collaborators

mod url;

pub use url::*;
