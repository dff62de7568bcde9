pub mod client;
pub mod feed;
pub mod query;

pub use client::ArxivClient;
pub use query::SearchParams;

pub mod prelude {
    pub use super::{ArxivClient, SearchParams};
    pub use ap_core::{Article, Error, Result};
}
