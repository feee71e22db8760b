pub mod client;
pub mod error;
pub mod types;

mod retry;

pub use client::ResearchClient;
pub use error::ResearchError;
pub use types::SoldListing;
