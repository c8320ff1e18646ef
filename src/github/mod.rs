pub mod api;
pub mod client;
pub mod paginator;

pub use api::GitHubApi;
pub use client::GitHubClient;
pub use paginator::Paginator;
