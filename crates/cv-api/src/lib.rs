//! # cv-api
//!
//! HTTP client for the Convai platform API.
//!
//! - `api` - The [`ConvaiApi`] trait listing every remote operation
//! - `client` - [`ConvaiClient`], the reqwest-backed implementation
//! - `document` - [`QueryDocument`], binding query documents to their endpoints
//!
//! ## Example
//!
//! ```no_run
//! use cv_api::ConvaiClient;
//! use cv_core::config::ClientConfig;
//! use cv_queries::UserQueryBuilder;
//!
//! # async fn run() -> cv_core::CvResult<()> {
//! let client = ConvaiClient::new(ClientConfig::from_env()?)?;
//!
//! let query = UserQueryBuilder::all()
//!     .where_field("plan")?
//!     .equals(["pro"])?
//!     .build();
//!
//! let result = client.submit(&query).await?;
//! println!("{} users", result.count);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod document;

pub use api::ConvaiApi;
pub use client::ConvaiClient;
pub use document::QueryDocument;
