//! # LeadNav SDK
//!
//! Typed client for the LeadNav scraper API.
//!
//! The SDK provides:
//!
//! * [`SalesNavClient`] — authenticated access to the cookie store and
//!   the scraper control endpoints.
//! * [`SdkError`] — unified error type for all SDK operations.
//!
//! Wire types from [`leadnav_models`] are re-exported for convenience.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use leadnav_sdk::SalesNavClient;
//!
//! # async fn run() -> Result<(), leadnav_sdk::SdkError> {
//! let client = SalesNavClient::new("http://localhost:3001", "my-bearer-token");
//!
//! client.save_cookie("li_at=AQEDARe5...").await?;
//! let stored = client.get_cookie().await?;
//! assert!(stored.is_some());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

pub use client::SalesNavClient;
pub use error::SdkError;

pub use leadnav_models::{ApiResponse, CookieData, CookieSaved, UserId};
