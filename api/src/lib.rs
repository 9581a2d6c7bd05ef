//! # API crate — client for the HealthPlus clinic REST service
//!
//! Everything the front-end needs to talk to the remote service lives here:
//! the wire models, the session credential and its validation seam, the
//! HTTP client, and the error taxonomy. No UI concerns.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient` — GET/DELETE against `/emails`, bearer-token auth |
//! | [`error`] | `FetchError` / `DeleteError` taxonomies |
//! | [`models`] | `EmailRecord` and its declared displayable fields |
//! | [`session`] | `AccessToken`, `Session`, token validation |

pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use client::{ApiClient, DeleteOutcome};
pub use error::{DeleteError, FetchError};
pub use models::EmailRecord;
pub use session::{AccessToken, Session, TokenValidator};
