//! # Backend Module
//!
//! Client side of the API link checker REST contract. The backend owns the
//! list of tracked APIs, their checked state and the Swagger link table; this
//! crate only reads and updates them through three calls:
//!
//! - `GET <base>` - tracked APIs grouped by category
//! - `GET <base>/swagger-links` - `"<METHOD>_<path>"` to Swagger UI fragment
//! - `GET <base>/check?httpMethod=..&path=..&checked=..[&nickname=..]` - status update
//!
//! [`HttpBackend`] talks to a running server with `reqwest`; [`MockBackend`]
//! keeps everything in memory and is what the workflow tests drive.

mod http;
mod mock;

pub use http::HttpBackend;
pub use mock::{MockBackend, MockFailures};

use crate::{
    error::ChecklistError,
    types::{CheckUpdate, Groups, SwaggerLinks},
};

/// The three operations the checklist needs from the checker backend.
///
/// Any failure, transport or status, is reported as a [`ChecklistError`];
/// callers do not distinguish between them.
#[allow(async_fn_in_trait)]
pub trait ChecklistBackend {
    /// Fetches every tracked API grouped by category.
    async fn fetch_groups(&self) -> Result<Groups, ChecklistError>;

    /// Fetches the documentation link table.
    async fn fetch_swagger_links(&self) -> Result<SwaggerLinks, ChecklistError>;

    /// Stores the checked state of one API. The response body is ignored.
    async fn update_check(&self, update: &CheckUpdate) -> Result<(), ChecklistError>;
}
