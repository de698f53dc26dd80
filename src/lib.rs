//! # pagekit
//!
//! Stateless paged-response helpers for REST API handlers.
//!
//! ## Features
//!
//! - **Pagination links**: `next`/`previous` navigation links for paged
//!   list responses, with offset correction when the true previous page
//!   is shorter than the requested page size
//! - **Request correlation**: per-operation correlation identifiers
//!   read from an explicit request context, generated on demand
//! - **URL-safe tokens**: unpadded URL-safe base64 text codec
//!
//! ## Quick Start
//!
//! ```rust
//! use pagekit::{build_pagination_links, PageWindow, ServiceConfig};
//!
//! fn main() -> pagekit::Result<()> {
//!     let resolver = ServiceConfig::new("https://idp.example.com").resolver()?;
//!
//!     // Handler: 173 matching applications, currently at [20, 30).
//!     let window = PageWindow::from_query(20, 10)?;
//!     let links = build_pagination_links(window, 173, "applications/", &resolver)?;
//!
//!     assert_eq!(
//!         links.next(),
//!         Some("https://idp.example.com/v1/applications/?offset=30&limit=10")
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        API Handler                          │
//! │  PageWindow::from_query()   correlation_id(ctx)   encode()  │
//! └─────────────────────────────┬───────────────────────────────┘
//!                               │
//! ┌────────────┬────────────────┴──────┬────────────┬───────────┐
//! │ Pagination │         URI           │ Correlation│   Codec   │
//! ├────────────┼───────────────────────┼────────────┼───────────┤
//! │ PageWindow │ ResolveUri (seam)     │ Request-   │ URL-safe  │
//! │ PageLinks  │ ServiceUrl (anchored  │ Context +  │ base64,   │
//! │ correction │ at ServiceConfig)     │ UUID v4    │ unpadded  │
//! └────────────┴───────────────────────┴────────────┴───────────┘
//! ```
//!
//! All components are pure and synchronous: no shared mutable state, no
//! I/O, safe to call from any number of threads.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Pagination link construction
pub mod pagination;

/// Absolute URI resolution
pub mod uri;

/// Request correlation identifiers
pub mod correlation;

/// URL-safe base64 text codec
pub mod codec;

/// Service configuration
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ServiceConfig;
pub use correlation::{correlation_id, has_correlation_id, RequestContext, CORRELATION_ID_KEY};
pub use error::{Error, Result};
pub use pagination::{build_pagination_links, LinkRel, PageLinks, PageWindow};
pub use uri::{ResolveUri, ServiceUrl};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
