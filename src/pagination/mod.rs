//! Pagination link construction
//!
//! Builds the `next`/`previous` navigation links embedded in paged list
//! responses.
//!
//! # Overview
//!
//! An API handler receives a validated [`PageWindow`] and the total
//! result count from its search collaborator, then calls
//! [`build_pagination_links`] to obtain a [`PageLinks`] map for the
//! response body. A link is present only when the page it points at
//! actually exists; the previous window is corrected so its offset is
//! always a valid page start inside the result set.

mod links;
mod types;

pub use links::build_pagination_links;
pub use types::{LinkRel, PageLinks, PageWindow};
