//! Pagination types
//!
//! Value types shared by the link builder and API handlers.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Relation name of a navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkRel {
    /// The page after the current window
    Next,
    /// The page before the current window
    Previous,
}

impl LinkRel {
    /// The literal relation name used in response bodies
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

impl fmt::Display for LinkRel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated paging window over an ordered result set
///
/// Covers the half-open item range `[offset, offset + limit)`. A window
/// can only be constructed through the validating constructors, so a
/// zero limit and negative inputs never reach the link builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    offset: u32,
    limit: u32,
}

impl PageWindow {
    /// Create a window, rejecting a zero limit
    pub fn new(offset: u32, limit: u32) -> Result<Self> {
        if limit == 0 {
            return Err(Error::page_request("limit", "must be greater than zero"));
        }
        Ok(Self { offset, limit })
    }

    /// Internal constructor for windows whose limit is already known to
    /// be non-zero.
    pub(crate) const fn new_unchecked(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// Validate raw query parameters as received by a handler
    ///
    /// Rejects a negative offset, a non-positive limit, and values that
    /// do not fit the wire range. Past this boundary invalid windows
    /// are unrepresentable.
    pub fn from_query(offset: i64, limit: i64) -> Result<Self> {
        if offset < 0 {
            return Err(Error::page_request("offset", "must not be negative"));
        }
        if limit <= 0 {
            return Err(Error::page_request("limit", "must be greater than zero"));
        }
        let offset = u32::try_from(offset)
            .map_err(|_| Error::page_request("offset", "is out of range"))?;
        let limit =
            u32::try_from(limit).map_err(|_| Error::page_request("limit", "is out of range"))?;
        Self::new(offset, limit)
    }

    /// Zero-based index of the first item in the window
    pub fn offset(self) -> u32 {
        self.offset
    }

    /// Maximum number of items in the window
    pub fn limit(self) -> u32 {
        self.limit
    }

    /// Zero-based index one past the last item in the window
    pub fn end(self) -> u64 {
        u64::from(self.offset) + u64::from(self.limit)
    }
}

/// Navigation links keyed by relation
///
/// A relation is present only when the corresponding page exists; there
/// are no `null` placeholders. Serializes as a JSON object mapping the
/// relation literals to absolute URIs:
///
/// ```json
/// {"next": "https://.../users/?offset=20&limit=10",
///  "previous": "https://.../users/?offset=0&limit=10"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageLinks(BTreeMap<LinkRel, String>);

impl PageLinks {
    /// Create an empty link set
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, rel: LinkRel, uri: String) {
        self.0.insert(rel, uri);
    }

    /// Link for a relation, if that page exists
    pub fn get(&self, rel: LinkRel) -> Option<&str> {
        self.0.get(&rel).map(String::as_str)
    }

    /// Link to the next page, if one exists
    pub fn next(&self) -> Option<&str> {
        self.get(LinkRel::Next)
    }

    /// Link to the previous page, if one exists
    pub fn previous(&self) -> Option<&str> {
        self.get(LinkRel::Previous)
    }

    /// True when neither navigation direction exists
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of links present
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over present links in relation order
    pub fn iter(&self) -> impl Iterator<Item = (LinkRel, &str)> {
        self.0.iter().map(|(rel, uri)| (*rel, uri.as_str()))
    }
}
