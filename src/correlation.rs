//! Request correlation
//!
//! A correlation id ties together the log and trace entries of one
//! logical operation. The surrounding framework owns a per-request
//! [`RequestContext`] and may or may not have populated it; this module
//! reads the well-known slot and falls back to generating a fresh id.

use std::collections::HashMap;
use uuid::Uuid;

/// Context key under which the correlation id is stored
pub const CORRELATION_ID_KEY: &str = "Correlation-ID";

/// Request-scoped key-value store threaded through the call chain
///
/// One instance per request, owned by the handler and passed by
/// reference; never shared across requests.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    entries: HashMap<String, String>,
}

impl RequestContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Store a value under `key`, replacing any existing one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Remove and return the value stored under `key`
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Check whether `key` holds a value
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Store a correlation id under the well-known key
    pub fn set_correlation_id(&mut self, id: impl Into<String>) {
        self.insert(CORRELATION_ID_KEY, id);
    }
}

/// Check whether the context already carries a correlation id
pub fn has_correlation_id(ctx: &RequestContext) -> bool {
    ctx.contains(CORRELATION_ID_KEY)
}

/// Correlation id for the current operation
///
/// Returns the ambient value when the context holds one, otherwise a
/// freshly generated random v4 UUID in canonical textual form. The
/// generated id is not stored back into the context; a caller that
/// wants later lookups to observe it must call
/// [`RequestContext::set_correlation_id`] itself.
pub fn correlation_id(ctx: &RequestContext) -> String {
    match ctx.get(CORRELATION_ID_KEY) {
        Some(id) => id.to_string(),
        None => Uuid::new_v4().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_id_returned_verbatim() {
        let mut ctx = RequestContext::new();
        ctx.set_correlation_id("7e3a2f1c-4b5d-4e6f-8a9b-0c1d2e3f4a5b");

        assert!(has_correlation_id(&ctx));
        assert_eq!(
            correlation_id(&ctx),
            "7e3a2f1c-4b5d-4e6f-8a9b-0c1d2e3f4a5b"
        );
    }

    #[test]
    fn test_generated_id_is_a_valid_uuid() {
        let ctx = RequestContext::new();
        let id = correlation_id(&ctx);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_generated_ids_differ() {
        let ctx = RequestContext::new();
        let first = correlation_id(&ctx);
        let second = correlation_id(&ctx);
        assert_ne!(first, second);
    }

    #[test]
    fn test_generated_id_is_not_persisted() {
        let ctx = RequestContext::new();
        let _ = correlation_id(&ctx);
        assert!(!has_correlation_id(&ctx));
    }

    #[test]
    fn test_presence_check_is_idempotent() {
        let mut ctx = RequestContext::new();
        assert!(!has_correlation_id(&ctx));
        assert!(!has_correlation_id(&ctx));

        ctx.set_correlation_id("abc");
        assert!(has_correlation_id(&ctx));
        assert!(has_correlation_id(&ctx));
    }

    #[test]
    fn test_context_entries() {
        let mut ctx = RequestContext::new();
        ctx.insert("tenant", "carbon.super");

        assert_eq!(ctx.get("tenant"), Some("carbon.super"));
        assert_eq!(ctx.remove("tenant"), Some("carbon.super".to_string()));
        assert!(ctx.get("tenant").is_none());
    }
}
