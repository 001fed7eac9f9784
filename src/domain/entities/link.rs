//! Link entity representing a short identifier mapping.

/// A mapping from a user-chosen `short_id` to an opaque `target_url`.
///
/// `short_id` is case-sensitive and may contain `/`-separated namespace
/// segments (`yt/video`). `target_url` is stored as given; it is never
/// checked for being a well-formed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub short_id: String,
    pub target_url: String,
}

impl Link {
    pub fn new(short_id: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            short_id: short_id.into(),
            target_url: target_url.into(),
        }
    }

    /// Returns true if the short id groups links under a namespace.
    pub fn is_namespaced(&self) -> bool {
        self.short_id.contains('/')
    }

    /// Namespace part of a namespaced short id (`yt` for `yt/video`).
    pub fn namespace(&self) -> Option<&str> {
        self.short_id.rsplit_once('/').map(|(ns, _)| ns)
    }
}
