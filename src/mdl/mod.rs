//! Models

use time::OffsetDateTime;

/// Feed source
#[derive(Debug, Clone)]
pub struct FeedSource {
    /// Name
    pub name: Option<String>,
    /// Feed URL
    pub url: Option<String>,
    /// Category
    pub category: Option<String>,
    /// Creation time
    pub created_at: OffsetDateTime,
    /// Last update time
    pub updated_at: OffsetDateTime,
}

/// New feed source
///
/// No field is validated: empty or absent values are persisted as-is.
#[derive(Debug, Clone, Default)]
pub struct NewFeedSource {
    /// Name
    pub name: Option<String>,
    /// Feed URL
    pub url: Option<String>,
    /// Category
    pub category: Option<String>,
}
