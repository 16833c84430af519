/// Events published by the feed manager as requests complete.
///
/// Collection updates carry no payload; subscribers read the current
/// snapshot back from the manager, so a late event never delivers data
/// older than what an accessor would return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// The video collection was replaced.
    VideosUpdated,
    /// The category collection was replaced.
    CategoriesUpdated,
    /// A request failed; previously loaded collections were kept.
    FetchFailed(String),
}

/// Severity of a transient user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A short-lived message for the user, shown and then dismissed.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Error,
        }
    }
}
