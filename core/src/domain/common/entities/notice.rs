use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient, user-facing notification attached to a service result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// A value that is always produced, possibly degraded, together with the
/// notices the client should surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolved<T> {
    pub data: T,
    pub notices: Vec<Notice>,
}

impl<T> Resolved<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data,
            notices: Vec::new(),
        }
    }

    pub fn with_notice(data: T, notice: Notice) -> Self {
        Self {
            data,
            notices: vec![notice],
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.notices
            .iter()
            .any(|notice| notice.level == NoticeLevel::Error)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            data: f(self.data),
            notices: self.notices,
        }
    }
}
