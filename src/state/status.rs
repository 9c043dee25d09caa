#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Severity of an inline status message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl StatusLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusLevel::Info => "status-line--info",
            StatusLevel::Success => "status-line--success",
            StatusLevel::Error => "status-line--error",
        }
    }
}

/// An inline message shown under a form or in the health area.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Error,
        }
    }

    pub fn css_class(&self) -> &'static str {
        self.level.css_class()
    }
}
