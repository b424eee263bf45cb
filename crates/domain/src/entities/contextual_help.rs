//! Contextual help payload shown and spoken by the help dialog

use serde::{Deserialize, Serialize};

/// Title plus ordered lines of help content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextualHelp {
    /// Dialog title
    pub title: String,
    /// Lines in display and speaking order
    pub content: Vec<String>,
}

impl ContextualHelp {
    /// Create a help payload
    #[must_use]
    pub fn new(title: impl Into<String>, content: Vec<String>) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }

    /// Join the content into one spoken-ready string
    #[must_use]
    pub fn to_speech(&self) -> String {
        self.content.join(" ")
    }

    /// Check if there is no content
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
