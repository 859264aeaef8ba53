use serde::{Deserialize, Serialize};

use crate::error::{validate_comment_body, ValidationError};

// ============================================================================
// Entry Types
// ============================================================================

/// A diary entry as listed or shown by the API.
///
/// `creation_date` and `creation_time` are kept as the strings the API sends
/// (`YYYY-MM-DD` and `HH:MM:SS`); they are parsed when displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub creation_date: String,
    pub creation_time: String,
}

impl DiaryEntry {
    /// Client-side route of the entry's detail page.
    pub fn detail_path(&self) -> String {
        entry_detail_path(self.id)
    }

    /// API path of the entry, relative to the API base.
    pub fn api_path(&self) -> String {
        entry_api_path(self.id)
    }
}

pub fn entry_detail_path(id: i32) -> String {
    format!("/entry/{}", id)
}

pub fn entry_api_path(id: i32) -> String {
    format!("/entries/{}", id)
}

pub fn entry_comments_api_path(id: i32) -> String {
    format!("/entries/{}/comments", id)
}

/// Entry with all of its comments, as returned by `GET /entries/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WholeDiaryEntry {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub creation_date: String,
    pub creation_time: String,
    #[serde(default)]
    pub comments: Vec<DiaryComment>,
}

impl WholeDiaryEntry {
    pub fn summary(&self) -> DiaryEntry {
        DiaryEntry {
            id: self.id,
            title: self.title.clone(),
            body: self.body.clone(),
            creation_date: self.creation_date.clone(),
            creation_time: self.creation_time.clone(),
        }
    }
}

/// Entry with its number of comments, as returned by `GET /entries/all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingPageDiaryEntry {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub creation_date: String,
    pub creation_time: String,
    pub comments_count: i32,
}

impl LandingPageDiaryEntry {
    pub fn summary(&self) -> DiaryEntry {
        DiaryEntry {
            id: self.id,
            title: self.title.clone(),
            body: self.body.clone(),
            creation_date: self.creation_date.clone(),
            creation_time: self.creation_time.clone(),
        }
    }
}

// ============================================================================
// Comment Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryComment {
    pub id: i32,
    pub entry_id: i32,
    pub body: String,
    pub creation_date: String,
    pub creation_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Body of `POST /entries/{id}/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDiaryComment {
    pub body: String,
}

impl NewDiaryComment {
    pub fn new(body: impl Into<String>) -> Result<Self, ValidationError> {
        let body = body.into();
        validate_comment_body(&body)?;
        Ok(Self { body })
    }
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub error_message: String,
}

// ============================================================================
// Tests
// ============================================================================
