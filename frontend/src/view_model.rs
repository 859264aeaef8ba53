//! Display-only projections of the wire types.
//!
//! Rendering reads these instead of the API structs, so derived values such
//! as date labels are computed once per render into fresh values and the
//! data owned by the parent page is never touched.

use leptos::logging::warn;
use shared::{DiaryComment, DiaryEntry};

use crate::utils::{comment_label, entry_label};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub id: i32,
    pub title: String,
    pub body: String,
    /// `None` when the entry's timestamp cannot be parsed.
    pub date_label: Option<String>,
    pub detail_path: String,
}

impl EntryView {
    pub fn project(entry: &DiaryEntry) -> Self {
        let date_label = entry_label(&entry.creation_date, &entry.creation_time)
            .map_err(|e| warn!("entry {}: {}", entry.id, e))
            .ok();

        Self {
            id: entry.id,
            title: entry.title.clone(),
            body: entry.body.clone(),
            date_label,
            detail_path: entry.detail_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub id: i32,
    /// `None` when the API did not name an author.
    pub author: Option<String>,
    pub body: String,
    pub date_label: Option<String>,
}

impl CommentView {
    pub fn project(comment: &DiaryComment) -> Self {
        let date_label = comment_label(&comment.creation_date, &comment.creation_time)
            .map_err(|e| warn!("comment {}: {}", comment.id, e))
            .ok();

        Self {
            id: comment.id,
            author: comment
                .author
                .as_ref()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
            body: comment.body.clone(),
            date_label,
        }
    }
}

/// Project comments in the order given.
pub fn project_comments(comments: &[DiaryComment]) -> Vec<CommentView> {
    comments.iter().map(CommentView::project).collect()
}
