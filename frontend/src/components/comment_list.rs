use leptos::*;

use crate::i18n::use_i18n;
use crate::view_model::CommentView;

/// Comments of an entry, in the order they were given.
#[component]
pub fn CommentList(comments: Vec<CommentView>) -> impl IntoView {
    let i18n = use_i18n();

    if comments.is_empty() {
        return view! {
            <div class="diary-details-comments">
                <p class="empty-state-hint">{i18n.t("comments.empty")}</p>
            </div>
        }
        .into_view();
    }

    view! {
        <div class="diary-details-comments">
            {comments
                .into_iter()
                .map(|comment| view! { <CommentBlock comment=comment /> })
                .collect_view()}
        </div>
    }
    .into_view()
}

#[component]
fn CommentBlock(comment: CommentView) -> impl IntoView {
    let i18n = use_i18n();

    let author = comment
        .author
        .unwrap_or_else(|| i18n.t("comments.anonymous"));
    let date_label = comment
        .date_label
        .unwrap_or_else(|| i18n.t("date.invalid"));

    view! {
        <div class="diary-details-comment" data-comment-id=comment.id>
            <div class="diary-details-comment-header">
                <h3 class="comment-author">{author}</h3>
            </div>
            <div class="diary-details-comment-content">
                <p>{comment.body}</p>
            </div>
            <div class="diary-details-comment-footer">
                <p class="comment-date">{date_label}</p>
            </div>
        </div>
    }
}
