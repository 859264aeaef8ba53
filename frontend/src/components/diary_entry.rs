use leptos::*;
use leptos_router::A;
use shared::{DiaryComment, DiaryEntry as Entry};

use crate::components::comment_form::CommentForm;
use crate::components::comment_list::CommentList;
use crate::i18n::use_i18n;
use crate::view_model::{project_comments, EntryView};

/// How a `DiaryEntry` is shown.
#[derive(Clone)]
pub enum DiaryEntryMode {
    /// Compact card linking to the detail page, used in listings.
    Preview { comments_count: Option<i32> },
    /// Full entry with its comments and the comment form.
    ///
    /// `comments` may be a signal so a reload refreshes the list without
    /// remounting the form.
    Detail {
        comments: MaybeSignal<Vec<DiaryComment>>,
        on_reload: Callback<()>,
    },
}

#[component]
pub fn DiaryEntry(entry: Entry, mode: DiaryEntryMode) -> impl IntoView {
    match mode {
        DiaryEntryMode::Preview { comments_count } => view! {
            <DiaryEntryPreview entry=entry comments_count=comments_count />
        }
        .into_view(),
        DiaryEntryMode::Detail {
            comments,
            on_reload,
        } => view! {
            <DiaryEntryDetail entry=entry comments=comments on_reload=on_reload />
        }
        .into_view(),
    }
}

/// A card summarizing an entry, wrapped in a link to its detail page.
#[component]
pub fn DiaryEntryPreview(
    entry: Entry,
    comments_count: Option<i32>,
) -> impl IntoView {
    let i18n = use_i18n();
    let projected = EntryView::project(&entry);
    let date_label = projected.date_label.unwrap_or_else(|| i18n.t("date.invalid"));

    view! {
        <A href=projected.detail_path>
            <div class="diary-entry">
                <header class="diary-header">
                    <h2 class="diary-title">{projected.title}</h2>
                    <div class="diary-header-rule"></div>
                    <p class="diary-date">{date_label}</p>
                </header>

                <div class="diary-content">
                    <p>{projected.body}</p>
                </div>

                {comments_count.map(|count| view! {
                    <footer class="diary-footer">
                        <p class="diary-comments-count">{i18n.comments_count(count)}</p>
                    </footer>
                })}
            </div>
        </A>
    }
}

/// The full entry, its comments and a form to add one.
#[component]
pub fn DiaryEntryDetail(
    entry: Entry,
    #[prop(into)] comments: MaybeSignal<Vec<DiaryComment>>,
    #[prop(into)] on_reload: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let projected = EntryView::project(&entry);
    let date_label = projected.date_label.unwrap_or_else(|| i18n.t("date.invalid"));

    view! {
        <section class="diary-details">
            <div class="diary-details-header">
                <h1 class="diary-details-title">{projected.title}</h1>
                <h3 class="diary-details-date">{date_label}</h3>
            </div>
            <div class="diary-details-content">
                <p>{projected.body}</p>
            </div>

            <h2 class="diary-details-comments-title">{i18n.t("comments.title")}</h2>
            {move || {
                let comment_views = comments.with(|c| project_comments(c));
                view! { <CommentList comments=comment_views /> }
            }}

            <CommentForm entry_id=projected.id on_reload=on_reload />
        </section>
    }
}
