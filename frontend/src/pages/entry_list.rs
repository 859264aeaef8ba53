use leptos::*;
use shared::LandingPageDiaryEntry;

use crate::api::ApiClient;
use crate::components::diary_entry::{DiaryEntry, DiaryEntryMode};
use crate::components::loading::Loading;
use crate::components::status_message::{StatusKind, StatusMessage};
use crate::config::use_config;
use crate::i18n::use_i18n;

#[component]
pub fn EntryListPage() -> impl IntoView {
    let i18n = use_i18n();
    let client = ApiClient::new(&use_config());

    let entries = create_rw_signal(Vec::<LandingPageDiaryEntry>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(Option::<String>::None);

    wasm_bindgen_futures::spawn_local(async move {
        match client.list_entries().await {
            Ok(e) => entries.set(e),
            Err(e) => error.set(Some(e.to_string())),
        }
        loading.set(false);
    });

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">{i18n.t("entries.title")}</h1>
        </div>

        {move || error.get().map(|e| view! {
            <StatusMessage
                kind=StatusKind::Error
                message=i18n.t_with("entries.load_failed", "reason", &e)
            />
        })}

        <Show when=move || loading.get() fallback=|| ()>
            <Loading />
        </Show>

        <Show when=move || !loading.get() fallback=|| ()>
            <div class="diary-entries">
                {move || {
                    let entries_vec = entries.get();

                    if entries_vec.is_empty() && error.with(Option::is_none) {
                        view! {
                            <div class="empty-state">
                                <p>{i18n.t("entries.empty")}</p>
                            </div>
                        }.into_view()
                    } else {
                        entries_vec.into_iter().map(|entry| {
                            let mode = DiaryEntryMode::Preview {
                                comments_count: Some(entry.comments_count),
                            };
                            view! { <DiaryEntry entry=entry.summary() mode=mode /> }
                        }).collect_view()
                    }
                }}
            </div>
        </Show>
    }
}
