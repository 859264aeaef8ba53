use leptos::logging::warn;
use leptos::*;
use leptos_router::*;
use shared::WholeDiaryEntry;

use crate::api::{ApiClient, RequestError};
use crate::components::diary_entry::{DiaryEntry, DiaryEntryMode};
use crate::components::loading::Loading;
use crate::components::status_message::{StatusKind, StatusMessage};
use crate::config::use_config;
use crate::i18n::use_i18n;

/// Route ids are positive integers; anything else is treated as not found.
pub fn parse_entry_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

/// Identifies one fetch of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    entry_id: i32,
    generation: u64,
}

/// Orders entry fetches so only the newest one for the current route lands.
#[derive(Debug, Default)]
pub struct LoadSequence {
    generation: u64,
    latest: Option<LoadTicket>,
}

impl LoadSequence {
    /// Starts a fetch; every earlier ticket is superseded.
    pub fn issue(&mut self, entry_id: i32) -> LoadTicket {
        self.generation += 1;
        let ticket = LoadTicket {
            entry_id,
            generation: self.generation,
        };
        self.latest = Some(ticket);
        ticket
    }

    /// Whether a finished fetch may be applied while the route shows `route_id`.
    pub fn accepts(&self, ticket: LoadTicket, route_id: Option<i32>) -> bool {
        self.latest == Some(ticket) && route_id == Some(ticket.entry_id)
    }
}

#[component]
pub fn EntryDetailPage() -> impl IntoView {
    let i18n = use_i18n();
    let client = store_value(ApiClient::new(&use_config()));

    let params = use_params_map();
    let entry_id = Signal::derive(move || {
        params.with(|p| p.get("id").and_then(|raw| parse_entry_id(raw)))
    });

    let entry = create_rw_signal(Option::<WholeDiaryEntry>::None);
    let loading = create_rw_signal(true);
    let error = create_rw_signal(Option::<RequestError>::None);
    let sequence = store_value(LoadSequence::default());

    let load = move |id: i32| {
        let client = client.get_value();
        let Some(ticket) = sequence.try_update_value(|s| s.issue(id)) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            let result = client.get_entry(id).await;

            let current = sequence
                .try_with_value(|s| s.accepts(ticket, entry_id.try_get_untracked().flatten()))
                .unwrap_or(false);
            if !current {
                return;
            }

            match result {
                Ok(e) => {
                    entry.set(Some(e));
                    error.set(None);
                }
                Err(RequestError::NotFound) => {
                    entry.set(None);
                    error.set(Some(RequestError::NotFound));
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    // Load the entry whenever the route id changes
    create_effect(move |_| match entry_id.get() {
        Some(id) => {
            entry.set(None);
            error.set(None);
            loading.set(true);
            load(id);
        }
        None => {
            warn!("invalid entry id in route: {:?}", params.with(|p| p.get("id").cloned()));
            entry.set(None);
            error.set(None);
            loading.set(false);
        }
    });

    // Refetch after a comment was posted; the page keeps showing the
    // current data until the new one arrives.
    let reload = Callback::new(move |_: ()| {
        if let Some(id) = entry_id.get_untracked() {
            load(id);
        }
    });

    // Remount the entry only when its own fields change, not on new comments.
    let summary = create_memo(move |_| entry.with(|e| e.as_ref().map(|whole| whole.summary())));
    let comments = Signal::derive(move || {
        entry.with(|e| e.as_ref().map(|whole| whole.comments.clone()).unwrap_or_default())
    });

    let not_found = move || {
        entry_id.get().is_none() || error.with(|e| matches!(e, Some(RequestError::NotFound)))
    };

    view! {
        <div class="entry-detail-page">
            <nav class="back-link">
                <A href="/">{i18n.t("entry.back")}</A>
            </nav>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if not_found() {
                    view! {
                        <div class="empty-state">
                            <p>{i18n.t("entry.not_found")}</p>
                        </div>
                    }.into_view()
                } else {
                    error.get().map(|e| view! {
                        <StatusMessage
                            kind=StatusKind::Error
                            message=i18n.t_with("entry.load_failed", "reason", &e.to_string())
                        />
                    }).into_view()
                }
            }}

            {move || summary.get().map(|summary| {
                let mode = DiaryEntryMode::Detail {
                    comments: comments.into(),
                    on_reload: reload,
                };
                view! { <DiaryEntry entry=summary mode=mode /> }
            })}
        </div>
    }
}
