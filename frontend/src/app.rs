use leptos::*;
use leptos_router::*;

use crate::config::{provide_config, AppConfig};
use crate::i18n::{provide_i18n, use_i18n};
use crate::pages::{entry_detail::EntryDetailPage, entry_list::EntryListPage, not_found::NotFound};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    provide_i18n(config.language.clone());
    provide_config(config);

    let i18n = use_i18n();

    view! {
        <Router>
            <header class="navbar">
                <A href="/">{i18n.t("app.title")}</A>
            </header>
            <main class="container" lang=move || i18n.language.get()>
                <Routes>
                    <Route path="/" view=EntryListPage />
                    <Route path="/entry/:id" view=EntryDetailPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}
