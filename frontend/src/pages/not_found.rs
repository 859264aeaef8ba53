use leptos::*;
use leptos_router::A;

use crate::i18n::use_i18n;

#[component]
pub fn NotFound() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="empty-state">
            <h1>{i18n.t("not_found.title")}</h1>
            <A href="/">{i18n.t("not_found.home")}</A>
        </div>
    }
}
