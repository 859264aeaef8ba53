use leptos::*;

use crate::i18n::use_i18n;

#[component]
pub fn Loading() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="loading" aria-busy="true">
            <div class="spinner"></div>
            <span class="visually-hidden">{i18n.t("common.loading")}</span>
        </div>
    }
}
