use leptos::*;

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusKind {
    Success,
    #[default]
    Error,
}

impl StatusKind {
    pub fn class(&self) -> &'static str {
        match self {
            StatusKind::Success => "alert alert-success",
            StatusKind::Error => "alert alert-error",
        }
    }
}

/// Inline notice for request outcomes. Shows a dismiss button when
/// `on_dismiss` is given.
#[component]
pub fn StatusMessage(
    #[prop(optional)] kind: StatusKind,
    #[prop(into)] message: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    let role = match kind {
        StatusKind::Success => "status",
        StatusKind::Error => "alert",
    };

    view! {
        <div class=kind.class() role=role>
            <span class="alert-message">{message}</span>
            {on_dismiss.map(|callback| view! {
                <button
                    class="alert-dismiss"
                    type="button"
                    on:click=move |_| callback.call(())
                >
                    "×"
                </button>
            })}
        </div>
    }
}
