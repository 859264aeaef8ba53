use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::api::ApiClient;
use crate::components::status_message::{StatusKind, StatusMessage};
use crate::config::use_config;
use crate::i18n::use_i18n;
use crate::submission::{
    submit_comment, SubmissionFailure, SubmissionState, SubmissionTracker, TrackerStore,
};

/// Pending auto-dismiss for the success notice. Scheduling a new one drops,
/// and so cancels, the previous timeout.
#[derive(Clone, Default)]
struct NoticeTimer {
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl NoticeTimer {
    fn schedule(&self, millis: u32, callback: impl FnOnce() + 'static) {
        *self.pending.borrow_mut() = Some(Timeout::new(millis, callback));
    }

    fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

/// Clears the input after a successful post unless the user kept typing.
fn clear_if_unchanged(body: &mut String, submitted: &str) {
    if body.as_str() == submitted {
        body.clear();
    }
}

/// Form for posting a new comment on an entry.
///
/// `on_reload` is called once after the server accepted the comment, so the
/// parent can refetch the entry.
#[component]
pub fn CommentForm(entry_id: i32, #[prop(into)] on_reload: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    let config = use_config();
    let client = ApiClient::new(&config);
    let notice_timeout_ms = config.notice_timeout_ms;

    let comment_body = create_rw_signal(String::new());
    let tracker = create_rw_signal(SubmissionTracker::new());
    let notice_timer = NoticeTimer::default();

    // Responses that arrive after the form is gone are dropped.
    on_cleanup({
        let notice_timer = notice_timer.clone();
        move || {
            notice_timer.cancel();
            tracker.with_tracker(|t| t.cancel());
        }
    });

    let handle_new_comment_submit = {
        let notice_timer = notice_timer.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();

            let client = client.clone();
            let notice_timer = notice_timer.clone();
            let submitted = comment_body.get_untracked();

            wasm_bindgen_futures::spawn_local(async move {
                let state = submit_comment(
                    &tracker,
                    entry_id,
                    submitted.clone(),
                    |id, comment| async move { client.submit_new_comment(id, comment).await },
                    move || on_reload.call(()),
                )
                .await;

                if state == SubmissionState::Succeeded {
                    comment_body.try_update(|body| clear_if_unchanged(body, &submitted));

                    notice_timer.schedule(notice_timeout_ms, move || {
                        tracker.with_tracker(|t| {
                            if *t.state() == SubmissionState::Succeeded {
                                t.acknowledge();
                            }
                        });
                    });
                }
            });
        }
    };

    let busy = move || tracker.with(|t| t.is_busy());

    let notice = move || {
        tracker.with(|t| match t.state() {
            SubmissionState::Succeeded => {
                Some((StatusKind::Success, i18n.t("comment_form.success")))
            }
            SubmissionState::Failed(failure) => {
                let reason = match failure {
                    SubmissionFailure::Invalid(err) => i18n.validation_message(err),
                    SubmissionFailure::Request(reason) => reason.clone(),
                };
                Some((
                    StatusKind::Error,
                    i18n.t_with("comment_form.failed", "reason", &reason),
                ))
            }
            SubmissionState::Idle | SubmissionState::Submitting => None,
        })
    };

    let dismiss = Callback::new(move |_: ()| {
        notice_timer.cancel();
        tracker.update(|t| t.acknowledge());
    });

    view! {
        <div class="diary-details-new-comment">
            {move || notice().map(|(kind, message)| view! {
                <StatusMessage kind=kind message=message on_dismiss=dismiss />
            })}

            <form class="diary-details-new-comment-form" on:submit=handle_new_comment_submit>
                <textarea
                    class="new-comment-content"
                    name="commentBody"
                    rows=4
                    placeholder=i18n.t("comment_form.placeholder")
                    prop:value=move || comment_body.get()
                    on:input=move |ev| comment_body.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="new-comment-submit" disabled=busy>
                    {move || {
                        if busy() {
                            i18n.t("comment_form.submitting")
                        } else {
                            i18n.t("comment_form.submit")
                        }
                    }}
                </button>
            </form>
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::config::{provide_config, AppConfig};
    use crate::i18n::provide_i18n;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_form() -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&root).unwrap();
        mount_to(root.clone(), || {
            provide_i18n("en".to_string());
            // Nothing listens here; validation failures must not get this far.
            provide_config(AppConfig::from_values(Some("http://127.0.0.1:9"), None));
            view! { <CommentForm entry_id=12 on_reload=Callback::new(|_| {}) /> }
        });
        root
    }

    fn textarea(root: &web_sys::HtmlElement) -> web_sys::HtmlTextAreaElement {
        root.query_selector("textarea.new-comment-content")
            .unwrap()
            .unwrap()
            .unchecked_into()
    }

    fn dispatch(target: &web_sys::Element, kind: &str) -> web_sys::Event {
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = web_sys::Event::new_with_event_init_dict(kind, &init).unwrap();
        target.dispatch_event(&event).unwrap();
        event
    }

    fn type_text(root: &web_sys::HtmlElement, text: &str) {
        let field = textarea(root);
        field.set_value(text);
        dispatch(&field, "input");
    }

    fn submit(root: &web_sys::HtmlElement) -> web_sys::Event {
        let form = root.query_selector("form").unwrap().unwrap();
        dispatch(&form, "submit")
    }

    fn error_text(root: &web_sys::HtmlElement) -> Option<String> {
        root.query_selector(".alert-error")
            .unwrap()
            .and_then(|alert| alert.text_content())
    }

    #[wasm_bindgen_test]
    fn test_submit_default_is_prevented() {
        let root = mount_form();
        let event = submit(&root);
        assert!(event.default_prevented());
    }

    #[wasm_bindgen_test]
    async fn test_blank_comment_shows_alert_without_sending() {
        let root = mount_form();
        type_text(&root, "   ");
        submit(&root);
        TimeoutFuture::new(0).await;

        let message = error_text(&root).unwrap();
        assert!(message.contains("Your comment could not be posted"));
        assert!(message.contains("the comment is empty"));
        assert_eq!(textarea(&root).value(), "   ");

        let button = root.query_selector(".new-comment-submit").unwrap().unwrap();
        assert!(!button.has_attribute("disabled"));
        assert_eq!(button.text_content().unwrap(), "Comment");
    }

    #[wasm_bindgen_test]
    async fn test_typed_text_reaches_the_submission() {
        let root = mount_form();
        let long = "a".repeat(2001);
        type_text(&root, &long);
        assert_eq!(textarea(&root).value(), long);

        submit(&root);
        TimeoutFuture::new(0).await;

        // Only the typed text can have produced this count.
        let message = error_text(&root).unwrap();
        assert!(message.contains("2001 characters"));
    }

    #[wasm_bindgen_test]
    async fn test_dismiss_hides_the_alert() {
        let root = mount_form();
        submit(&root);
        TimeoutFuture::new(0).await;
        assert!(error_text(&root).is_some());

        let dismiss = root.query_selector(".alert-dismiss").unwrap().unwrap();
        dispatch(&dismiss, "click");
        assert!(error_text(&root).is_none());
    }

    #[wasm_bindgen_test]
    async fn test_rescheduling_cancels_the_pending_notice() {
        let timer = NoticeTimer::default();
        let fired = Rc::new(RefCell::new(Vec::new()));

        let first = fired.clone();
        timer.schedule(0, move || first.borrow_mut().push("first"));
        let second = fired.clone();
        timer.schedule(5, move || second.borrow_mut().push("second"));

        TimeoutFuture::new(30).await;
        assert_eq!(*fired.borrow(), vec!["second"]);
    }

    #[wasm_bindgen_test]
    async fn test_cancelled_notice_never_fires() {
        let timer = NoticeTimer::default();
        let fired = Rc::new(RefCell::new(false));

        let flag = fired.clone();
        timer.schedule(0, move || *flag.borrow_mut() = true);
        timer.cancel();

        TimeoutFuture::new(20).await;
        assert!(!*fired.borrow());
    }
}
