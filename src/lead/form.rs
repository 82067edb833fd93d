//! The lead-capture form component. Two instances of it live on the home
//! page (hero and call-to-action) with fully independent state.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::submit::{self, SubmitError};
use super::validate::LeadSubmission;

/// How long a status message stays up before it starts fading out.
pub const STATUS_VISIBLE_MS: u32 = 5_000;
/// Fade-out transition length right before removal.
pub const STATUS_FADE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub text: String,
    pub leaving: bool,
}

pub fn status_for(result: &Result<(), SubmitError>) -> (StatusKind, String) {
    match result {
        Ok(()) => (StatusKind::Success, submit::SENT_CONFIRMATION.to_string()),
        Err(e) => (StatusKind::Error, e.user_message()),
    }
}

/// Replaces whatever message the form currently shows and schedules the
/// fade-out and removal. Bumping the generation first makes timers from an
/// earlier message no-ops, so a stale 5s timer never tears down a newer one.
fn show_status(
    status: &UseStateHandle<Option<FormStatus>>,
    generation: &Rc<RefCell<u32>>,
    kind: StatusKind,
    text: String,
) {
    let shown = {
        let mut live = generation.borrow_mut();
        *live = live.wrapping_add(1);
        *live
    };
    status.set(Some(FormStatus {
        kind,
        text: text.clone(),
        leaving: false,
    }));

    let status = status.clone();
    let generation = generation.clone();
    Timeout::new(STATUS_VISIBLE_MS, move || {
        if *generation.borrow() != shown {
            return;
        }
        status.set(Some(FormStatus {
            kind,
            text,
            leaving: true,
        }));
        let status = status.clone();
        let generation = generation.clone();
        Timeout::new(STATUS_FADE_MS, move || {
            if *generation.borrow() == shown {
                status.set(None);
            }
        })
        .forget();
    })
    .forget();
}

fn clear_status(status: &UseStateHandle<Option<FormStatus>>, generation: &Rc<RefCell<u32>>) {
    let mut live = generation.borrow_mut();
    *live = live.wrapping_add(1);
    status.set(None);
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub form_id: AttrValue,
    pub button_label: AttrValue,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let sending = use_state(|| false);
    let status = use_state(|| None::<FormStatus>);
    let generation = use_mut_ref(|| 0u32);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let sending = sending.clone();
        let status = status.clone();
        let generation = generation.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }

            let lead = match LeadSubmission::parse(&name, &email) {
                Ok(lead) => lead,
                Err(err) => {
                    show_status(
                        &status,
                        &generation,
                        StatusKind::Error,
                        err.user_message().to_string(),
                    );
                    return;
                }
            };

            // Pending state: stale message goes away now, the button flips
            // to its sending label until the attempt concludes.
            clear_status(&status, &generation);
            sending.set(true);

            let name = name.clone();
            let email = email.clone();
            let sending = sending.clone();
            let status = status.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let result = submit::send_lead(&lead).await;
                if result.is_ok() {
                    name.set(String::new());
                    email.set(String::new());
                }
                let (kind, text) = status_for(&result);
                show_status(&status, &generation, kind, text);
                // Runs on every path: send_lead returns instead of throwing.
                sending.set(false);
            });
        })
    };

    html! {
        <form id={props.form_id.clone()} class="lead-form" onsubmit={onsubmit}>
            <style>{FORM_CSS}</style>
            <input
                type="text"
                placeholder="Your name"
                value={(*name).clone()}
                onchange={let name = name.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    name.set(input.value());
                }}
            />
            <input
                type="email"
                placeholder="Your email"
                value={(*email).clone()}
                onchange={let email = email.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    email.set(input.value());
                }}
            />
            <button
                type="submit"
                class="btn"
                disabled={*sending}
                style={(*sending).then(|| "cursor: not-allowed; opacity: 0.8;")}
            >
                {
                    if *sending {
                        html! { <><span class="envelope">{"✉"}</span>{" SENDING..."}</> }
                    } else {
                        html! { <>{props.button_label.clone()}</> }
                    }
                }
            </button>
            {
                if let Some(current) = (*status).as_ref() {
                    html! {
                        <p class={classes!(
                            "form-message",
                            current.kind.css_class(),
                            current.leaving.then(|| "leaving"),
                        )}>
                            { &current.text }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

const FORM_CSS: &str = r#"
    .lead-form {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 0.75rem;
        max-width: 32rem;
        margin: 0 auto;
    }
    .lead-form input {
        flex: 1 1 12rem;
        padding: 0.8rem 1rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 8px;
        background: rgba(255, 255, 255, 0.08);
        color: #fff;
        font-size: 1rem;
    }
    .lead-form .btn {
        flex: 1 1 100%;
        padding: 0.9rem 1.5rem;
        border: none;
        border-radius: 8px;
        background: #ff6b35;
        color: #fff;
        font-weight: 700;
        letter-spacing: 0.05em;
        font-size: 1rem;
        cursor: pointer;
    }
    .form-message {
        flex: 1 1 100%;
        margin: 10px auto 0;
        font-size: 14px;
        text-align: center;
        font-weight: 500;
        padding: 12px 16px;
        border-radius: 8px;
        max-width: 28rem;
        animation: formFadeIn 0.3s ease;
    }
    .form-message.success {
        color: #059669;
        background-color: #d1fae5;
        border: 1px solid #10b981;
        box-shadow: 0 2px 4px rgba(16, 185, 129, 0.1);
    }
    .form-message.error {
        color: #dc2626;
        background-color: #fee2e2;
        border: 1px solid #ef4444;
        box-shadow: 0 2px 4px rgba(239, 68, 68, 0.1);
    }
    .form-message.leaving {
        animation: formFadeOut 0.3s ease forwards;
    }
    @keyframes formFadeIn {
        from { opacity: 0; transform: translateY(-10px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes formFadeOut {
        from { opacity: 1; transform: translateY(0); }
        to { opacity: 0; transform: translateY(-10px); }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_status_uses_the_confirmation_copy() {
        let (kind, text) = status_for(&Ok(()));
        assert_eq!(kind, StatusKind::Success);
        assert_eq!(text, "✓ Email sent! Check your inbox for the program link.");
    }

    #[test]
    fn failure_status_carries_the_error_text() {
        let (kind, text) = status_for(&Err(SubmitError::Rejected("Mailbox is full".into())));
        assert_eq!(kind, StatusKind::Error);
        assert_eq!(text, "Mailbox is full");
    }

    #[test]
    fn status_kinds_map_to_their_css_classes() {
        assert_eq!(StatusKind::Success.css_class(), "success");
        assert_eq!(StatusKind::Error.css_class(), "error");
    }
}
