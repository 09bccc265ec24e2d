//! Email composer page.

use std::rc::Rc;

use core_types::{ComposerEvent, ComposerState};
use yew::prelude::*;

use crate::components::{Notice, NoticeKind, RecipientInput};
use crate::context::DeliveryHandle;

/// Reducer state backing the composer form.
#[derive(Clone, Default, PartialEq)]
struct ComposerStore(ComposerState);

impl Reducible for ComposerStore {
    type Action = ComposerEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(ComposerStore(state))
    }
}

/// Email sender page component.
#[function_component(EmailSenderPage)]
pub fn email_sender_page() -> Html {
    let composer = use_reducer(ComposerStore::default);
    let notice = use_state(|| None::<(NoticeKind, String)>);
    let delivery = use_context::<DeliveryHandle>().unwrap_or_default();

    let on_recipients = {
        let composer = composer.clone();
        Callback::from(move |recipients: Vec<String>| {
            composer.dispatch(ComposerEvent::RecipientsChanged(recipients));
        })
    };

    let on_subject = {
        let composer = composer.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            composer.dispatch(ComposerEvent::SubjectChanged(input.value()));
        })
    };

    let on_body = {
        let composer = composer.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            composer.dispatch(ComposerEvent::BodyChanged(input.value()));
        })
    };

    let on_send = {
        let composer = composer.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            let mut state = composer.0.clone();
            match state.send(delivery.get()) {
                Ok(receipt) => {
                    composer.dispatch(ComposerEvent::Sent);
                    notice.set(Some((
                        NoticeKind::Success,
                        format!("Email sent via {}.", receipt.provider.name),
                    )));
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("Failed to send email: {}", err).into());
                    let message = if err.is_not_implemented() {
                        (
                            NoticeKind::Warning,
                            "Sending is not available: no mail delivery backend is configured."
                                .to_string(),
                        )
                    } else {
                        (NoticeKind::Error, format!("Failed to send email: {}", err))
                    };
                    notice.set(Some(message));
                }
            }
        })
    };

    let on_discard = {
        let composer = composer.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            composer.dispatch(ComposerEvent::Discard);
            notice.set(None);
        })
    };

    let state = &composer.0;

    html! {
        <div class="composer">
            <div class="card">
                <div class="card-header">
                    <div class="avatar">{"@"}</div>
                    <div>
                        <div class="card-title">{"Email"}</div>
                        <div class="text-secondary">{"Send an email"}</div>
                    </div>
                </div>

                <RecipientInput recipients={state.recipients.clone()} onchange={on_recipients} />

                <div class="field">
                    <label for="subject">{"Subject"}</label>
                    <input
                        id="subject"
                        name="subject"
                        type="text"
                        value={state.subject.clone()}
                        oninput={on_subject}
                    />
                </div>

                <div class="field">
                    <label for="content">{"Content"}</label>
                    <textarea
                        id="content"
                        name="content"
                        rows="4"
                        value={state.body.clone()}
                        oninput={on_body}
                    />
                </div>

                if let Some((kind, message)) = (*notice).clone() {
                    <Notice {kind} {message} />
                }

                <div class="card-actions">
                    <button class="btn btn-primary" onclick={on_send}>{"Send"}</button>
                    <button class="btn btn-secondary" onclick={on_discard}>{"Discard"}</button>
                </div>
            </div>
        </div>
    }
}
