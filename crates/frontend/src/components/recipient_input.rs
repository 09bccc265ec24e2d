//! Free-text, multi-value recipients field.

use yew::prelude::*;

/// Properties for RecipientInput component.
#[derive(Properties, PartialEq)]
pub struct RecipientInputProps {
    pub recipients: Vec<String>,
    /// Receives the complete new list on every change.
    pub onchange: Callback<Vec<String>>,
}

/// Append `entry` to `list`. Blank entries are ignored; nothing is validated.
pub fn add_recipient(list: &[String], entry: &str) -> Option<Vec<String>> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }
    let mut next = list.to_vec();
    next.push(entry.to_string());
    Some(next)
}

/// Remove the chip at `index`.
pub fn remove_recipient(list: &[String], index: usize) -> Vec<String> {
    list.iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, r)| r.clone())
        .collect()
}

/// Recipients chip input. Enter or comma commits the typed text as a chip.
#[function_component(RecipientInput)]
pub fn recipient_input(props: &RecipientInputProps) -> Html {
    let pending = use_state(String::new);

    let commit = {
        let pending = pending.clone();
        let recipients = props.recipients.clone();
        let onchange = props.onchange.clone();
        move || {
            if let Some(next) = add_recipient(&recipients, &pending) {
                onchange.emit(next);
            }
            pending.set(String::new());
        }
    };

    let on_input = {
        let pending = pending.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            pending.set(input.value());
        })
    };

    let on_keydown = {
        let commit = commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == "," {
                e.prevent_default();
                commit();
            }
        })
    };

    let on_blur = Callback::from(move |_: FocusEvent| commit());

    html! {
        <div class="field">
            <label for="recipients">{"Recipients"}</label>
            <div class="chip-input">
                { for props.recipients.iter().enumerate().map(|(index, recipient)| {
                    let onclick = {
                        let recipients = props.recipients.clone();
                        let onchange = props.onchange.clone();
                        Callback::from(move |_: MouseEvent| {
                            onchange.emit(remove_recipient(&recipients, index));
                        })
                    };
                    html! {
                        <span class="chip" key={format!("{index}-{recipient}")}>
                            { recipient }
                            <button type="button" class="chip-remove" {onclick}>{"×"}</button>
                        </span>
                    }
                })}
                <input
                    id="recipients"
                    type="text"
                    value={(*pending).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    onblur={on_blur}
                />
            </div>
        </div>
    }
}
