use dioxus::prelude::*;

use super::take_class;
use crate::cn;

const INPUT_BASE: &str = "input input-bordered w-full";

/// Labelled text input with an optional inline error.
///
/// `field` names the form field; it becomes the input's `name` and, prefixed,
/// its `id`, so clicking the label focuses the input.
#[component]
pub fn Input(
    field: String,
    #[props(default)] label: String,
    #[props(default)] class_label: String,
    error: Option<String>,
    #[props(extends = GlobalAttributes, extends = input)] attributes: Vec<Attribute>,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let (class, attributes) = take_class(attributes);
    let class = cn!(INPUT_BASE, class, error.as_ref().map(|_| "input-error"));
    let id = format!("input-{field}");

    rsx! {
        div {
            class: "form-control flex flex-col gap-1 w-full",
            if !label.is_empty() {
                label {
                    class: cn!("label cursor-pointer", class_label.as_str()),
                    r#for: "{id}",
                    "{label}"
                }
            }
            input {
                id: "{id}",
                name: "{field}",
                class: "{class}",
                oninput: move |evt| {
                    if let Some(handler) = oninput {
                        handler.call(evt);
                    }
                },
                ..attributes,
            }
            if let Some(error) = error {
                span { class: "text-error text-sm", "{error}" }
            }
        }
    }
}
