//! Presentational building blocks shared by the views.

mod button;
pub use button::{Button, ButtonRender, ButtonSlot, BUTTON_BASE};

mod input;
pub use input::Input;

mod inline_loading;
pub use inline_loading::InlineLoading;

use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;

/// Pull every `class` attribute out of a spread attribute list, joined in
/// order, leaving the rest untouched.
pub(crate) fn take_class(attributes: Vec<Attribute>) -> (String, Vec<Attribute>) {
    let (class, rest): (Vec<Attribute>, Vec<Attribute>) =
        attributes.into_iter().partition(|attr| attr.name == "class");
    let class = class
        .into_iter()
        .filter_map(|attr| match attr.value {
            AttributeValue::Text(text) => Some(text),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ");
    (class, rest)
}
