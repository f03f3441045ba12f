use dioxus::prelude::*;

use super::take_class;
use crate::cn;

/// Classes every button starts from. Caller classes are merged on top.
pub const BUTTON_BASE: &str = "disabled:opacity-50 disabled:cursor-not-allowed border-2 border-b-8 border-primary-focus bg-primary text-primary-content flex cursor-pointer items-center justify-center gap-1 rounded-md p-2 shadow-md transition-colors";

/// Everything a passthrough child needs to take over the button's role.
#[derive(Clone, PartialEq)]
pub struct ButtonSlot {
    /// Base classes merged with the caller's.
    pub class: String,
    /// Remaining caller attributes (`type`, `name`, `value`, `disabled`, ...).
    pub attributes: Vec<Attribute>,
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

/// How a [`Button`] puts itself on the page.
#[derive(Clone, PartialEq, Default)]
pub enum ButtonRender {
    /// A native `<button>`.
    #[default]
    Native,
    /// No element of its own: the callback renders the single child element
    /// and must apply the slot's class, attributes and handler to it.
    ForwardToChild(Callback<ButtonSlot, Element>),
}

/// Clickable element with the PokeBattle look.
#[component]
pub fn Button(
    #[props(default)] render: ButtonRender,
    #[props(extends = GlobalAttributes, extends = button)] attributes: Vec<Attribute>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let (class, attributes) = take_class(attributes);
    let class = cn!(BUTTON_BASE, class);

    match render {
        ButtonRender::Native => rsx! {
            button {
                class: "{class}",
                onclick: move |evt| {
                    if let Some(handler) = onclick {
                        handler.call(evt);
                    }
                },
                ..attributes,
                {children}
            }
        },
        ButtonRender::ForwardToChild(child) => child.call(ButtonSlot {
            class,
            attributes,
            onclick,
            children,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_native_button_merges_class_and_forwards_attributes() {
        fn app() -> Element {
            rsx! {
                Button {
                    class: "w-full font-bold p-4",
                    r#type: "submit",
                    disabled: true,
                    "Go"
                }
            }
        }

        let html = render(app);
        assert!(html.starts_with("<button"));
        assert!(html.contains("rounded-md shadow-md transition-colors w-full font-bold p-4"));
        assert!(!html.contains("p-2"));
        assert!(html.contains("disabled=true"));
        assert!(html.contains(r#"type="submit""#));
        assert!(html.ends_with(">Go</button>"));
    }

    #[test]
    fn test_forward_to_child_renders_no_button() {
        fn app() -> Element {
            let link = use_callback(|slot: ButtonSlot| {
                let ButtonSlot {
                    class,
                    attributes,
                    children,
                    ..
                } = slot;
                rsx! {
                    a { class: "{class}", href: "#", ..attributes, {children} }
                }
            });
            rsx! {
                Button {
                    class: "bg-zinc-900",
                    render: ButtonRender::ForwardToChild(link),
                    "Link"
                }
            }
        }

        let html = render(app);
        assert!(!html.contains("<button"));
        assert!(html.starts_with("<a "));
        assert!(html.contains("bg-zinc-900"));
        assert!(!html.contains("bg-primary"));
        assert!(html.contains("border-primary-focus"));
        assert!(html.ends_with(">Link</a>"));
    }
}
