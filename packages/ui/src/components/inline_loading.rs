use dioxus::prelude::*;

/// Spinner with a short caption, rendered only while `is_loading`.
#[component]
pub fn InlineLoading(
    is_loading: bool,
    #[props(default = "Loading...".to_string())] text: String,
) -> Element {
    if !is_loading {
        return rsx! {};
    }

    rsx! {
        span {
            class: "flex items-center gap-2 text-sm",
            role: "status",
            span { class: "loading loading-spinner loading-sm" }
            "{text}"
        }
    }
}
