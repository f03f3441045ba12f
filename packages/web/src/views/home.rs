use dioxus::prelude::*;
use ui::{use_session, LogoutButton};

use crate::Route;

/// Landing page for a signed-in trainer.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let Some(user) = session().user else {
        nav.replace(Route::Login {});
        return rsx! {};
    };
    let avatar_url = user.avatar.as_ref().and_then(|a| a.preview_url());

    rsx! {
        div {
            class: "max-w-4xl container py-10 px-4 m-auto flex flex-col gap-5 items-start min-h-screen w-full",

            div {
                class: "flex items-center gap-4 w-full py-6 px-4 bg-base-100 border-4 border-base-300 border-b-[20px] rounded-md shadow-lg",
                if let Some(src) = avatar_url {
                    img {
                        class: "h-20 w-20 rounded-md border-4 border-base-300",
                        src: "{src}",
                        alt: "Avatar",
                    }
                }
                div {
                    class: "flex flex-col gap-1",
                    h1 { class: "text-xl font-semibold", "Welcome, {user.display_name()}" }
                    p { class: "text-sm", "{user.email}" }
                }
            }

            LogoutButton {
                class: "font-bold",
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }
    }
}
