//! Login page view: sign in or create a trainer account.

use api::AvatarConfig;
use dioxus::prelude::*;
use ui::components::{Button, ButtonRender, ButtonSlot, InlineLoading, Input};
use ui::icons::FaCube;
use ui::{
    cn, store_session, use_session, AvatarBuilder, Field, FormMode, GuestOnly, Icon, LoginForm,
    Operation, SubmitBlocked, SubmitIntent,
};

use crate::Route;

/// Login page component. Signed-in visitors are sent home before the form
/// is ever rendered.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        GuestOnly {
            on_signed_in: move |_| {
                nav.replace(Route::Home {});
            },
            LoginPage {}
        }
    }
}

#[component]
fn LoginPage() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::new);

    let credit_link = use_callback(|slot: ButtonSlot| {
        let ButtonSlot {
            class,
            attributes,
            children,
            ..
        } = slot;
        rsx! {
            a {
                class: "{class}",
                href: "https://github.com/expressots/expressots",
                target: "_blank",
                rel: "noreferrer",
                ..attributes,
                {children}
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let submitted = form.write().submit();
        let intent = match submitted {
            Ok(intent) => intent,
            Err(SubmitBlocked::Busy) => return,
            Err(SubmitBlocked::Invalid(errors)) => {
                tracing::debug!("Login form has {} invalid field(s)", errors.iter().count());
                return;
            }
        };

        let op = intent.kind();
        form.write().begin(op);

        spawn(async move {
            let result = match intent {
                SubmitIntent::Create(request) => api::create_user(request).await,
                SubmitIntent::SignIn(request) => api::sign_in(request).await,
            };
            match result {
                Ok(user) => {
                    form.write().finish(op, Ok(()));
                    store_session(&mut session, user);
                    nav.replace(Route::Home {});
                }
                Err(e) => {
                    tracing::error!("{:?} failed: {}", op, e);
                    form.write().finish(op, Err(e.message()));
                }
            }
        });
    };

    let state = form();
    let mode = state.mode();
    let errors = state.errors().clone();
    let busy = state.busy();

    rsx! {
        div {
            class: "max-w-4xl container py-10 px-4 m-auto flex flex-col gap-5 items-start justify-center min-h-screen w-full",

            h1 {
                class: "text-xl font-semibold flex items-center justify-center gap-2",
                Icon { icon: FaCube, width: 32, height: 32, class: "text-primary" }
                "PokeBattle"
            }

            div {
                class: "flex flex-col w-full gap-5 py-6 px-4 bg-base-100 border-4 border-base-300 border-b-[20px] rounded-md shadow-lg",

                div {
                    class: "flex justify-start items-center w-full",
                    div {
                        class: "tabs",
                        for tab in FormMode::ALL {
                            button {
                                key: "{tab.label()}",
                                r#type: "button",
                                class: cn!("tab tab-bordered", (mode == tab).then_some("tab-active")),
                                onclick: move |_| form.write().set_mode(tab),
                                "{tab.label()}"
                            }
                        }
                    }
                }

                if mode == FormMode::Create {
                    div {
                        class: "animate-fadeIn w-full flex items-start justify-start",
                        AvatarBuilder {
                            initial: state.avatar().clone(),
                            on_change: move |avatar: AvatarConfig| form.write().set_avatar(avatar),
                        }
                    }
                }

                form {
                    class: "w-full max-w-full md:max-w-lg",
                    onsubmit: handle_submit,

                    div {
                        class: "gap-7 flex flex-col w-full pt-10",

                        if mode == FormMode::Create {
                            Input {
                                field: Field::Name.as_str(),
                                label: "Name",
                                class_label: "font-semibold",
                                r#type: "text",
                                value: "{state.input().name}",
                                error: errors.first(Field::Name).map(str::to_string),
                                oninput: move |evt: FormEvent| form.write().set_field(Field::Name, evt.value()),
                            }
                        }

                        Input {
                            field: Field::Email.as_str(),
                            label: "Email",
                            class_label: "font-semibold w-full",
                            r#type: "text",
                            value: "{state.input().email}",
                            error: errors.first(Field::Email).map(str::to_string),
                            oninput: move |evt: FormEvent| form.write().set_field(Field::Email, evt.value()),
                        }

                        Input {
                            field: Field::Password.as_str(),
                            label: "Password",
                            class_label: "font-semibold",
                            r#type: "password",
                            value: "{state.input().password}",
                            error: errors.first(Field::Password).map(str::to_string),
                            oninput: move |evt: FormEvent| form.write().set_field(Field::Password, evt.value()),
                        }
                    }

                    div {
                        class: "min-h-12 flex items-center justify-start py-5",
                        div {
                            class: "flex flex-col items-start justify-start gap-2",
                            for op in [Operation::SignIn, Operation::CreateAccount] {
                                if let Some(message) = state.status(op).error() {
                                    p {
                                        key: "{op:?}",
                                        class: "text-error",
                                        "{message}"
                                    }
                                }
                            }
                        }
                        InlineLoading {
                            is_loading: state.status(Operation::SignIn).is_pending(),
                            text: "Carregando...",
                        }
                    }

                    div {
                        class: "flex w-full",
                        Button {
                            class: "w-full font-bold",
                            r#type: "submit",
                            name: "action1",
                            value: if mode == FormMode::Create { "create" } else { "login" },
                            disabled: busy,
                            "{mode.submit_label()}"
                        }
                    }
                }
            }

            div {
                class: "flex justify-between w-full",
                Button {
                    class: "bg-zinc-900 text-white border-4 border-zinc-950 p-1 font-semibold",
                    render: ButtonRender::ForwardToChild(credit_link),
                    "Made with ExpressoTS"
                }
            }
        }
    }
}
