use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff, LdMusic, LdShield, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{Role, ALL_ROLES};
use shared_ui::{
    Button, ButtonSize, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
};
use std::collections::HashMap;

use crate::config::config;
use crate::navigation::role_home;
use crate::routes::Route;
use crate::session::use_session;

fn role_icon(role: Role) -> Element {
    match role {
        Role::Artist => rsx! { Icon::<LdUser> { icon: LdUser, width: 16, height: 16 } },
        Role::Admin => rsx! { Icon::<LdShield> { icon: LdShield, width: 16, height: 16 } },
    }
}

/// Sign-in form with an Artist/Admin tab.
///
/// Any non-blank email and password is accepted. On success the user is sent
/// to the home view of the selected role.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut role = use_signal(|| config().session.default_role);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match session.login(&email(), &password(), role()) {
            Ok(identity) => {
                navigator().push(role_home(identity.role()));
            }
            Err(e) => {
                error_msg.set(Some(e.friendly_message()));
                field_errors.set(e.field_errors);
            }
        }
    };

    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Link { to: Route::Landing {}, class: "auth-brand",
                span { class: "auth-brand-mark",
                    Icon::<LdMusic> { icon: LdMusic, width: 28, height: 28 }
                }
                span { class: "auth-brand-name", "Loop Music" }
            }

            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Welcome Back" }
                    CardDescription { "Sign in to your account" }

                    div { class: "auth-tabs", role: "tablist",
                        for tab in ALL_ROLES.iter().copied() {
                            button {
                                key: "{tab}",
                                r#type: "button",
                                role: "tab",
                                class: if role() == tab { "auth-tab active" } else { "auth-tab" },
                                "aria-selected": "{role() == tab}",
                                onclick: move |_| role.set(tab),
                                {role_icon(tab)}
                                span { "{tab.display_name()}" }
                            }
                        }
                    }
                }

                CardContent {
                    form { class: "auth-form", onsubmit: handle_login,
                        if let Some(msg) = error_msg() {
                            div { class: "auth-error", role: "alert", "{msg}" }
                        }

                        Input {
                            input_type: "email",
                            name: "email",
                            label: "Email Address",
                            placeholder: "Enter your email",
                            value: email(),
                            required: true,
                            error: field_errors().get("email").cloned().unwrap_or_default(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }

                        div { class: "auth-password",
                            Input {
                                input_type: "{password_type}",
                                name: "password",
                                label: "Password",
                                placeholder: "Enter your password",
                                value: password(),
                                required: true,
                                error: field_errors().get("password").cloned().unwrap_or_default(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            button {
                                class: "auth-password-toggle",
                                r#type: "button",
                                "aria-label": if show_password() { "Hide password" } else { "Show password" },
                                onclick: move |_| show_password.toggle(),
                                if show_password() {
                                    Icon::<LdEyeOff> { icon: LdEyeOff, width: 18, height: 18 }
                                } else {
                                    Icon::<LdEye> { icon: LdEye, width: 18, height: 18 }
                                }
                            }
                        }

                        Button { button_type: "submit", size: ButtonSize::Lg, class: "auth-submit",
                            "Sign In as {role().display_name()}"
                        }
                    }

                    p { class: "auth-demo-note",
                        "Demo Credentials: Use any email/password combination"
                    }
                }
            }
        }
    }
}
