use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCube, FaLock, FaRightToBracket, FaUser},
    Icon,
};
use dioxus_logger::tracing;

use crate::{
    client::{
        api::login,
        component::{page::LoadingPage, Notification},
        constant::{SITE_NAME, SITE_TAGLINE},
        model::session::ApiState,
        router::Route,
        store::session::use_session,
    },
    model::user::LoginModel,
};

const REQUIRED_FIELD: &str = "This field is required";
const LOGIN_FAILED: &str = "Login failed. Check your username and password.";

/// Per-field validation messages for the login form.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoginErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn check(credentials: &LoginModel) -> Self {
        let required = |value: &str| value.is_empty().then_some(REQUIRED_FIELD);

        Self {
            username: required(&credentials.username),
            password: required(&credentials.password),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(LoginErrors::default);
    let mut submitting = use_signal(|| false);
    let mut notification = use_signal(|| None::<String>);

    // Handle redirect for authenticated users
    use_effect(move || {
        if session.state() == ApiState::Ready && session.user().is_some() {
            nav.push(Route::Dashboard {});
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let credentials = LoginModel {
            username: username(),
            password: password(),
        };
        let validation = LoginErrors::check(&credentials);
        errors.set(validation);
        if !validation.is_empty() {
            return;
        }

        submitting.set(true);
        spawn(async move {
            match login(&credentials).await {
                Ok(user) => {
                    tracing::debug!("User {} ({}) logged in", user.username, user.id);
                    session.reloader().reload().await;
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::error!("Failed to log in (status {:?}): {}", err.status(), err);
                    notification.set(Some(LOGIN_FAILED.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    let field_errors = errors();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if session.user().is_some() {
            // Render nothing useful while redirecting
            LoadingPage {}
        } else {
            div {
                class: "centered",
                div {
                    class: "stack",
                    style: "max-width: 512px; width: 90vw;",
                    div {
                        class: "card navbar-brand",
                        Icon {
                            width: 48,
                            height: 48,
                            icon: FaCube
                        }
                        div {
                            h1 { {SITE_NAME} }
                            p { {SITE_TAGLINE} }
                        }
                    }
                    form {
                        class: "card stack",
                        onsubmit: onsubmit,
                        div {
                            class: "navbar-brand",
                            Icon {
                                width: 32,
                                height: 32,
                                icon: FaRightToBracket
                            }
                            h3 { "Login" }
                        }
                        label {
                            class: "stack",
                            span {
                                class: "navbar-brand",
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaUser
                                }
                                "Username"
                            }
                            input {
                                r#type: "text",
                                name: "username",
                                autocomplete: "username",
                                value: "{username}",
                                oninput: move |evt| username.set(evt.value()),
                            }
                            if let Some(message) = field_errors.username {
                                span { class: "field-error", {message} }
                            }
                        }
                        label {
                            class: "stack",
                            span {
                                class: "navbar-brand",
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaLock
                                }
                                "Password"
                            }
                            input {
                                r#type: "password",
                                name: "password",
                                autocomplete: "current-password",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                            if let Some(message) = field_errors.password {
                                span { class: "field-error", {message} }
                            }
                        }
                        div {
                            button {
                                class: "btn",
                                r#type: "submit",
                                disabled: submitting(),
                                Icon {
                                    width: 20,
                                    height: 20,
                                    icon: FaRightToBracket
                                }
                                "Login"
                            }
                        }
                    }
                }
            }
        }
        Notification { message: notification }
    }
}
