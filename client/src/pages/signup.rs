//! Static sign-up form; shares validation rules with sign-in.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::login::{ACCOUNTS_UNAVAILABLE, validate_login_input};

const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn validate_signup_input(username: &str, email: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() {
        return Err("Choose a username.");
    }
    validate_login_input(email, password)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Use at least 8 characters for the password.");
    }
    Ok(())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let message = match validate_signup_input(&username.get(), &email.get(), &password.get()) {
            Ok(()) => ACCOUNTS_UNAVAILABLE,
            Err(message) => message,
        };
        info.set(message.to_owned());
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign Up"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn auth-button" type="submit">"Sign Up"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
