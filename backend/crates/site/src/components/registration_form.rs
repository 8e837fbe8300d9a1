//! Registration form
//!
//! Markup only. Submission is handled by the auth provider's client
//! script, so the form has no action.

use leptos::prelude::*;

#[component]
pub fn RegistrationForm(#[prop(into)] login_path: String) -> impl IntoView {
    view! {
        <form class="registration-form">
            <label for="name">"Full name"</label>
            <input id="name" name="name" type="text" autocomplete="name" required=true/>
            <label for="email">"Email"</label>
            <input id="email" name="email" type="email" autocomplete="email" required=true/>
            <label for="password">"Password"</label>
            <input
                id="password"
                name="password"
                type="password"
                autocomplete="new-password"
                minlength="8"
                required=true
            />
            <label for="confirm-password">"Confirm password"</label>
            <input
                id="confirm-password"
                name="confirm_password"
                type="password"
                autocomplete="new-password"
                minlength="8"
                required=true
            />
            <button type="submit">"Create account"</button>
            <p>"Already have an account? " <a href=login_path>"Log in"</a></p>
        </form>
    }
}
