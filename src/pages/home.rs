//! Public landing page, shown at `/` when nobody is signed in.

use leptos::prelude::*;

use crate::routes::RouteName;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Welcome to Rustle"</h1>
            <p>"This is your main landing page."</p>
            <a href=RouteName::Login.path() class="home-page__login">
                "Go to Login"
            </a>
        </div>
    }
}
