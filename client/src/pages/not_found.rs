use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found-page container">
            <h1>"Page not found."</h1>
            <a href="/" class="btn btn-primary">"Back to Home"</a>
        </div>
    }
}
