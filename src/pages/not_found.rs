//! Page shown for fragments that match no route.

use leptos::prelude::*;

use crate::router::Route;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="animate-fade-in min-h-[60vh] flex flex-col items-center justify-center px-4 text-center">
            <span class="text-tea-brown uppercase tracking-[0.2em] text-xs font-bold mb-4 block">"404"</span>
            <h1 class="text-4xl font-serif text-ink-black mb-4">"Page Not Found"</h1>
            <p class="text-ink-grey mb-8 font-light">"The page you're looking for doesn't exist."</p>
            <a href=Route::Home.href() class="text-tea-brown font-serif italic text-lg hover:underline">
                "Back to home \u{2192}"
            </a>
        </div>
    }
}
