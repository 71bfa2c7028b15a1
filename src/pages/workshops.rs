//! Workshops & events listing.

use leptos::prelude::*;

use crate::catalog::WORKSHOPS;
use crate::components::WorkshopCard;

#[component]
pub fn Workshops() -> impl IntoView {
    view! {
        <div class="animate-fade-in">
            <div class="bg-paper-beige py-20 text-center px-4">
                <h1 class="text-4xl md:text-5xl font-serif text-ink-black mb-4">"Workshops & Events"</h1>
                <p class="text-ink-grey max-w-2xl mx-auto">
                    "Immersive experiences designed to slow down time and spark creativity."
                    <br />
                    <span class="text-sm text-stone-400 mt-2 block">"沉浸式艺术体验"</span>
                </p>
            </div>

            <div class="max-w-5xl mx-auto px-4 py-16 space-y-16">
                {WORKSHOPS.iter().enumerate().map(|(idx, workshop)| {
                    let reversed = idx % 2 == 1;
                    view! { <WorkshopCard workshop=workshop reversed=reversed /> }
                }).collect_view()}
            </div>
        </div>
    }
}
