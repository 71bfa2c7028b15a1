//! Workshop Card Component
//!
//! Image and details side by side; `reversed` flips the sides so the
//! listing alternates.

use leptos::prelude::*;

use crate::catalog::Workshop;

#[component]
pub fn WorkshopCard(workshop: &'static Workshop, reversed: bool) -> impl IntoView {
    let row_class = if reversed {
        "flex flex-col md:flex-row-reverse gap-8 md:gap-12 items-center"
    } else {
        "flex flex-col md:flex-row gap-8 md:gap-12 items-center"
    };

    view! {
        <div class=row_class>
            <div class="w-full md:w-1/2">
                <div class="relative overflow-hidden aspect-video shadow-lg">
                    <img
                        src=workshop.image
                        alt=workshop.title
                        class="w-full h-full object-cover transition-transform duration-700 hover:scale-105"
                    />
                </div>
            </div>
            <div class="w-full md:w-1/2 space-y-4">
                <div class="flex flex-wrap gap-2">
                    {workshop.tags.iter().map(|tag| view! {
                        <span class="px-3 py-1 bg-stone-100 text-stone-500 text-[10px] uppercase tracking-wider rounded-full">
                            {*tag}
                        </span>
                    }).collect_view()}
                </div>
                <div>
                    <h2 class="text-2xl font-serif text-ink-black">{workshop.title}</h2>
                    <h3 class="text-base text-stone-400 font-serif mb-2">{workshop.title_cn}</h3>
                </div>
                <p class="text-ink-grey font-light leading-relaxed">{workshop.description}</p>
                <div class="bg-stone-50 p-4 border-l-2 border-tea-brown space-y-2 text-sm text-stone-600">
                    <p><strong class="text-ink-black">"Learn:"</strong> " " {workshop.learn}</p>
                    <div class="flex justify-between items-center pt-2">
                        <span><strong class="text-ink-black">"Duration:"</strong> " " {workshop.duration}</span>
                        <span class="text-lg font-serif text-tea-brown">{workshop.price}</span>
                    </div>
                </div>
                <button
                    type="button"
                    class="px-6 py-2 border border-ink-black text-ink-black text-xs uppercase tracking-widest hover:bg-ink-black hover:text-white transition-colors"
                >
                    "Book Now"
                </button>
            </div>
        </div>
    }
}
