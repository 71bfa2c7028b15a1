//! Our story page.

use leptos::prelude::*;

use crate::components::icons::{CoffeeIcon, LeafIcon, PenToolIcon};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="animate-fade-in">
            <div class="max-w-4xl mx-auto px-6 py-20 md:py-32">
                <div class="text-center mb-16">
                    <span class="text-tea-brown uppercase tracking-[0.2em] text-xs font-bold mb-4 block">"Our Story"</span>
                    <h1 class="text-4xl md:text-6xl font-serif text-ink-black mb-6">"Between Ink & Tea"</h1>
                    <div class="w-20 h-1 bg-stone-200 mx-auto"></div>
                </div>

                <div class="prose prose-stone mx-auto text-center md:text-left">
                    <p class="text-lg leading-relaxed text-ink-grey mb-8 font-light">
                        "Founded by a former architect with a deep-rooted passion for Chinese heritage, "
                        <strong>"One Sip One Brush"</strong>
                        " was born from a simple desire: to find stillness in a chaotic world."
                    </p>

                    <div class="my-12 relative">
                        <img src="/images/about/artist-work.jpg" alt="Founder working" class="w-full h-auto shadow-sm" />
                        <p class="text-center text-xs text-stone-400 mt-2 italic">"Capturing the moment of creation"</p>
                    </div>

                    <h3 class="text-2xl font-serif text-ink-black mt-12 mb-4 text-center">"Philosophy"</h3>
                    <p class="text-ink-grey leading-relaxed mb-8 text-center max-w-2xl mx-auto">
                        "We believe that art is not just about the final product, but the process. Just as tea requires patience to brew, true creativity requires a quiet mind. Our mission is to make the sophisticated beauty of Chinese slow-living culture accessible to families in North America, bridging cultures through the universal language of art."
                    </p>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mt-16 text-center">
                        <div class="p-6 bg-stone-50">
                            <PenToolIcon class="mx-auto mb-4 text-tea-brown" />
                            <h4 class="font-serif text-lg mb-2">"Craftsmanship"</h4>
                            <p class="text-sm text-stone-500">"Dedication to handmade quality."</p>
                        </div>
                        <div class="p-6 bg-stone-50">
                            <CoffeeIcon class="mx-auto mb-4 text-tea-brown" />
                            <h4 class="font-serif text-lg mb-2">"Slow Living"</h4>
                            <p class="text-sm text-stone-500">"Savoring every moment."</p>
                        </div>
                        <div class="p-6 bg-stone-50">
                            <LeafIcon class="mx-auto mb-4 text-tea-brown" />
                            <h4 class="font-serif text-lg mb-2">"Culture"</h4>
                            <p class="text-sm text-stone-500">"Bridging East and West."</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
