//! Landing page: hero, philosophy, feature cards, founder teaser and the
//! newsletter banner.

use leptos::prelude::*;

use crate::components::icons::{ArrowRightIcon, LeafIcon};
use crate::components::NewsletterSignup;
use crate::config::use_site_config;
use crate::newsletter::Placement;
use crate::router::Route;

/// A linked image tile in the feature grid
struct Feature {
    route: Route,
    image: &'static str,
    alt: &'static str,
    title: &'static str,
    subtitle: &'static str,
    cta: &'static str,
    /// Middle card sits higher on wide screens
    raised: bool,
}

const FEATURES: [Feature; 3] = [
    Feature {
        route: Route::Products,
        image: "/images/hero/crafts-1.jpg",
        alt: "DIY Kits",
        title: "DIY Kits",
        subtitle: "Cultural Crafts at Home",
        cta: "Shop Now",
        raised: false,
    },
    Feature {
        route: Route::Workshops,
        image: "/images/hero/kids-art.jpg",
        alt: "Kids Workshops",
        title: "Workshops",
        subtitle: "Kids & Parents",
        cta: "Book Class",
        raised: true,
    },
    Feature {
        route: Route::Workshops,
        image: "/images/hero/tea-set.jpg",
        alt: "Adult Slow Living",
        title: "Slow Living",
        subtitle: "Adult Art Sessions",
        cta: "Learn More",
        raised: false,
    },
];

#[component]
pub fn Home() -> impl IntoView {
    let config = use_site_config();

    view! {
        <div class="animate-fade-in">
            // Hero
            <div class="relative w-full h-[85vh] flex items-center justify-center overflow-hidden">
                <div class="absolute inset-0 z-0">
                    <img
                        src="/images/hero/tea-ceremony.jpg"
                        alt="Chinese Tea Ceremony"
                        class="w-full h-full object-cover opacity-90"
                    />
                    <div class="absolute inset-0 bg-stone-900/20 mix-blend-multiply" />
                    <div class="absolute inset-0 bg-gradient-to-t from-rice-white via-transparent to-transparent" />
                </div>
                <div class="relative z-10 text-center px-4 max-w-4xl mx-auto">
                    <h2 class="text-sm md:text-base text-white tracking-[0.3em] uppercase mb-4 drop-shadow-md">
                        "Oriental Aesthetics · Tea · Ink · Slow Living"
                    </h2>
                    <h1 class="text-5xl md:text-7xl font-serif text-white font-medium mb-2 drop-shadow-lg leading-tight">
                        "One Sip " <br class="md:hidden" /> "One Brush"
                    </h1>
                    <p class="text-2xl md:text-3xl font-serif text-white/90 font-light mb-8">{config.brand_cn}</p>
                    <p class="text-white/90 text-lg md:text-xl font-light mb-10 max-w-2xl mx-auto drop-shadow-sm">
                        "We bring peaceful Chinese lifestyle and art experiences to families in North America."
                    </p>
                    <div class="flex flex-col sm:flex-row justify-center gap-4">
                        <a
                            href=Route::Workshops.href()
                            class="px-8 py-3 bg-white/90 hover:bg-white text-ink-black text-sm uppercase tracking-widest transition-all duration-300 backdrop-blur-sm"
                        >
                            "Join a Workshop"
                        </a>
                        <a
                            href=Route::Products.href()
                            class="px-8 py-3 bg-ink-black/80 hover:bg-ink-black text-white text-sm uppercase tracking-widest transition-all duration-300 backdrop-blur-sm"
                        >
                            "Shop Kits"
                        </a>
                    </div>
                </div>
            </div>

            // Philosophy
            <section class="py-20 md:py-28 px-6 bg-rice-white text-center">
                <div class="max-w-2xl mx-auto">
                    <LeafIcon class="mx-auto text-tea-brown mb-6" />
                    <h2 class="text-3xl md:text-4xl font-serif text-ink-black mb-6">"Quiet Strength in Slow Living"</h2>
                    <p class="text-ink-grey leading-relaxed text-lg font-light mb-8">
                        "In a fast-paced world, we offer a sanctuary of creativity. Our workshops and kits are designed not just to make art, but to cultivate patience, focus, and inner peace through the timeless traditions of Chinese aesthetics."
                    </p>
                    <p class="text-tea-brown text-sm font-serif italic">
                        "\"Art and tea bring quiet strength and emotional comfort\""
                    </p>
                </div>
            </section>

            // Feature cards
            <section class="py-16 px-4 md:px-8 max-w-7xl mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {FEATURES.iter().map(|feature| {
                        let card_class = if feature.raised {
                            "group block relative overflow-hidden aspect-[3/4] md:aspect-[4/5] md:-mt-12"
                        } else {
                            "group block relative overflow-hidden aspect-[3/4] md:aspect-[4/5]"
                        };
                        view! {
                            <a href=feature.route.href() class=card_class>
                                <img
                                    src=feature.image
                                    alt=feature.alt
                                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-105 grayscale-[20%] group-hover:grayscale-0"
                                />
                                <div class="absolute inset-0 bg-black/20 group-hover:bg-black/10 transition-colors" />
                                <div class="absolute bottom-8 left-8 text-white">
                                    <h3 class="text-2xl font-serif mb-1">{feature.title}</h3>
                                    <p class="text-xs uppercase tracking-widest opacity-80 mb-2">{feature.subtitle}</p>
                                    <span class="inline-flex items-center text-sm border-b border-white/50 pb-1">
                                        {feature.cta}
                                        <ArrowRightIcon class="ml-2" />
                                    </span>
                                </div>
                            </a>
                        }
                    }).collect_view()}
                </div>
            </section>

            // Founder teaser
            <section class="py-20 bg-paper-beige">
                <div class="max-w-7xl mx-auto px-6 md:px-12 flex flex-col md:flex-row items-center gap-12">
                    <div class="w-full md:w-1/2">
                        <img
                            src="/images/about/founder-portrait.jpg"
                            alt="Founder"
                            class="w-full h-auto object-cover shadow-xl max-w-md mx-auto"
                        />
                    </div>
                    <div class="w-full md:w-1/2 md:pl-10">
                        <h2 class="text-3xl font-serif text-ink-black mb-4">"Meet the Founder"</h2>
                        <p class="text-ink-grey mb-6 leading-relaxed">
                            "With a background in architecture and a deep passion for traditional Chinese culture, I founded One Sip One Brush to share the therapeutic power of art."
                        </p>
                        <a href=Route::About.href() class="text-tea-brown font-serif italic text-lg hover:underline">
                            "Read the full story \u{2192}"
                        </a>
                    </div>
                </div>
            </section>

            <NewsletterSignup placement=Placement::Banner />
        </div>
    }
}
