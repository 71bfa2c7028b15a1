//! Navigation Bar Component
//!
//! Sticky top bar with brand, desktop links and the mobile menu overlay.

use leptos::prelude::*;

use crate::components::icons::{CloseIcon, MenuIcon};
use crate::config::use_site_config;
use crate::navigation::{MenuState, NAV_LINKS};
use crate::router::use_location;

#[component]
pub fn Navbar() -> impl IntoView {
    let config = use_site_config();
    let location = use_location();
    let (menu, set_menu) = signal(MenuState::default());

    // Close mobile menu on every navigation
    Effect::new(move |_| {
        let _ = location.visits.get();
        set_menu.update(MenuState::navigated);
    });

    view! {
        <nav class="sticky top-0 z-50 w-full bg-rice-white/90 backdrop-blur-sm border-b border-stone-100 transition-all duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-20">
                    <a href="#/" class="flex flex-col items-start group">
                        <span class="text-2xl font-serif font-bold text-ink-black tracking-wide group-hover:text-tea-brown transition-colors">
                            {config.brand}
                        </span>
                        <span class="text-xs font-serif text-ink-grey tracking-[0.2em] mt-0.5">
                            {config.brand_cn}
                        </span>
                    </a>

                    // Desktop
                    <div class="hidden md:flex space-x-8 items-center">
                        {NAV_LINKS.iter().map(|link| {
                            let route = link.route;
                            let link_class = move || {
                                if location.is_at(route) {
                                    "flex flex-col items-center group text-tea-brown"
                                } else {
                                    "flex flex-col items-center group text-ink-grey"
                                }
                            };
                            view! {
                                <a href=route.href() class=link_class>
                                    <span class="text-sm uppercase tracking-widest font-medium group-hover:text-tea-brown transition-colors">
                                        {link.label}
                                    </span>
                                    <span class="text-[10px] text-stone-400 mt-1 group-hover:text-tea-light transition-colors">
                                        {link.label_cn}
                                    </span>
                                </a>
                            }
                        }).collect_view()}
                        <a
                            href=config.shop_url
                            target="_blank"
                            rel="noreferrer"
                            class="ml-4 px-4 py-2 bg-ink-black text-white text-xs uppercase tracking-widest hover:bg-tea-brown transition-colors"
                        >
                            "Shop"
                        </a>
                    </div>

                    // Mobile toggle
                    <div class="md:hidden flex items-center">
                        <button
                            data-testid="menu-toggle"
                            aria-label="Toggle menu"
                            class="text-ink-black hover:text-tea-brown focus:outline-none"
                            on:click=move |_| set_menu.update(MenuState::toggle)
                        >
                            <Show when=move || menu.get().is_open() fallback=|| view! { <MenuIcon /> }>
                                <CloseIcon />
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu.get().is_open()>
                <div data-testid="mobile-menu" class="md:hidden bg-rice-white border-b border-stone-100 absolute w-full left-0 animate-fade-in-down shadow-lg">
                    <div class="px-4 pt-2 pb-6 space-y-4">
                        {NAV_LINKS.iter().map(|link| view! {
                            <a
                                href=link.route.href()
                                class="block text-center py-2"
                                on:click=move |_| set_menu.update(MenuState::navigated)
                            >
                                <span class="block text-lg text-ink-black font-serif">{link.label}</span>
                                <span class="block text-xs text-stone-400">{link.label_cn}</span>
                            </a>
                        }).collect_view()}
                        <div class="flex justify-center pt-4">
                            <a
                                href=config.shop_url
                                target="_blank"
                                rel="noreferrer"
                                class="px-6 py-2 bg-ink-black text-white text-sm uppercase tracking-widest"
                            >
                                "Online Shop"
                            </a>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
