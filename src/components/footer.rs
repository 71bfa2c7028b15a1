//! Site Footer Component

use leptos::prelude::*;

use crate::components::icons::{InstagramIcon, MailIcon, ShoppingBagIcon};
use crate::components::NewsletterSignup;
use crate::config::use_site_config;
use crate::newsletter::Placement;
use crate::router::Route;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_site_config();
    let year = js_sys::Date::new_0().get_full_year();
    let mailto = format!("mailto:{}", config.contact_email);

    view! {
        <footer class="bg-paper-beige pt-16 pb-8 border-t border-stone-200 mt-auto">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-12 mb-12">
                    <div class="col-span-1 md:col-span-2">
                        <h3 class="text-xl font-serif font-bold text-ink-black mb-2">{config.brand}</h3>
                        <p class="text-sm text-ink-grey mb-6 max-w-sm">
                            "Exploring the quiet beauty of Chinese slow living through tea, ink, and handmade crafts."
                            <br />
                            <span class="text-xs text-stone-400 mt-1 block">"体验东方慢生活美学"</span>
                        </p>
                        <div class="flex space-x-4">
                            <a href="#" aria-label="Instagram" class="text-ink-grey hover:text-tea-brown transition-colors"><InstagramIcon /></a>
                            <a href=mailto aria-label="Email" class="text-ink-grey hover:text-tea-brown transition-colors"><MailIcon /></a>
                            <a href=config.shop_url target="_blank" rel="noreferrer" aria-label="Shop" class="text-ink-grey hover:text-tea-brown transition-colors"><ShoppingBagIcon /></a>
                        </div>
                    </div>
                    <div>
                        <h4 class="text-sm font-bold uppercase tracking-widest text-ink-black mb-4">"Explore"</h4>
                        <ul class="space-y-2 text-sm text-ink-grey">
                            <li><a href=Route::Products.href() class="hover:text-tea-brown">"DIY Kits"</a></li>
                            <li><a href=Route::Workshops.href() class="hover:text-tea-brown">"Workshops"</a></li>
                            <li><a href=Route::About.href() class="hover:text-tea-brown">"Our Story"</a></li>
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-sm font-bold uppercase tracking-widest text-ink-black mb-4">"Newsletter"</h4>
                        <p class="text-xs text-stone-500 mb-3">"Join our community for updates on events."</p>
                        <NewsletterSignup placement=Placement::Footer />
                    </div>
                </div>
                <div class="border-t border-stone-300 pt-8 text-center text-xs text-stone-500 font-sans">
                    {format!("\u{00A9} {} {}. All rights reserved.", year, config.brand)}
                </div>
            </div>
        </footer>
    }
}
