//! Contact page: details plus the inquiry form.
//!
//! The form has no backend yet; submitting it only suppresses the browser's
//! default full-page submit so the current route survives.

use leptos::prelude::*;

use crate::components::icons::{InstagramIcon, MailIcon};
use crate::config::use_site_config;

pub const INQUIRY_SUBJECTS: [&str; 4] = [
    "General Inquiry",
    "Workshop Booking",
    "Collaboration",
    "Product Question",
];

#[component]
pub fn Contact() -> impl IntoView {
    let config = use_site_config();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        log::debug!("[Contact] inquiry form submitted; no handler configured");
    };

    view! {
        <div class="animate-fade-in bg-rice-white min-h-[80vh] flex items-center">
            <div class="max-w-6xl mx-auto px-4 py-16 w-full grid grid-cols-1 md:grid-cols-2 gap-16">
                <div class="flex flex-col justify-center">
                    <h1 class="text-4xl font-serif text-ink-black mb-6">"Get in Touch"</h1>
                    <p class="text-ink-grey mb-8 font-light">
                        "Interested in a private workshop, a collaboration, or just want to say hello? We'd love to hear from you."
                    </p>
                    <div class="space-y-6">
                        <div class="flex items-start space-x-4">
                            <MailIcon class="mt-1 text-tea-brown" />
                            <div>
                                <h4 class="text-sm font-bold uppercase tracking-widest text-ink-black">"Email"</h4>
                                <p class="text-stone-500">{config.contact_email}</p>
                            </div>
                        </div>
                        <div class="flex items-start space-x-4">
                            <InstagramIcon class="mt-1 text-tea-brown" />
                            <div>
                                <h4 class="text-sm font-bold uppercase tracking-widest text-ink-black">"Socials"</h4>
                                <p class="text-stone-500">{config.social_handle}</p>
                                <p class="text-xs text-stone-400">"Instagram / Xiaohongshu / TikTok"</p>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="bg-white p-8 md:p-12 shadow-sm border border-stone-100">
                    <form class="space-y-6" on:submit=on_submit>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <div>
                                <label class="block text-xs uppercase tracking-widest text-stone-500 mb-2">"Name"</label>
                                <input type="text" name="name" class="w-full bg-stone-50 border border-stone-200 px-4 py-3 text-sm focus:outline-none focus:border-tea-brown transition-colors" />
                            </div>
                            <div>
                                <label class="block text-xs uppercase tracking-widest text-stone-500 mb-2">"Subject"</label>
                                <select name="subject" class="w-full bg-stone-50 border border-stone-200 px-4 py-3 text-sm focus:outline-none focus:border-tea-brown transition-colors text-stone-600">
                                    {INQUIRY_SUBJECTS.iter().map(|subject| view! { <option>{*subject}</option> }).collect_view()}
                                </select>
                            </div>
                        </div>
                        <div>
                            <label class="block text-xs uppercase tracking-widest text-stone-500 mb-2">"Email"</label>
                            <input type="email" name="email" class="w-full bg-stone-50 border border-stone-200 px-4 py-3 text-sm focus:outline-none focus:border-tea-brown transition-colors" />
                        </div>
                        <div>
                            <label class="block text-xs uppercase tracking-widest text-stone-500 mb-2">"Message"</label>
                            <textarea name="message" rows="5" class="w-full bg-stone-50 border border-stone-200 px-4 py-3 text-sm focus:outline-none focus:border-tea-brown transition-colors"></textarea>
                        </div>
                        <button type="submit" class="w-full bg-ink-black text-white text-xs uppercase tracking-widest py-4 hover:bg-tea-brown transition-colors">
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
