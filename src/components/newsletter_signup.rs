//! Newsletter Signup Component
//!
//! One signup widget for both the footer and the home-page banner;
//! `placement` only changes copy and styling.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::use_site_config;
use crate::newsletter::{submit_signup, MailingList, Placement, SubscribeForm, SubscribeStatus};

#[component]
pub fn NewsletterSignup(placement: Placement) -> impl IntoView {
    let config = use_site_config();
    let list = MailingList::new(config.subscribe_url);
    let reset_after_ms = config.reset_delay_ms();
    let (form, set_form) = signal(SubscribeForm::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            submit_signup(set_form, &list, placement, move || TimeoutFuture::new(reset_after_ms)).await;
        });
    };

    let busy = move || form.with(SubscribeForm::is_busy);
    let status = move || form.with(SubscribeForm::status);
    let message = move || form.with(|f| f.message().to_string());
    let has_message = move || form.with(|f| !f.message().is_empty());
    let on_input = move |ev: web_sys::Event| set_form.update(|f| f.set_email(event_target_value(&ev)));

    match placement {
        Placement::Footer => view! {
            <form class="flex flex-col space-y-2" on:submit=on_submit>
                <input
                    type="email"
                    placeholder=placement.placeholder()
                    required
                    class="bg-white border border-stone-300 px-3 py-2 text-sm focus:outline-none focus:border-tea-brown disabled:opacity-50"
                    prop:value=move || form.with(|f| f.email().to_string())
                    prop:disabled=busy
                    on:input=on_input
                />
                <button
                    type="submit"
                    class="bg-ink-black text-white text-xs uppercase tracking-widest py-2 hover:bg-tea-brown transition-colors disabled:opacity-50"
                    prop:disabled=busy
                >
                    {move || status().button_label()}
                </button>
                <Show when=has_message>
                    <p class=move || {
                        if status() == SubscribeStatus::Success { "text-xs text-tea-brown" } else { "text-xs text-red-600" }
                    }>
                        {message}
                    </p>
                </Show>
            </form>
        }.into_any(),
        Placement::Banner => view! {
            <section class="py-24 px-4 text-center bg-ink-black text-rice-white">
                <div class="max-w-xl mx-auto">
                    <h2 class="text-3xl font-serif mb-2">"Join Our Community"</h2>
                    <p class="text-stone-400 mb-8 font-light">
                        "Receive early access to seasonal workshops and new DIY kit releases."
                    </p>
                    <form class="flex flex-col sm:flex-row gap-3" on:submit=on_submit>
                        <input
                            type="email"
                            placeholder=placement.placeholder()
                            required
                            class="flex-grow px-4 py-3 bg-stone-800 border border-stone-700 text-white focus:outline-none focus:border-tea-brown disabled:opacity-50"
                            prop:value=move || form.with(|f| f.email().to_string())
                            prop:disabled=busy
                            on:input=on_input
                        />
                        <button
                            type="submit"
                            class="px-8 py-3 bg-tea-brown hover:bg-tea-light hover:text-ink-black transition-colors uppercase tracking-widest text-sm font-medium disabled:opacity-50"
                            prop:disabled=busy
                        >
                            {move || status().button_label()}
                        </button>
                    </form>
                    <Show when=has_message>
                        <p class=move || {
                            if status() == SubscribeStatus::Success { "text-sm mt-4 text-tea-light" } else { "text-sm mt-4 text-red-400" }
                        }>
                            {message}
                        </p>
                    </Show>
                </div>
            </section>
        }.into_any(),
    }
}
