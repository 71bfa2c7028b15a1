//! Category Tabs Component
//!
//! Tab row for the product grid filter.

use leptos::prelude::*;

use crate::catalog::CategoryFilter;

#[component]
pub fn CategoryTabs(
    selected: ReadSignal<CategoryFilter>,
    set_selected: WriteSignal<CategoryFilter>,
) -> impl IntoView {
    view! {
        <div class="flex justify-center space-x-8 mb-12 border-b border-stone-200 pb-4 overflow-x-auto">
            {CategoryFilter::TABS.iter().map(|tab| {
                let tab = *tab;
                let is_selected = move || selected.get() == tab;
                view! {
                    <button
                        type="button"
                        class=move || {
                            if is_selected() {
                                "text-sm uppercase tracking-widest pb-4 border-b-2 transition-colors whitespace-nowrap border-ink-black text-ink-black"
                            } else {
                                "text-sm uppercase tracking-widest pb-4 border-b-2 transition-colors whitespace-nowrap border-transparent text-stone-400 hover:text-ink-grey"
                            }
                        }
                        on:click=move |_| set_selected.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
