//! Curated shop: category tabs over the product grid.

use leptos::prelude::*;

use crate::catalog::{filter_products, CategoryFilter, PRODUCTS};
use crate::components::{CategoryTabs, ProductCard};

#[component]
pub fn Products() -> impl IntoView {
    let (selected, set_selected) = signal(CategoryFilter::default());
    let visible = move || filter_products(&PRODUCTS, selected.get());

    view! {
        <div class="pt-12 pb-24 px-4 max-w-7xl mx-auto animate-fade-in">
            <div class="text-center mb-16">
                <h1 class="text-4xl font-serif text-ink-black mb-2">"Curated Shop"</h1>
                <p class="text-ink-grey">"Tools for creativity and cultural gifts."</p>
            </div>

            <CategoryTabs selected=selected set_selected=set_selected />

            <div data-testid="product-grid" class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-x-8 gap-y-12">
                <For
                    each=visible
                    key=|product| product.id
                    children=move |product| view! { <ProductCard product=product /> }
                />
            </div>
        </div>
    }
}
