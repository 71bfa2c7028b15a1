//! Product Card Component
//!
//! One tile of the product grid.

use leptos::prelude::*;

use crate::catalog::Product;
use crate::components::icons::ShoppingBagIcon;

#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    view! {
        <div class="product-card group cursor-pointer" data-product-id=product.id>
            <div class="relative aspect-square overflow-hidden bg-stone-100 mb-4">
                <img
                    src=product.image
                    alt=product.name
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                />
                <div class="absolute inset-0 bg-black/0 group-hover:bg-black/5 transition-colors" />
                <button
                    type="button"
                    aria-label="Add to bag"
                    class="absolute bottom-4 right-4 bg-white text-ink-black p-2 rounded-full shadow-md opacity-0 translate-y-2 group-hover:opacity-100 group-hover:translate-y-0 transition-all duration-300"
                >
                    <ShoppingBagIcon />
                </button>
            </div>
            <h3 class="text-lg font-serif text-ink-black group-hover:text-tea-brown transition-colors">
                {product.name}
            </h3>
            <p class="text-xs text-stone-400 mb-1">{product.name_cn}</p>
            <p class="text-sm font-medium text-ink-grey">{product.price}</p>
        </div>
    }
}
