use crate::domain::Price;
use maud::{html, Markup};

pub mod error;

pub use error::error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn price_tag(price: &Price, label: &str) -> Markup {
    html! {
        span class="price" {
            @if price.is_available() {
                "₹ " (price.grouped())
            } @else {
                (price.grouped())
            }
        }
        @if !label.is_empty() {
            " "
            span class="price-label text-xs bg-gray-100 px-2 py-1 rounded-full" { (label) }
        }
    }
}
