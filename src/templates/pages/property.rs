use crate::pipeline::ListingOutcome;
use crate::templates::components::price_tag;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn property_page(outcome: &ListingOutcome) -> Markup {
    let view = &outcome.view;
    let title = if view.title.is_empty() {
        "Untitled listing"
    } else {
        view.title.as_str()
    };

    desktop_layout(
        title,
        html! {
            main class="container" {
                p class="text-xs text-gray-500" {
                    (outcome.kind.to_string()) " · " (outcome.variant) " · " code { (outcome.identifier) }
                }
                h1 { (title) }

                @if view.address_line.is_empty() {
                    p class="text-gray-500" { "Address not provided" }
                } @else {
                    p class="address" { (view.address_line) }
                }

                section class="card" {
                    h3 { "Price" }
                    p { (price_tag(&view.primary_price, &view.price_label)) }
                }

                section class="card" {
                    h3 { "Photos" }
                    @if view.images.is_empty() {
                        p class="text-gray-500" { "No photos yet" }
                    } @else {
                        div class="gallery" style="display: flex; flex-wrap: wrap; gap: 8px;" {
                            @for src in &view.images {
                                img src=(src) alt=(title) loading="lazy" style="width: 240px; height: 160px; object-fit: cover; border-radius: 6px;";
                            }
                        }
                    }
                }

                section class="card" {
                    h3 { "Features" }
                    ul class="features" {
                        @for line in view.feature_lines() {
                            li { (line) }
                        }
                    }
                }
            }
        },
    )
}

pub fn no_data_page(identifier: &str) -> Markup {
    desktop_layout(
        "No data found",
        html! {
            main class="container" {
                h1 { "No data found" }
                p { "We could not find a property with ID " code { (identifier) } "." }
                p { a href="/" { "← Look up another property" } }
            }
        },
    )
}
