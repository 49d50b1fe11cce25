// templates/pages/home.rs

use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                h1 { "Find a property" }

                (card("Look up a listing", html! {
                    form action="/property" method="get" style="display: flex; gap: 10px; align-items: center;" {
                        label class="sr-only" for="id" { "Property ID" }
                        input
                            type="text"
                            id="id"
                            name="id"
                            placeholder="e.g. PRPRESSEPL0000001"
                            minlength="10"
                            style="padding: 8px; font-size: 16px;"
                            required;
                        button type="submit" class="primary" { "View" }
                    }
                }))
            }
        },
    )
}
