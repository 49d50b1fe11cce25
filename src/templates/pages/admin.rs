use crate::domain::Kind;
use crate::pipeline::ListingOutcome;
use crate::templates::components::price_tag;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// One identifier on the admin list, resolved or not.
pub struct AdminRow {
    pub identifier: String,
    pub kind: Kind,
    pub outcome: Result<ListingOutcome, String>,
}

pub fn admin_properties_page(rows: &[AdminRow]) -> Markup {
    desktop_layout(
        "Admin Properties",
        html! {
            main class="container" {
                h1 { "Admin Properties" }

                div class="card" style="margin-bottom: 2rem;" {
                    form action="/admin/properties" method="get" style="display: flex; gap: 10px; align-items: center;" {
                        input type="text" name="ids" placeholder="Comma-separated property IDs" style="padding: 8px; flex: 1; border: 1px solid #ccc; border-radius: 4px;";
                        button type="submit" style="padding: 8px 16px; background: #3b82f6; color: white; border: none; border-radius: 4px; cursor: pointer;" { "Load" }
                    }
                }

                @if rows.is_empty() {
                    p class="text-gray-500" { "Enter one or more property IDs to inspect them." }
                } @else {
                    div style="overflow-x: auto;" {
                        table style="width: 100%; border-collapse: collapse;" {
                            thead {
                                tr {
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "ID" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Kind" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Shape" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Title" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Address" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Price" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Photos" }
                                }
                            }
                            tbody {
                                @for row in rows {
                                    tr {
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                            a href=(format!("/property/{}", row.identifier)) { code { (row.identifier) } }
                                        }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (row.kind.to_string()) }
                                        @match &row.outcome {
                                            Ok(outcome) => {
                                                td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (outcome.variant) }
                                                td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (outcome.view.title) }
                                                td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (outcome.view.address_line) }
                                                td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                                    (price_tag(&outcome.view.primary_price, &outcome.view.price_label))
                                                }
                                                td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (outcome.view.images.len()) }
                                            },
                                            Err(message) => {
                                                td colspan="5" style="padding: 8px; border-bottom: 1px solid #f3f4f6; color: #dc2626;" {
                                                    "Could not load: " (message)
                                                }
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
