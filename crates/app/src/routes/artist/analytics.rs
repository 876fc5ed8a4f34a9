use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdDollarSign, LdDownload, LdGlobe, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{mock_data, Share, TimeRange, ALL_TIME_RANGES};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, FormSelect, Meter,
    PageActions, PageHeader, PageTitle, StatCard,
};

use crate::format_helpers::{format_count, format_money, format_percent};

/// Average royalty per stream, in dollars.
fn per_stream_rate(royalties: f64, streams: u64) -> f64 {
    if streams == 0 {
        0.0
    } else {
        royalties / streams as f64
    }
}

#[component]
fn ShareList(title: String, shares: Vec<Share>) -> Element {
    rsx! {
        Card {
            CardHeader { class: "artist-card-header",
                CardTitle { "{title}" }
                Icon::<LdGlobe> { icon: LdGlobe, width: 20, height: 20 }
            }
            CardContent {
                for share in shares.iter() {
                    div { key: "{share.label}", class: "artist-share-row",
                        div { class: "artist-share-label",
                            span { "{share.label}" }
                            span { class: "muted",
                                "{format_count(share.streams)} \u{00b7} {format_percent(share.percentage)}"
                            }
                        }
                        Meter { percent: share.percentage }
                    }
                }
            }
        }
    }
}

/// Performance and royalty breakdowns. The time-range selector is
/// presentational; the sample data covers a fixed six months.
#[component]
pub fn Analytics() -> Element {
    let mut range = use_signal(TimeRange::default);
    let analytics = mock_data::analytics();
    let rate = per_stream_rate(analytics.total_royalties, analytics.total_streams);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./artist.css") }

        div { class: "page",
            PageHeader {
                PageTitle { subtitle: "Track your music performance and earnings across all platforms.",
                    "Analytics & Royalties"
                }
                PageActions {
                    FormSelect {
                        value: range().as_key().to_string(),
                        onchange: move |e: FormEvent| {
                            let next = TimeRange::from_key(&e.value());
                            tracing::debug!(range = next.as_key(), "Analytics range changed");
                            range.set(next);
                        },
                        for choice in ALL_TIME_RANGES.iter() {
                            option { key: "{choice.as_key()}", value: choice.as_key(), "{choice.label()}" }
                        }
                    }
                    Button { variant: ButtonVariant::Outline,
                        Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                        "Export Report"
                    }
                }
            }

            div { class: "page-grid stats",
                StatCard {
                    label: "Total Streams",
                    value: format_count(analytics.total_streams),
                    trend: "{range().label()}",
                    Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 24, height: 24 }
                }
                StatCard {
                    label: "Downloads",
                    value: format_count(analytics.total_downloads),
                    trend: "{range().label()}",
                    Icon::<LdDownload> { icon: LdDownload, width: 24, height: 24 }
                }
                StatCard {
                    label: "Royalties Earned",
                    value: format_money(analytics.total_royalties),
                    trend: "{range().label()}",
                    Icon::<LdDollarSign> { icon: LdDollarSign, width: 24, height: 24 }
                }
                StatCard {
                    label: "Per-Stream Rate",
                    value: format!("${rate:.4}"),
                    Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 }
                }
            }

            Card { class: "artist-section",
                CardHeader { CardTitle { "Monthly Streams" } }
                CardContent {
                    for month in analytics.monthly.iter() {
                        div { key: "{month.month}", class: "artist-month-row",
                            span { class: "artist-month-label", "{month.month}" }
                            Meter { percent: analytics.bar_width(month) }
                            span { class: "artist-month-value", "{format_count(month.streams)}" }
                            span { class: "artist-month-money", "{format_money(month.royalties)}" }
                        }
                    }
                }
            }

            div { class: "page-grid two-col artist-section",
                ShareList { title: "Top Platforms", shares: mock_data::platform_shares() }
                ShareList { title: "Top Regions", shares: mock_data::region_shares() }
            }
        }
    }
}
