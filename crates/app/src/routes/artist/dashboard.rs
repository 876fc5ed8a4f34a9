use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdDollarSign, LdDownload, LdMusic, LdPlay};
use dioxus_free_icons::Icon;
use shared_types::{mock_data, recent_tracks};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, Meter, PageHeader, PageTitle, StatCard,
};

use super::StatusBadge;
use crate::format_helpers::{format_compact, format_count, format_datetime_human, format_money};
use crate::session::use_session;

const RECENT_RELEASES: usize = 3;
const RECENT_MONTHS: usize = 6;

/// Artist home: totals, monthly performance, activity feed and latest releases.
#[component]
pub fn ArtistDashboard() -> Element {
    let session = use_session();
    let greeting = session
        .current_identity()
        .map(|identity| format!("Welcome back, {}!", identity.name()))
        .unwrap_or_else(|| "Welcome back!".to_string());

    let analytics = mock_data::analytics();
    let notifications = mock_data::notifications();
    let tracks = mock_data::tracks();
    let recent = recent_tracks(&tracks, RECENT_RELEASES);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./artist.css") }

        div { class: "page",
            PageHeader {
                PageTitle { subtitle: "{greeting} Here's your music performance overview.",
                    "Artist Dashboard"
                }
            }

            div { class: "page-grid stats",
                StatCard {
                    label: "Total Streams",
                    value: format_count(analytics.total_streams),
                    trend: "+12% from last month",
                    Icon::<LdPlay> { icon: LdPlay, width: 24, height: 24 }
                }
                StatCard {
                    label: "Total Downloads",
                    value: format_count(analytics.total_downloads),
                    trend: "+8% from last month",
                    Icon::<LdDownload> { icon: LdDownload, width: 24, height: 24 }
                }
                StatCard {
                    label: "Total Royalties",
                    value: format_money(analytics.total_royalties),
                    trend: "+15% from last month",
                    Icon::<LdDollarSign> { icon: LdDollarSign, width: 24, height: 24 }
                }
            }

            div { class: "page-grid two-col artist-section",
                Card {
                    CardHeader { CardTitle { "Monthly Performance" } }
                    CardContent {
                        for month in analytics.latest_months(RECENT_MONTHS) {
                            div { key: "{month.month}", class: "artist-month-row",
                                span { class: "artist-month-label", "{month.month}" }
                                Meter { percent: analytics.bar_width(month) }
                                span { class: "artist-month-value",
                                    "{format_count(month.streams)} streams"
                                }
                                span { class: "artist-month-money", "{format_money(month.royalties)}" }
                            }
                        }
                    }
                }

                Card {
                    CardHeader { class: "artist-card-header",
                        CardTitle { "Recent Activity" }
                        Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                    }
                    CardContent {
                        for note in notifications.iter() {
                            div {
                                key: "{note.id}",
                                class: "artist-notification",
                                "data-kind": note.kind.as_str(),
                                p { "{note.message}" }
                                p { class: "muted", "{format_datetime_human(note.timestamp)}" }
                            }
                        }
                    }
                }
            }

            Card { class: "artist-section",
                CardHeader { class: "artist-card-header",
                    CardTitle { "Recent Releases" }
                    Icon::<LdMusic> { icon: LdMusic, width: 20, height: 20 }
                }
                CardContent {
                    for track in recent {
                        div { key: "{track.id}", class: "artist-track-row",
                            img { class: "artist-cover", src: "{track.cover_art}", alt: "{track.title}" }
                            div { class: "artist-track-info",
                                h3 { "{track.title}" }
                                p { class: "muted", "{track.artist} \u{2022} {track.genre}" }
                            }
                            div { class: "artist-track-meta",
                                StatusBadge { status: track.status }
                                p { class: "muted", "{format_compact(track.streams)} streams" }
                            }
                        }
                    }
                }
            }
        }
    }
}
