use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdDollarSign, LdDownload, LdEye, LdMusic, LdSearch, LdTrendingUp,
};
use dioxus_free_icons::Icon;
use shared_types::{filter_tracks, mock_data, StatusFilter, TrackStatus, ALL_TRACK_STATUSES};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, FormSelect, Input, PageHeader,
    PageTitle, SearchBar,
};

use super::StatusBadge;
use crate::format_helpers::{format_count, format_date_human, format_money};

/// The artist's catalog with search, status filter and an expandable
/// detail panel per track.
#[component]
pub fn MyReleases() -> Element {
    let mut search = use_signal(String::new);
    let mut filter = use_signal(StatusFilter::default);
    let mut expanded = use_signal(|| Option::<String>::None);

    let tracks = mock_data::tracks();
    let visible = filter_tracks(&tracks, &search.read(), filter());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./artist.css") }

        div { class: "page",
            PageHeader {
                PageTitle { subtitle: "Track and manage all your music releases and their performance.",
                    "My Releases"
                }
            }

            SearchBar {
                span { class: "artist-search-icon",
                    Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                }
                Input {
                    placeholder: "Search tracks...",
                    value: search(),
                    on_input: move |e: FormEvent| search.set(e.value()),
                }
                FormSelect {
                    value: filter().as_key().to_string(),
                    onchange: move |e: FormEvent| filter.set(StatusFilter::from_key(&e.value())),
                    option { value: "all", "All Status" }
                    for status in ALL_TRACK_STATUSES.iter() {
                        option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                    }
                }
            }

            if visible.is_empty() {
                div { class: "empty-state",
                    Icon::<LdMusic> { icon: LdMusic, width: 48, height: 48 }
                    h3 { "No releases found" }
                    p { "Try adjusting your search or filter criteria." }
                }
            }

            div { class: "artist-release-list",
                for track in visible {
                    Card { key: "{track.id}", class: "artist-release",
                        CardContent {
                            div { class: "artist-track-row",
                                img { class: "artist-cover large", src: "{track.cover_art}", alt: "{track.title}" }
                                div { class: "artist-track-info",
                                    div { class: "artist-release-title",
                                        div {
                                            h3 { "{track.title}" }
                                            p { class: "muted", "{track.artist}" }
                                        }
                                        StatusBadge { status: track.status }
                                    }
                                    div { class: "artist-release-facts",
                                        span {
                                            Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                                            "{format_date_human(track.upload_date)}"
                                        }
                                        span {
                                            Icon::<LdMusic> { icon: LdMusic, width: 14, height: 14 }
                                            "{track.genre}"
                                        }
                                        span {
                                            Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 14, height: 14 }
                                            "{format_count(track.streams)} streams"
                                        }
                                        span {
                                            Icon::<LdDollarSign> { icon: LdDollarSign, width: 14, height: 14 }
                                            "{format_money(track.royalties)}"
                                        }
                                    }
                                    div { class: "artist-platform-tags",
                                        for platform in track.platforms.iter() {
                                            span { key: "{platform}", class: "artist-platform-tag", "{platform}" }
                                        }
                                    }
                                }
                                div { class: "artist-release-actions",
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        size: ButtonSize::Sm,
                                        onclick: {
                                            let id = track.id.clone();
                                            move |_| {
                                                let next = toggle_expanded(expanded.peek().as_deref(), &id);
                                                expanded.set(next);
                                            }
                                        },
                                        Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                                        "Details"
                                    }
                                    if track.status == TrackStatus::Live {
                                        Button { variant: ButtonVariant::Ghost, size: ButtonSize::Sm,
                                            Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                                            "Report"
                                        }
                                    }
                                }
                            }

                            if expanded.read().as_deref() == Some(track.id.as_str()) {
                                div { class: "artist-release-details",
                                    div {
                                        h4 { "Performance Stats" }
                                        dl {
                                            dt { "Total Streams" }
                                            dd { "{format_count(track.streams)}" }
                                            dt { "Downloads" }
                                            dd { "{format_count(track.downloads)}" }
                                            dt { "Total Royalties" }
                                            dd { "{format_money(track.royalties)}" }
                                        }
                                    }
                                    div {
                                        h4 { "Track Details" }
                                        dl {
                                            dt { "Genre" }
                                            dd { "{track.genre}" }
                                            dt { "Language" }
                                            dd { "{track.language}" }
                                            dt { "Upload Date" }
                                            dd { "{format_date_human(track.upload_date)}" }
                                        }
                                    }
                                    div {
                                        h4 { "Platforms" }
                                        div { class: "artist-platform-tags",
                                            for platform in track.platforms.iter() {
                                                span { key: "{platform}", class: "artist-platform-tag", "{platform}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Next expanded track after clicking "Details" on `clicked`.
fn toggle_expanded(current: Option<&str>, clicked: &str) -> Option<String> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn details_toggle_between_tracks() {
        assert_eq!(toggle_expanded(None, "1"), Some("1".to_string()));
        assert_eq!(toggle_expanded(Some("1"), "1"), None);
        assert_eq!(toggle_expanded(Some("1"), "2"), Some("2".to_string()));
    }

    #[test]
    fn unknown_filter_key_shows_everything() {
        let tracks = mock_data::tracks();
        let all = filter_tracks(&tracks, "", StatusFilter::from_key("bogus"));
        assert_eq!(all.len(), tracks.len());
    }

    #[test]
    fn search_with_no_match_is_empty() {
        let tracks = mock_data::tracks();
        assert!(filter_tracks(&tracks, "zzz", StatusFilter::All).is_empty());
    }
}
