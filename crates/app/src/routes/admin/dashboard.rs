use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCircleCheck, LdCircleX, LdClock, LdDollarSign, LdEye, LdMusic, LdSearch, LdTrendingUp,
    LdUserCheck, LdUserX, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    count_with_status, filter_tracks, mock_data, AccountStatus, ArtistAccount, StatusFilter, Track,
    TrackStatus, ALL_TRACK_STATUSES,
};
use shared_ui::{
    Badge, BadgeTone, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableRow, FormSelect, Input, PageHeader, PageTitle, SearchBar, StatCard,
};

use crate::format_helpers::{format_count, format_date_human, format_money, format_percent};
use crate::routes::artist::StatusBadge;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum AdminTab {
    #[default]
    Overview,
    Submissions,
    Artists,
}

impl AdminTab {
    const ALL: [AdminTab; 3] = [AdminTab::Overview, AdminTab::Submissions, AdminTab::Artists];

    fn label(self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Submissions => "Submissions",
            AdminTab::Artists => "Artists",
        }
    }

    fn icon(self) -> Element {
        match self {
            AdminTab::Overview => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 16, height: 16 } },
            AdminTab::Submissions => rsx! { Icon::<LdMusic> { icon: LdMusic, width: 16, height: 16 } },
            AdminTab::Artists => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 } },
        }
    }
}

/// Outcome of reviewing a pending submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Approve,
    Reject,
}

/// Apply a review decision to a pending track. Returns the new status, or
/// `None` when the track is unknown or no longer pending.
fn review(tracks: &mut [Track], id: &str, decision: Decision) -> Option<TrackStatus> {
    let track = tracks
        .iter_mut()
        .find(|t| t.id == id && t.status == TrackStatus::Pending)?;
    track.status = match decision {
        Decision::Approve => TrackStatus::Approved,
        Decision::Reject => TrackStatus::Rejected,
    };
    Some(track.status)
}

/// Flip an account between active and suspended. Returns the new status.
fn toggle_account(accounts: &mut [ArtistAccount], id: &str) -> Option<AccountStatus> {
    let account = accounts.iter_mut().find(|a| a.id == id)?;
    account.status = account.status.toggled();
    Some(account.status)
}

/// Avatar initials: first letter of each word, at most two.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

fn account_tone(status: AccountStatus) -> BadgeTone {
    match status {
        AccountStatus::Active => BadgeTone::Success,
        AccountStatus::Pending => BadgeTone::Warning,
        AccountStatus::Suspended => BadgeTone::Danger,
    }
}

fn toggle_variant(status: AccountStatus) -> ButtonVariant {
    match status {
        AccountStatus::Active => ButtonVariant::Outline,
        AccountStatus::Pending | AccountStatus::Suspended => ButtonVariant::Primary,
    }
}

struct Activity {
    action: &'static str,
    subject: &'static str,
    when: &'static str,
}

const RECENT_ACTIVITY: [Activity; 4] = [
    Activity { action: "New artist registration", subject: "Harmony Sound", when: "2 hours ago" },
    Activity { action: "Track approved", subject: "Luna Echo - Midnight Dreams", when: "4 hours ago" },
    Activity { action: "Royalty payment processed", subject: "$2,450 to 15 artists", when: "6 hours ago" },
    Activity { action: "New submission received", subject: "City Vibes - Urban Sunset", when: "8 hours ago" },
];

/// Admin home with overview, submission review and artist management tabs.
///
/// Review and account actions change only this page's copy of the sample
/// data; nothing is persisted.
#[component]
pub fn AdminDashboard() -> Element {
    let mut tab = use_signal(AdminTab::default);
    let mut search = use_signal(String::new);
    let mut filter = use_signal(StatusFilter::default);
    let mut tracks = use_signal(mock_data::tracks);
    let mut accounts = use_signal(mock_data::artist_accounts);
    let stats = mock_data::platform_stats();

    let mut decide = move |id: String, decision: Decision| {
        match review(&mut tracks.write(), &id, decision) {
            Some(status) => tracing::info!(track = %id, status = status.as_str(), "Submission reviewed"),
            None => tracing::warn!(track = %id, ?decision, "Review ignored: track is not pending"),
        }
    };

    let mut toggle = move |id: String| {
        if let Some(status) = toggle_account(&mut accounts.write(), &id) {
            tracing::info!(artist = %id, status = status.label(), "Artist account updated");
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "page",
            PageHeader {
                PageTitle { subtitle: "Manage artists, submissions, and platform analytics.",
                    "Admin Dashboard"
                }
            }

            div { class: "admin-tabs", role: "tablist",
                for t in AdminTab::ALL {
                    button {
                        key: "{t.label()}",
                        r#type: "button",
                        role: "tab",
                        class: if tab() == t { "admin-tab active" } else { "admin-tab" },
                        onclick: move |_| tab.set(t),
                        {t.icon()}
                        span { "{t.label()}" }
                    }
                }
            }

            {match tab() {
                AdminTab::Overview => rsx! {
                    div { class: "page-grid stats",
                        StatCard { label: "Total Artists", value: format_count(stats.total_artists),
                            Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 }
                        }
                        StatCard { label: "Total Tracks", value: format_count(stats.total_tracks),
                            Icon::<LdMusic> { icon: LdMusic, width: 24, height: 24 }
                        }
                        StatCard { label: "Pending Reviews", value: format_count(stats.pending_submissions),
                            Icon::<LdClock> { icon: LdClock, width: 24, height: 24 }
                        }
                        StatCard { label: "Total Revenue", value: format_money(stats.total_revenue),
                            Icon::<LdDollarSign> { icon: LdDollarSign, width: 24, height: 24 }
                        }
                        StatCard { label: "Monthly Growth", value: format!("+{}", format_percent(stats.monthly_growth)),
                            Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 24, height: 24 }
                        }
                    }
                    Card { class: "admin-section",
                        CardHeader { CardTitle { "Recent Platform Activity" } }
                        CardContent {
                            for (i, activity) in RECENT_ACTIVITY.iter().enumerate() {
                                div { key: "{i}", class: "admin-activity",
                                    div {
                                        p { class: "admin-activity-action", "{activity.action}" }
                                        p { class: "muted", "{activity.subject}" }
                                    }
                                    span { class: "muted", "{activity.when}" }
                                }
                            }
                        }
                    }
                },
                AdminTab::Submissions => rsx! {
                    SearchBar {
                        span { class: "admin-search-icon",
                            Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                        }
                        Input {
                            placeholder: "Search submissions...",
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
                    p { class: "muted admin-pending-count",
                        "{count_with_status(&tracks.read(), TrackStatus::Pending)} awaiting review"
                    }
                    div { class: "admin-submissions",
                        for track in filter_tracks(&tracks.read(), &search.read(), filter()) {
                            Card { key: "{track.id}",
                                CardContent { class: "admin-submission",
                                    img { class: "admin-cover", src: "{track.cover_art}", alt: "{track.title}" }
                                    div { class: "admin-submission-info",
                                        div { class: "admin-submission-title",
                                            div {
                                                h3 { "{track.title}" }
                                                p { class: "muted", "{track.artist}" }
                                            }
                                            StatusBadge { status: track.status }
                                        }
                                        p { class: "admin-submission-facts",
                                            "{track.genre} \u{00b7} {track.language} \u{00b7} Uploaded {format_date_human(track.upload_date)}"
                                        }
                                    }
                                    div { class: "admin-submission-actions",
                                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm,
                                            Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                                            "Review"
                                        }
                                        if track.status == TrackStatus::Pending {
                                            Button {
                                                size: ButtonSize::Sm,
                                                onclick: {
                                                    let id = track.id.clone();
                                                    move |_| decide(id.clone(), Decision::Approve)
                                                },
                                                Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 16, height: 16 }
                                                "Approve"
                                            }
                                            Button {
                                                variant: ButtonVariant::Danger,
                                                size: ButtonSize::Sm,
                                                onclick: {
                                                    let id = track.id.clone();
                                                    move |_| decide(id.clone(), Decision::Reject)
                                                },
                                                Icon::<LdCircleX> { icon: LdCircleX, width: 16, height: 16 }
                                                "Reject"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                AdminTab::Artists => rsx! {
                    Card {
                        CardHeader { CardTitle { "Artist Management" } }
                        CardContent {
                            DataTable {
                                DataTableHeader {
                                    DataTableColumn { "Artist" }
                                    DataTableColumn { "Tracks" }
                                    DataTableColumn { "Joined" }
                                    DataTableColumn { "Status" }
                                    DataTableColumn { "" }
                                }
                                DataTableBody {
                                    for account in accounts.read().iter() {
                                        DataTableRow { key: "{account.id}",
                                            DataTableCell {
                                                div { class: "admin-artist",
                                                    span { class: "admin-avatar", "{initials(&account.name)}" }
                                                    div {
                                                        p { class: "admin-artist-name", "{account.name}" }
                                                        p { class: "muted", "{account.email}" }
                                                    }
                                                }
                                            }
                                            DataTableCell { "{account.tracks}" }
                                            DataTableCell { "{format_date_human(account.join_date)}" }
                                            DataTableCell {
                                                Badge { tone: account_tone(account.status), "{account.status.label()}" }
                                            }
                                            DataTableCell {
                                                Button {
                                                    size: ButtonSize::Sm,
                                                    variant: toggle_variant(account.status),
                                                    onclick: {
                                                        let id = account.id.clone();
                                                        move |_| toggle(id.clone())
                                                    },
                                                    if account.status == AccountStatus::Active {
                                                        Icon::<LdUserX> { icon: LdUserX, width: 16, height: 16 }
                                                        "Suspend"
                                                    } else {
                                                        Icon::<LdUserCheck> { icon: LdUserCheck, width: 16, height: 16 }
                                                        "Activate"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn approving_pending_track() {
        let mut tracks = mock_data::tracks();
        assert_eq!(review(&mut tracks, "3", Decision::Approve), Some(TrackStatus::Approved));
        assert_eq!(tracks[2].status, TrackStatus::Approved);
    }

    #[test]
    fn rejecting_pending_track() {
        let mut tracks = mock_data::tracks();
        assert_eq!(review(&mut tracks, "3", Decision::Reject), Some(TrackStatus::Rejected));
    }

    #[test]
    fn only_pending_tracks_can_be_reviewed() {
        let mut tracks = mock_data::tracks();
        assert_eq!(review(&mut tracks, "1", Decision::Reject), None);
        assert_eq!(tracks[0].status, TrackStatus::Live);
        assert_eq!(review(&mut tracks, "missing", Decision::Approve), None);
    }

    #[test]
    fn reviewing_lowers_pending_count() {
        let mut tracks = mock_data::tracks();
        let before = count_with_status(&tracks, TrackStatus::Pending);
        review(&mut tracks, "3", Decision::Approve);
        assert_eq!(count_with_status(&tracks, TrackStatus::Pending), before - 1);
    }

    #[test]
    fn toggling_accounts() {
        let mut accounts = mock_data::artist_accounts();
        assert_eq!(toggle_account(&mut accounts, "1"), Some(AccountStatus::Suspended));
        assert_eq!(toggle_account(&mut accounts, "1"), Some(AccountStatus::Active));
        assert_eq!(toggle_account(&mut accounts, "3"), Some(AccountStatus::Active));
        assert_eq!(toggle_account(&mut accounts, "nope"), None);
    }

    #[test]
    fn initials_take_two_words() {
        assert_eq!(initials("Luna Echo"), "LE");
        assert_eq!(initials("serene sound studio"), "SS");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn overview_is_default_tab() {
        assert_eq!(AdminTab::default(), AdminTab::Overview);
        assert_eq!(AdminTab::ALL.map(AdminTab::label), ["Overview", "Submissions", "Artists"]);
    }
}
