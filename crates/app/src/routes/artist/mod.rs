mod analytics;
mod dashboard;
mod my_releases;
mod submit_music;

pub use analytics::Analytics;
pub use dashboard::ArtistDashboard;
pub use my_releases::MyReleases;
pub use submit_music::SubmitMusic;

use dioxus::prelude::*;
use shared_types::TrackStatus;
use shared_ui::{Badge, BadgeTone};

pub(crate) fn status_tone(status: TrackStatus) -> BadgeTone {
    match status {
        TrackStatus::Live => BadgeTone::Success,
        TrackStatus::Approved => BadgeTone::Info,
        TrackStatus::Pending => BadgeTone::Warning,
        TrackStatus::Rejected => BadgeTone::Danger,
    }
}

/// Coloured pill for a track's review status.
#[component]
pub(crate) fn StatusBadge(status: TrackStatus) -> Element {
    rsx! {
        Badge { tone: status_tone(status), "{status.label()}" }
    }
}
