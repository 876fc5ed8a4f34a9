use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tracks
// ---------------------------------------------------------------------------

/// Review/distribution state of a submitted track.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TrackStatus {
    Pending,
    Approved,
    Rejected,
    Live,
}

/// All statuses in filter-dropdown order.
pub const ALL_TRACK_STATUSES: &[TrackStatus] = &[
    TrackStatus::Pending,
    TrackStatus::Approved,
    TrackStatus::Live,
    TrackStatus::Rejected,
];

impl TrackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackStatus::Pending => "pending",
            TrackStatus::Approved => "approved",
            TrackStatus::Rejected => "rejected",
            TrackStatus::Live => "live",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrackStatus::Pending => "Pending",
            TrackStatus::Approved => "Approved",
            TrackStatus::Rejected => "Rejected",
            TrackStatus::Live => "Live",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TrackStatus::Pending),
            "approved" => Some(TrackStatus::Approved),
            "rejected" => Some(TrackStatus::Rejected),
            "live" => Some(TrackStatus::Live),
            _ => None,
        }
    }
}

/// A track in the distribution catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub language: String,
    pub cover_art: String,
    pub audio_file: String,
    pub platforms: Vec<String>,
    pub status: TrackStatus,
    pub upload_date: NaiveDate,
    pub streams: u64,
    pub downloads: u64,
    pub royalties: f64,
}

/// Status dropdown selection: everything, or a single status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TrackStatus),
}

impl StatusFilter {
    /// Parse a `<select>` value; unknown keys mean "all".
    pub fn from_key(s: &str) -> Self {
        TrackStatus::from_key(s).map_or(StatusFilter::All, StatusFilter::Only)
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, status: TrackStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Tracks whose title or artist contains `search` (case-insensitive) and
/// whose status passes `filter`. Catalog order is preserved.
pub fn filter_tracks<'a>(tracks: &'a [Track], search: &str, filter: StatusFilter) -> Vec<&'a Track> {
    let needle = search.trim().to_lowercase();
    tracks
        .iter()
        .filter(|t| {
            needle.is_empty()
                || t.title.to_lowercase().contains(&needle)
                || t.artist.to_lowercase().contains(&needle)
        })
        .filter(|t| filter.matches(t.status))
        .collect()
}

/// Tracks ordered newest upload first.
pub fn recent_tracks(tracks: &[Track], limit: usize) -> Vec<&Track> {
    let mut sorted: Vec<&Track> = tracks.iter().collect();
    sorted.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
    sorted.truncate(limit);
    sorted
}

/// Number of tracks with the given status.
pub fn count_with_status(tracks: &[Track], status: TrackStatus) -> usize {
    tracks.iter().filter(|t| t.status == status).count()
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

/// One month of aggregate performance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyStats {
    pub month: String,
    pub streams: u64,
    pub downloads: u64,
    pub royalties: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsSummary {
    pub total_streams: u64,
    pub total_downloads: u64,
    pub total_royalties: f64,
    pub monthly: Vec<MonthlyStats>,
}

impl AnalyticsSummary {
    /// Highest monthly stream count, used to scale the bar chart.
    pub fn max_monthly_streams(&self) -> u64 {
        self.monthly.iter().map(|m| m.streams).max().unwrap_or(0)
    }

    /// Bar width (0–100) for a month relative to the busiest month.
    pub fn bar_width(&self, month: &MonthlyStats) -> f64 {
        percentage_of(month.streams, self.max_monthly_streams())
    }

    /// The last `n` months, oldest first.
    pub fn latest_months(&self, n: usize) -> &[MonthlyStats] {
        let start = self.monthly.len().saturating_sub(n);
        &self.monthly[start..]
    }
}

/// `part / whole` as a percentage capped at 100. Zero when `whole` is zero.
pub fn percentage_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let pct = (part as f64 / whole as f64) * 100.0;
    pct.min(100.0)
}

/// A labelled slice of a breakdown (platform or region).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Share {
    pub label: String,
    pub streams: u64,
    pub percentage: f64,
}

/// Selectable analytics window. Display only: the mock data is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    OneMonth,
    ThreeMonths,
    #[default]
    SixMonths,
    OneYear,
}

pub const ALL_TIME_RANGES: &[TimeRange] = &[
    TimeRange::OneMonth,
    TimeRange::ThreeMonths,
    TimeRange::SixMonths,
    TimeRange::OneYear,
];

impl TimeRange {
    pub fn as_key(&self) -> &'static str {
        match self {
            TimeRange::OneMonth => "1month",
            TimeRange::ThreeMonths => "3months",
            TimeRange::SixMonths => "6months",
            TimeRange::OneYear => "1year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::OneMonth => "Last Month",
            TimeRange::ThreeMonths => "Last 3 Months",
            TimeRange::SixMonths => "Last 6 Months",
            TimeRange::OneYear => "Last Year",
        }
    }

    pub fn from_key(s: &str) -> Self {
        match s {
            "1month" => TimeRange::OneMonth,
            "3months" => TimeRange::ThreeMonths,
            "1year" => TimeRange::OneYear,
            _ => TimeRange::SixMonths,
        }
    }
}

// ---------------------------------------------------------------------------
// Notifications and accounts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub kind: NotificationKind,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Pending,
    Suspended,
}

impl AccountStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Pending => "Pending",
            AccountStatus::Suspended => "Suspended",
        }
    }

    /// Status after the admin presses the activate/suspend toggle.
    pub fn toggled(&self) -> Self {
        match self {
            AccountStatus::Active => AccountStatus::Suspended,
            AccountStatus::Pending | AccountStatus::Suspended => AccountStatus::Active,
        }
    }
}

/// An artist account as seen from the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub tracks: u32,
    pub status: AccountStatus,
    pub join_date: NaiveDate,
}

/// Platform-wide totals for the admin overview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformStats {
    pub total_artists: u64,
    pub total_tracks: u64,
    pub pending_submissions: u64,
    pub total_revenue: f64,
    pub monthly_growth: f64,
}
