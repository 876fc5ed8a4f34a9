//! Fixed sample datasets backing every page of the dashboard.
//!
//! There is no backend; views read these collections directly and never
//! write back.

use chrono::{DateTime, NaiveDate, Utc};

use crate::catalog::{
    AccountStatus, AnalyticsSummary, ArtistAccount, MonthlyStats, Notification,
    NotificationKind, PlatformStats, Share, Track, TrackStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn tracks() -> Vec<Track> {
    vec![
        Track {
            id: "1".into(),
            title: "Midnight Dreams".into(),
            artist: "Luna Echo".into(),
            genre: "Electronic".into(),
            language: "English".into(),
            cover_art: "https://images.pexels.com/photos/1763075/pexels-photo-1763075.jpeg".into(),
            audio_file: "midnight-dreams.mp3".into(),
            platforms: strings(&["Spotify", "Apple Music", "YouTube Music"]),
            status: TrackStatus::Live,
            upload_date: date(2024, 1, 15),
            streams: 125_000,
            downloads: 8_500,
            royalties: 625.50,
        },
        Track {
            id: "2".into(),
            title: "Urban Sunrise".into(),
            artist: "City Vibes".into(),
            genre: "Hip Hop".into(),
            language: "English".into(),
            cover_art: "https://images.pexels.com/photos/1190297/pexels-photo-1190297.jpeg".into(),
            audio_file: "urban-sunrise.mp3".into(),
            platforms: strings(&["Spotify", "SoundCloud"]),
            status: TrackStatus::Approved,
            upload_date: date(2024, 1, 20),
            streams: 45_000,
            downloads: 2_300,
            royalties: 225.75,
        },
        Track {
            id: "3".into(),
            title: "Ocean Waves".into(),
            artist: "Serene Sound".into(),
            genre: "Ambient".into(),
            language: "Instrumental".into(),
            cover_art: "https://images.pexels.com/photos/1426718/pexels-photo-1426718.jpeg".into(),
            audio_file: "ocean-waves.mp3".into(),
            platforms: strings(&["Apple Music", "YouTube Music", "Deezer"]),
            status: TrackStatus::Pending,
            upload_date: date(2024, 1, 25),
            streams: 0,
            downloads: 0,
            royalties: 0.0,
        },
    ]
}

pub fn analytics() -> AnalyticsSummary {
    let month = |month: &str, streams, downloads, royalties| MonthlyStats {
        month: month.to_string(),
        streams,
        downloads,
        royalties,
    };
    AnalyticsSummary {
        total_streams: 170_000,
        total_downloads: 10_800,
        total_royalties: 851.25,
        monthly: vec![
            month("Jan", 25_000, 1_500, 125.50),
            month("Feb", 32_000, 2_100, 160.75),
            month("Mar", 28_000, 1_800, 140.25),
            month("Apr", 35_000, 2_200, 175.80),
            month("May", 42_000, 2_800, 210.90),
            month("Jun", 38_000, 2_400, 190.45),
        ],
    }
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".into(),
            message: "Your track \"Midnight Dreams\" has been approved and is now live!".into(),
            kind: NotificationKind::Success,
            timestamp: timestamp("2024-01-26T10:30:00Z"),
        },
        Notification {
            id: "2".into(),
            message: "Monthly royalty payment of $851.25 has been processed.".into(),
            kind: NotificationKind::Info,
            timestamp: timestamp("2024-01-25T14:15:00Z"),
        },
        Notification {
            id: "3".into(),
            message: "Your track \"Ocean Waves\" is pending review.".into(),
            kind: NotificationKind::Warning,
            timestamp: timestamp("2024-01-25T09:45:00Z"),
        },
    ]
}

fn share(label: &str, streams: u64, percentage: f64) -> Share {
    Share {
        label: label.to_string(),
        streams,
        percentage,
    }
}

pub fn platform_shares() -> Vec<Share> {
    vec![
        share("Spotify", 85_000, 50.0),
        share("Apple Music", 42_500, 25.0),
        share("YouTube Music", 25_500, 15.0),
        share("Amazon Music", 10_200, 6.0),
        share("Others", 6_800, 4.0),
    ]
}

pub fn region_shares() -> Vec<Share> {
    vec![
        share("North America", 68_000, 40.0),
        share("Europe", 51_000, 30.0),
        share("Asia", 34_000, 20.0),
        share("South America", 12_750, 7.5),
        share("Others", 4_250, 2.5),
    ]
}

pub fn artist_accounts() -> Vec<ArtistAccount> {
    vec![
        ArtistAccount {
            id: "1".into(),
            name: "Luna Echo".into(),
            email: "luna@example.com".into(),
            tracks: 3,
            status: AccountStatus::Active,
            join_date: date(2024, 1, 15),
        },
        ArtistAccount {
            id: "2".into(),
            name: "City Vibes".into(),
            email: "city@example.com".into(),
            tracks: 2,
            status: AccountStatus::Active,
            join_date: date(2024, 1, 20),
        },
        ArtistAccount {
            id: "3".into(),
            name: "Serene Sound".into(),
            email: "serene@example.com".into(),
            tracks: 1,
            status: AccountStatus::Pending,
            join_date: date(2024, 1, 25),
        },
    ]
}

pub fn platform_stats() -> PlatformStats {
    PlatformStats {
        total_artists: 2_840,
        total_tracks: 12_650,
        pending_submissions: 23,
        total_revenue: 485_720.0,
        monthly_growth: 12.5,
    }
}

/// Genres offered by the submission form.
pub const GENRES: &[&str] = &[
    "Pop",
    "Rock",
    "Hip Hop",
    "Electronic",
    "Jazz",
    "Classical",
    "Country",
    "R&B",
    "Indie",
    "Ambient",
];

/// Languages offered by the submission form.
pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Japanese",
    "Korean",
    "Instrumental",
];

/// Streaming platforms a release can be distributed to.
pub const PLATFORMS: &[&str] = &[
    "Spotify",
    "Apple Music",
    "YouTube Music",
    "Amazon Music",
    "Deezer",
    "SoundCloud",
    "Tidal",
    "Pandora",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_and_timestamps_parse() {
        let tracks = tracks();
        assert_eq!(tracks[0].upload_date, date(2024, 1, 15));
        assert_ne!(tracks[0].upload_date, NaiveDate::default());

        let notes = notifications();
        assert_eq!(notes[0].timestamp.to_rfc3339(), "2024-01-26T10:30:00+00:00");
    }

    #[test]
    fn track_ids_are_unique() {
        let tracks = tracks();
        let mut ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), tracks.len());
    }

    #[test]
    fn track_platforms_are_known() {
        for track in tracks() {
            for platform in &track.platforms {
                assert!(PLATFORMS.contains(&platform.as_str()), "{platform}");
            }
        }
    }
}
