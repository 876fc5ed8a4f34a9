use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdArrowRight, LdBarChartHorizontal, LdCircleCheck, LdDollarSign, LdGlobe, LdMusic, LdTrendingUp,
    LdUpload, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonSize, Card, CardContent};

use crate::routes::Route;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Global Distribution",
        description: "Distribute your music to 150+ platforms worldwide including Spotify, Apple Music, and YouTube Music.",
    },
    Feature {
        title: "Keep 100% Royalties",
        description: "No hidden fees. Keep all your earnings with transparent royalty tracking and fast payouts.",
    },
    Feature {
        title: "Advanced Analytics",
        description: "Track your performance with detailed analytics, streaming data, and audience insights.",
    },
    Feature {
        title: "Artist Support",
        description: "Support from our team of music industry experts to help grow your career.",
    },
];

const STEPS: [Feature; 4] = [
    Feature {
        title: "Upload Your Music",
        description: "Upload your tracks, artwork, and metadata through our simple interface.",
    },
    Feature {
        title: "Quality Review",
        description: "Our team reviews your submission to ensure it meets platform standards.",
    },
    Feature {
        title: "Global Distribution",
        description: "Your music goes live on all major streaming platforms worldwide.",
    },
    Feature {
        title: "Track Performance",
        description: "Monitor streams, downloads, and earnings through your dashboard.",
    },
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Independent Artist",
        quote: "Loop Music helped me reach millions of listeners worldwide. The analytics are incredible!",
    },
    Testimonial {
        name: "Marcus Johnson",
        role: "Producer",
        quote: "Fast approval times and excellent royalty tracking. Highly recommended!",
    },
    Testimonial {
        name: "Luna Rodriguez",
        role: "Singer-Songwriter",
        quote: "The platform is so easy to use and the global reach is impressive.",
    },
];

fn feature_icon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdGlobe> { icon: LdGlobe, width: 32, height: 32 } },
        1 => rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: 32, height: 32 } },
        2 => rsx! { Icon::<LdBarChartHorizontal> { icon: LdBarChartHorizontal, width: 32, height: 32 } },
        _ => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 } },
    }
}

fn step_icon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdUpload> { icon: LdUpload, width: 24, height: 24 } },
        1 => rsx! { Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 24, height: 24 } },
        2 => rsx! { Icon::<LdGlobe> { icon: LdGlobe, width: 24, height: 24 } },
        _ => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 24, height: 24 } },
    }
}

/// Public marketing page. Signed-in users never see it; the gate sends them
/// to their home view.
#[component]
pub fn Landing() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        section { class: "landing-hero",
            div { class: "landing-hero-mark",
                Icon::<LdMusic> { icon: LdMusic, width: 48, height: 48 }
            }
            h1 { class: "landing-hero-title",
                "Distribute Your Music"
                span { class: "landing-hero-accent", "Worldwide" }
            }
            p { class: "landing-hero-lead",
                "Get your music on Spotify, Apple Music, YouTube Music, and 150+ platforms. "
                "Keep 100% of your royalties with transparent tracking and fast payouts."
            }
            Link { to: Route::Login {},
                Button { size: ButtonSize::Lg,
                    "Get Started Free"
                    Icon::<LdArrowRight> { icon: LdArrowRight, width: 20, height: 20 }
                }
            }
        }

        section { class: "landing-section",
            h2 { class: "landing-section-title", "Why Choose Loop Music?" }
            p { class: "landing-section-lead",
                "Everything you need to distribute, promote, and monetize your music globally."
            }
            div { class: "landing-features",
                for (i, feature) in FEATURES.iter().enumerate() {
                    Card { key: "{feature.title}",
                        CardContent {
                            div { class: "landing-feature-icon", {feature_icon(i)} }
                            h3 { "{feature.title}" }
                            p { class: "muted", "{feature.description}" }
                        }
                    }
                }
            }
        }

        section { class: "landing-section landing-steps",
            h2 { class: "landing-section-title", "How It Works" }
            ol { class: "landing-step-list",
                for (i, step) in STEPS.iter().enumerate() {
                    li { key: "{i}", class: "landing-step",
                        span { class: "landing-step-icon", {step_icon(i)} }
                        span { class: "landing-step-number", "{i + 1}" }
                        h3 { "{step.title}" }
                        p { class: "muted", "{step.description}" }
                    }
                }
            }
        }

        section { class: "landing-section",
            h2 { class: "landing-section-title", "What Artists Say" }
            div { class: "landing-testimonials",
                for t in TESTIMONIALS.iter() {
                    Card { key: "{t.name}",
                        CardContent {
                            blockquote { "\u{201c}{t.quote}\u{201d}" }
                            p { class: "landing-testimonial-name", "{t.name}" }
                            p { class: "muted", "{t.role}" }
                        }
                    }
                }
            }
        }

        section { class: "landing-cta",
            h2 { "Ready to Share Your Music with the World?" }
            Link { to: Route::Login {},
                Button { size: ButtonSize::Lg, "Start Distributing Today" }
            }
        }

        footer { class: "landing-footer",
            p { "Email Support: support@loopmusic.com" }
            p { "Business Hours: Mon-Fri 9AM-6PM EST" }
        }
    }
}
