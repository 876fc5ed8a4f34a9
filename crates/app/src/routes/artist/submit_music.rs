use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleCheck, LdMusic};
use dioxus_free_icons::Icon;
use shared_types::mock_data::{GENRES, LANGUAGES, PLATFORMS};
use shared_types::{AppError, SubmitTrackRequest};
use shared_ui::{
    Button, ButtonSize, Card, CardContent, CardHeader, CardTitle, FormSelect, Input, PageHeader,
    PageTitle,
};
use std::collections::HashMap;
use validator::Validate;

/// Validate a submission. Nothing is uploaded or stored.
fn submit_track(request: &SubmitTrackRequest) -> Result<(), AppError> {
    request.validate()?;
    tracing::info!(
        title = %request.title.trim(),
        platforms = request.platforms.len(),
        "Track submitted for review"
    );
    Ok(())
}

/// Track metadata form. A valid submission swaps the form for a
/// confirmation card.
#[component]
pub fn SubmitMusic() -> Element {
    let mut form = use_signal(SubmitTrackRequest::default);
    let mut submitted = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match submit_track(&form.read()) {
            Ok(()) => {
                error_msg.set(None);
                field_errors.set(HashMap::new());
                submitted.set(true);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Submission rejected");
                error_msg.set(Some(e.friendly_message()));
                field_errors.set(e.field_errors);
            }
        }
    };

    let field_error = move |name: &str| field_errors.read().get(name).cloned().unwrap_or_default();
    let platforms_error = field_error("platforms");

    if submitted() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./artist.css") }
            div { class: "page artist-submitted",
                Card {
                    CardContent {
                        div { class: "artist-submitted-icon",
                            Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 48, height: 48 }
                        }
                        h2 { "Submission Successful!" }
                        p { class: "muted",
                            "Your track has been submitted for review. You'll receive a notification once it's approved."
                        }
                        Button {
                            onclick: move |_| {
                                form.set(SubmitTrackRequest::default());
                                submitted.set(false);
                            },
                            "Submit Another Track"
                        }
                    }
                }
            }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./artist.css") }

        div { class: "page",
            PageHeader {
                PageTitle { subtitle: "Describe your track and choose where it should be distributed.",
                    "Submit Your Music"
                }
            }

            form { class: "artist-submit-form", onsubmit: handle_submit,
                if let Some(msg) = error_msg() {
                    div { class: "artist-form-error", role: "alert", "{msg}" }
                }

                Card {
                    CardHeader {
                        CardTitle { "Track Information" }
                    }
                    CardContent { class: "artist-form-grid",
                        Input {
                            label: "Track Title",
                            name: "title",
                            placeholder: "Enter track title",
                            value: form.read().title.clone(),
                            required: true,
                            error: field_error("title"),
                            on_input: move |e: FormEvent| form.write().title = e.value(),
                        }
                        Input {
                            label: "Artist Name",
                            name: "artist",
                            placeholder: "Enter artist name",
                            value: form.read().artist.clone(),
                            required: true,
                            error: field_error("artist"),
                            on_input: move |e: FormEvent| form.write().artist = e.value(),
                        }
                        FormSelect {
                            label: "Genre",
                            value: form.read().genre.clone(),
                            error: field_error("genre"),
                            onchange: move |e: FormEvent| form.write().genre = e.value(),
                            option { value: "", "Select Genre" }
                            for genre in GENRES.iter() {
                                option { key: "{genre}", value: *genre, "{genre}" }
                            }
                        }
                        FormSelect {
                            label: "Language",
                            value: form.read().language.clone(),
                            error: field_error("language"),
                            onchange: move |e: FormEvent| form.write().language = e.value(),
                            option { value: "", "Select Language" }
                            for language in LANGUAGES.iter() {
                                option { key: "{language}", value: *language, "{language}" }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Distribution Platforms" }
                    }
                    CardContent {
                        div { class: "artist-platform-grid",
                            for platform in PLATFORMS.iter().copied() {
                                label { key: "{platform}", class: "artist-platform-option",
                                    input {
                                        r#type: "checkbox",
                                        checked: form.read().has_platform(platform),
                                        onchange: move |_| form.write().toggle_platform(platform),
                                    }
                                    span { "{platform}" }
                                }
                            }
                        }
                        if !platforms_error.is_empty() {
                            p { class: "artist-field-error", "{platforms_error}" }
                        }
                    }
                }

                div { class: "artist-submit-actions",
                    Button { button_type: "submit", size: ButtonSize::Lg,
                        Icon::<LdMusic> { icon: LdMusic, width: 18, height: 18 }
                        "Submit for Review"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::AppErrorKind;

    fn complete() -> SubmitTrackRequest {
        let mut request = SubmitTrackRequest {
            title: "Night Drive".into(),
            artist: "Luna Echo".into(),
            genre: "Electronic".into(),
            language: "English".into(),
            platforms: vec![],
        };
        request.toggle_platform("Spotify");
        request
    }

    #[test]
    fn complete_submission_is_accepted() {
        assert!(submit_track(&complete()).is_ok());
    }

    #[test]
    fn missing_platforms_rejected() {
        let mut request = complete();
        request.toggle_platform("Spotify");
        let err = submit_track(&request).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_error("platforms"), Some("Select at least one platform"));
    }

    #[test]
    fn blank_form_reports_every_field() {
        let err = submit_track(&SubmitTrackRequest::default()).unwrap_err();
        for field in ["title", "artist", "genre", "language", "platforms"] {
            assert!(err.field_error(field).is_some(), "{field}");
        }
    }
}
