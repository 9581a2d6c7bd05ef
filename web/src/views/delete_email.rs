//! Delete-confirmation page for a single email record.
//!
//! Mounts with the record identifier from the route, gates on the session,
//! fetches the record, and lets the admin confirm or back out. A successful
//! delete shows the success banner, then returns to the listing after a
//! short pause.

use std::time::Duration;

use dioxus::prelude::*;

use api::{DeleteOutcome, EmailRecord};
use ui::{use_session, Alert, LoginReminder, Severity};

use super::make_client;
use crate::Route;

/// Pause between the success banner and the return to the listing.
const REDIRECT_DELAY: Duration = Duration::from_secs(2);

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[component]
pub fn DeleteEmail(id: i64) -> Element {
    // Track the route param in a signal so the loader re-runs on change
    let mut record_id = use_signal(|| id);
    if *record_id.peek() != id {
        record_id.set(id);
    }

    let session = use_session();
    let mut email = use_signal(|| Option::<EmailRecord>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);
    let nav = use_navigator();

    // Load the record once per mount; never before the session is checked.
    let _loader = use_resource(move || {
        let state = session();
        let id = record_id();
        async move {
            if !state.authorized {
                return;
            }
            let Some(token) = state.token().cloned() else {
                return;
            };
            match make_client().get_email(id, &token).await {
                Ok(record) => email.set(Some(record)),
                Err(err) => {
                    tracing::error!("failed to load email {id}: {err}");
                    load_error.set(Some("Failed to load email. Please try again.".to_string()));
                }
            }
        }
    });

    let handle_delete = move |_| {
        let id = record_id();
        spawn(async move {
            let Some(token) = session().token().cloned() else {
                return;
            };
            deleting.set(true);
            error.set(None);
            match make_client().delete_email(id, &token).await {
                Ok(DeleteOutcome::Deleted) => {
                    success.set(Some("Email successfully deleted.".to_string()));
                    // The redirect task lives on the component scope:
                    // leaving the view early drops it, so a stale view can
                    // never navigate.
                    spawn(async move {
                        sleep(REDIRECT_DELAY).await;
                        nav.push(Route::Admin {});
                    });
                }
                Ok(DeleteOutcome::Unexpected(status)) => {
                    tracing::warn!("unexpected status {status} deleting email {id}");
                    error.set(Some("Something went wrong. Please try again.".to_string()));
                    deleting.set(false);
                }
                Err(err) => {
                    tracing::error!("failed to delete email {id}: {err}");
                    error.set(Some("Failed to delete email. Please try again.".to_string()));
                    deleting.set(false);
                }
            }
        });
    };

    if !session().authorized {
        return rsx! {
            LoginReminder {}
        };
    }

    let Some(record) = email() else {
        return rsx! {
            div {
                class: "page",
                if let Some(message) = load_error() {
                    Alert { severity: Severity::Error, message }
                } else {
                    h2 { class: "page-status", "Loading..." }
                }
            }
        };
    };

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Delete Email" }

            if let Some(message) = success() {
                Alert { severity: Severity::Success, message }
            }
            if let Some(message) = error() {
                Alert { severity: Severity::Error, message }
            }

            p {
                class: "confirm-question",
                "Are you sure you want to delete the email: {record.email}?"
            }

            table {
                class: "field-table",
                thead {
                    tr {
                        th { "Field" }
                        th { "Value" }
                    }
                }
                tbody {
                    for (name, value) in record.display_fields() {
                        tr {
                            key: "{name}",
                            td { "{name}" }
                            td { "{value}" }
                        }
                    }
                }
            }

            div {
                class: "page-actions",
                button {
                    class: "button",
                    onclick: move |_| {
                        nav.push(Route::Admin {});
                    },
                    "Go Back"
                }
                button {
                    class: "button button-danger",
                    disabled: deleting(),
                    onclick: handle_delete,
                    "Delete"
                }
            }
        }
    }
}
