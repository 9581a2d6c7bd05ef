//! Admin listing of collected email records.

use dioxus::prelude::*;

use api::EmailRecord;
use ui::{use_session, Alert, LoginReminder, Severity};

use super::make_client;
use crate::Route;

#[component]
pub fn Admin() -> Element {
    let session = use_session();
    let mut emails = use_signal(Vec::<EmailRecord>::new);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut loaded = use_signal(|| false);
    let nav = use_navigator();

    let _loader = use_resource(move || {
        let state = session();
        async move {
            if !state.authorized {
                return;
            }
            let Some(token) = state.token().cloned() else {
                return;
            };
            match make_client().list_emails(&token).await {
                Ok(records) => {
                    emails.set(records);
                    loaded.set(true);
                }
                Err(err) => {
                    tracing::error!("failed to load emails: {err}");
                    load_error.set(Some("Failed to load emails. Please try again.".to_string()));
                }
            }
        }
    });

    if !session().authorized {
        return rsx! {
            LoginReminder {}
        };
    }

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Manage Emails" }

            if let Some(message) = load_error() {
                Alert { severity: Severity::Error, message }
            } else if !loaded() {
                h2 { class: "page-status", "Loading..." }
            } else if emails().is_empty() {
                p { class: "page-status", "No emails collected yet." }
            } else {
                table {
                    class: "field-table",
                    thead {
                        tr {
                            th { "Email" }
                            th { "" }
                        }
                    }
                    tbody {
                        for record in emails() {
                            tr {
                                key: "{record.id}",
                                td { "{record.email}" }
                                td {
                                    button {
                                        class: "button button-danger",
                                        onclick: move |_| {
                                            nav.push(Route::DeleteEmail { id: record.id });
                                        },
                                        "Delete"
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
