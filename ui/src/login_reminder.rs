use dioxus::prelude::*;

/// Prompt shown in place of a protected view when no valid session exists.
#[component]
pub fn LoginReminder() -> Element {
    rsx! {
        div {
            class: "login-reminder",
            h2 { "Please log in" }
            p { "You need to be logged in to view this page." }
        }
    }
}
