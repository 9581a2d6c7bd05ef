use dioxus::prelude::*;

/// Visual weight of an [`Alert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Severity::Success => "alert alert-success",
            Severity::Error => "alert alert-error",
        }
    }
}

/// Feedback banner shown above a view's content.
#[component]
pub fn Alert(severity: Severity, message: String) -> Element {
    rsx! {
        div {
            class: severity.class(),
            role: "alert",
            "{message}"
        }
    }
}
