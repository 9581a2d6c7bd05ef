use dioxus::prelude::*;

/// Centered page heading.
#[component]
pub fn PageTitle(text: String) -> Element {
    rsx! {
        h1 {
            class: "page-title",
            "{text}"
        }
    }
}

/// A paragraph of quoted presentation text.
#[component]
pub fn TextQuote(text: String) -> Element {
    rsx! {
        p {
            class: "text-quote",
            "{text}"
        }
    }
}
