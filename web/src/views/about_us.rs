use dioxus::prelude::*;

use ui::About;

/// The About Us page.
#[component]
pub fn AboutUs() -> Element {
    rsx! {
        div {
            class: "page",
            About {}
        }
    }
}
