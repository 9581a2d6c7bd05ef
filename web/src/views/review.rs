use dioxus::prelude::*;

use ui::AppointmentSummary;

/// Review page showing the appointment summary from the shared draft.
#[component]
pub fn Review() -> Element {
    rsx! {
        div {
            class: "page",
            AppointmentSummary {}
        }
    }
}
