use dioxus::prelude::*;

use crate::appointment::use_appointment;

/// A label/value row in the summary lists.
#[component]
fn SummaryRow(label: &'static str, value: String, #[props(default = false)] strong: bool) -> Element {
    rsx! {
        li {
            class: "summary-row",
            span { class: "summary-label", "{label}" }
            if strong {
                span { class: "summary-value summary-value-strong", "{value}" }
            } else {
                span { class: "summary-value", "{value}" }
            }
        }
    }
}

/// Summary of the appointment being booked, read from the shared draft.
#[component]
pub fn AppointmentSummary() -> Element {
    let draft = use_appointment();
    let current = draft();
    let personal = current.personal;
    let appointment = current.appointment;
    let appointment_date = appointment.formatted_date();

    rsx! {
        div {
            class: "appointment-summary",
            h2 { "Appointment Summary" }

            section {
                h3 { "Personal Details" }
                ul {
                    class: "summary-list",
                    SummaryRow { label: "First Name", value: personal.first_name }
                    SummaryRow { label: "Last Name", value: personal.last_name }
                    SummaryRow { label: "Email", value: personal.email }
                    SummaryRow { label: "Mobile Number", value: personal.mobile_number }
                }
            }

            section {
                h3 { "Appointment Details" }
                ul {
                    class: "summary-list",
                    SummaryRow { label: "Type of service", value: appointment.type_of_service }
                    SummaryRow { label: "Date", value: appointment_date }
                    SummaryRow { label: "Time", value: appointment.time }
                    SummaryRow { label: "Price", value: appointment.price, strong: true }
                }
            }
        }
    }
}
