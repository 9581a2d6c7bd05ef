//! Shared appointment state for the booking flow.
//!
//! The booking steps fill the draft in as the patient progresses; the
//! summary view only reads it. Provided as a context signal so every step
//! sees the same draft without prop-drilling.

use dioxus::prelude::*;
use time::macros::format_description;

/// Contact details entered by the patient.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
}

/// The appointment being booked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentDetails {
    pub type_of_service: String,
    pub date: Option<time::Date>,
    pub time: String,
    pub price: String,
}

impl AppointmentDetails {
    /// Date as shown to the patient, empty until one is picked.
    pub fn formatted_date(&self) -> String {
        let Some(date) = self.date else {
            return String::new();
        };
        date.format(format_description!("[day]/[month]/[year]"))
            .unwrap_or_default()
    }
}

/// Everything the booking flow has collected so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentDraft {
    pub personal: PersonalDetails,
    pub appointment: AppointmentDetails,
}

/// Get the shared appointment draft.
pub fn use_appointment() -> Signal<AppointmentDraft> {
    use_context::<Signal<AppointmentDraft>>()
}

/// Provider component owning the appointment draft.
#[component]
pub fn AppointmentProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(AppointmentDraft::default()));

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn formats_picked_date() {
        let details = AppointmentDetails {
            date: Some(date!(2024 - 05 - 09)),
            ..Default::default()
        };
        assert_eq!(details.formatted_date(), "09/05/2024");
    }

    #[test]
    fn unpicked_date_is_empty() {
        assert_eq!(AppointmentDetails::default().formatted_date(), "");
    }
}
