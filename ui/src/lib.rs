//! This crate contains the shared UI for the HealthPlus front-end.

mod session;
pub use session::{stored_token, use_session, SessionProvider, SessionState, TOKEN_STORAGE_KEY};

mod alert;
pub use alert::{Alert, Severity};

mod login_reminder;
pub use login_reminder::LoginReminder;

mod typography;
pub use typography::{PageTitle, TextQuote};

mod about;
pub use about::About;

mod appointment;
pub use appointment::{
    use_appointment, AppointmentDetails, AppointmentDraft, AppointmentProvider, PersonalDetails,
};

mod summary;
pub use summary::AppointmentSummary;
