mod home;
pub use home::Home;

mod info;
pub use info::{About, Contact, Footer, Privacy, Terms};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod submit_case;
pub use submit_case::SubmitCase;

mod dashboard;
pub use dashboard::Dashboard;

mod booking;
pub use booking::Booking;

mod videos;
pub use videos::Videos;

mod admin;
pub use admin::{AccessDenied, Admin};

/// Format an API timestamp for display, falling back to the raw value.
pub(crate) fn format_date(raw: &str) -> String {
    match ui::forms::parse_datetime_local(raw.get(..19).unwrap_or(raw)) {
        Some(date) => date.format("%b %-d, %Y %H:%M").to_string(),
        None => raw.to_string(),
    }
}
