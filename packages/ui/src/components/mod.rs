//! Small building blocks shared by the portal views.

mod alert;
pub use alert::{Alert, AlertKind};

mod badge;
pub use badge::{AppointmentBadge, CaseBadge};

mod field;
pub use field::{Field, TextArea};

mod spinner;
pub use spinner::Spinner;
