//! Data models exchanged with the portal API.

mod appointment;
mod case;
mod user;
mod video;

pub use appointment::{AppointmentInfo, AppointmentReceipt, AppointmentStatus, NewAppointment};
pub use case::{
    Attachment, CaseInfo, CaseReceipt, CaseStatus, CaseType, NewCase, StatusUpdate,
    UnknownVariant,
};
pub use user::{AuthResponse, Credentials, Registration, Role, UserInfo};
pub use video::VideoInfo;
