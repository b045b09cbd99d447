//! # Form state
//!
//! One struct per form, each holding its field values plus an
//! [`AsyncOperation`] for the submission. `request` methods turn the fields
//! into an API body, enforcing only what the inputs themselves enforce
//! (required fields, the booking date minimum). Anything deeper is the
//! server's call.

use api::{
    AppointmentReceipt, Attachment, CaseReceipt, CaseType, Credentials, NewAppointment, NewCase,
    Registration,
};
use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Timelike};

use crate::operation::AsyncOperation;

/// File picker hint for case attachments. Not re-checked before upload.
pub const ACCEPTED_FILE_TYPES: &str = ".pdf,.doc,.docx,.jpg,.jpeg,.png,.gif,.xls,.xlsx";

/// Advertised consultation fee. Display only: the server sets the amount.
pub const CONSULTATION_FEE_USD: u32 = 100;

/// Shortest notice accepted for a consultation.
pub const BOOKING_LEAD_HOURS: i64 = 24;

/// Format used by `<input type="datetime-local">`.
const DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid date and time")]
    InvalidDate,
    #[error("Appointments must be booked at least 24 hours in advance")]
    TooSoon,
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(value.to_string())
    }
}

/// Passwords are sent exactly as typed; only the blank check trims.
fn secret(value: &str, field: &'static str) -> Result<String, FormError> {
    required(value, field)?;
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub op: AsyncOperation<()>,
}

impl LoginForm {
    pub fn request(&self) -> Result<Credentials, FormError> {
        Ok(Credentials {
            email: required(&self.email, "Email")?,
            password: secret(&self.password, "Password")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub op: AsyncOperation<()>,
}

impl RegisterForm {
    pub fn request(&self) -> Result<Registration, FormError> {
        Ok(Registration {
            name: required(&self.name, "Name")?,
            email: required(&self.email, "Email")?,
            password: secret(&self.password, "Password")?,
            phone: optional(&self.phone),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseForm {
    pub case_type: CaseType,
    pub title: String,
    pub description: String,
    pub files: Vec<Attachment>,
    pub op: AsyncOperation<CaseReceipt>,
}

impl CaseForm {
    pub fn request(&self) -> Result<NewCase, FormError> {
        Ok(NewCase {
            case_type: self.case_type,
            title: required(&self.title, "Title")?,
            description: required(&self.description, "Description")?,
            files: self.files.clone(),
        })
    }

    /// Whether the confirmation screen replaces the form.
    pub fn submitted(&self) -> bool {
        self.op.is_ready()
    }

    /// Back to a blank form, keeping the submission outcome.
    pub fn clear_fields(&mut self) {
        self.case_type = CaseType::default();
        self.title.clear();
        self.description.clear();
        self.files.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    /// Raw `datetime-local` value.
    pub appointment_date: String,
    pub notes: String,
    pub op: AsyncOperation<AppointmentReceipt>,
}

impl BookingForm {
    /// Build the booking, rejecting dates before [`booking_minimum`] of `now`.
    pub fn request(&self, now: NaiveDateTime) -> Result<NewAppointment, FormError> {
        let raw = required(&self.appointment_date, "Appointment date")?;
        let date = parse_datetime_local(&raw).ok_or(FormError::InvalidDate)?;
        if date < booking_minimum(now) {
            return Err(FormError::TooSoon);
        }
        Ok(NewAppointment {
            appointment_date: date.format("%Y-%m-%dT%H:%M:%S").to_string(),
            notes: optional(&self.notes),
        })
    }

    pub fn submitted(&self) -> bool {
        self.op.is_ready()
    }

    pub fn clear_fields(&mut self) {
        self.appointment_date.clear();
        self.notes.clear();
    }
}

/// Earliest bookable slot for a form rendered at `now`, to the minute.
pub fn booking_minimum(now: NaiveDateTime) -> NaiveDateTime {
    let minimum = now + Duration::hours(BOOKING_LEAD_HOURS);
    minimum
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(minimum)
}

/// Wall-clock time of `now` in its own zone, the frame `datetime-local`
/// values are written in.
pub fn wall_clock<Tz: TimeZone>(now: DateTime<Tz>) -> NaiveDateTime {
    now.naive_local()
}

/// The user's current local time.
pub fn local_now() -> NaiveDateTime {
    wall_clock(Local::now())
}

/// Value for the date input's `min` attribute.
pub fn booking_min_attr(now: NaiveDateTime) -> String {
    booking_minimum(now).format(DATETIME_LOCAL).to_string()
}

/// Parse a `datetime-local` value, with or without seconds.
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_LOCAL)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut form = LoginForm::default();
        assert_eq!(form.request(), Err(FormError::Required("Email")));

        form.email = " a@b.com ".to_string();
        assert_eq!(form.request(), Err(FormError::Required("Password")));

        form.password = "x".to_string();
        assert_eq!(
            form.request(),
            Ok(Credentials {
                email: "a@b.com".to_string(),
                password: "x".to_string()
            })
        );
    }

    #[test]
    fn test_password_sent_as_typed() {
        let login = LoginForm {
            email: "a@b.com".to_string(),
            password: "  secret ".to_string(),
            ..LoginForm::default()
        };
        assert_eq!(login.request().unwrap().password, "  secret ");

        let register = RegisterForm {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            password: " pass".to_string(),
            ..RegisterForm::default()
        };
        assert_eq!(register.request().unwrap().password, " pass");

        let blank = LoginForm {
            email: "a@b.com".to_string(),
            password: "   ".to_string(),
            ..LoginForm::default()
        };
        assert_eq!(blank.request(), Err(FormError::Required("Password")));
    }

    #[test]
    fn test_register_phone_is_optional() {
        let form = RegisterForm {
            name: "Rana".to_string(),
            email: "rana@example.com".to_string(),
            phone: "   ".to_string(),
            password: "secret".to_string(),
            op: AsyncOperation::Idle,
        };
        assert_eq!(form.request().unwrap().phone, None);
    }

    #[test]
    fn test_case_defaults_and_required_fields() {
        let mut form = CaseForm::default();
        assert_eq!(form.case_type, CaseType::Divorce);
        assert_eq!(form.request(), Err(FormError::Required("Title")));

        form.title = "Divorce filing".to_string();
        assert_eq!(form.request(), Err(FormError::Required("Description")));

        form.description = "Married 2015, separated 2024.".to_string();
        let case = form.request().unwrap();
        assert!(case.files.is_empty());
    }

    #[test]
    fn test_booking_minimum_is_a_day_ahead() {
        let now = at(1, 10, 0, 30);
        assert_eq!(booking_min_attr(now), "2026-03-02T10:00");
    }

    #[test]
    fn test_booking_rejects_too_soon() {
        let now = at(1, 10, 0, 30);
        let mut form = BookingForm {
            appointment_date: "2026-03-02T09:59".to_string(),
            ..BookingForm::default()
        };
        assert_eq!(form.request(now), Err(FormError::TooSoon));

        form.appointment_date = "2026-03-02T10:00".to_string();
        let booking = form.request(now).unwrap();
        assert_eq!(booking.appointment_date, "2026-03-02T10:00:00");
        assert_eq!(booking.notes, None);
    }

    #[test]
    fn test_booking_minimum_moves_with_now() {
        let form = BookingForm {
            appointment_date: "2026-03-03T12:00".to_string(),
            notes: "Custody schedule".to_string(),
            ..BookingForm::default()
        };
        assert!(form.request(at(1, 12, 0, 0)).is_ok());
        assert_eq!(form.request(at(2, 12, 1, 0)), Err(FormError::TooSoon));
    }

    #[test]
    fn test_booking_minimum_uses_local_wall_clock() {
        let beirut = chrono::FixedOffset::east_opt(3 * 3600).unwrap();
        let instant = chrono::Utc.with_ymd_and_hms(2026, 10, 16, 20, 57, 0).unwrap();
        let now = wall_clock(instant.with_timezone(&beirut));
        assert_eq!(booking_min_attr(now), "2026-10-17T23:57");

        let form = BookingForm {
            appointment_date: "2026-10-17T21:57".to_string(),
            ..BookingForm::default()
        };
        assert_eq!(form.request(now), Err(FormError::TooSoon));
    }

    #[test]
    fn test_booking_rejects_garbage() {
        let form = BookingForm {
            appointment_date: "next tuesday".to_string(),
            ..BookingForm::default()
        };
        assert_eq!(form.request(at(1, 0, 0, 0)), Err(FormError::InvalidDate));
        assert_eq!(
            BookingForm::default().request(at(1, 0, 0, 0)),
            Err(FormError::Required("Appointment date"))
        );
    }
}
