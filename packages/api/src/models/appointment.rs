//! Consultation appointments.

use serde::{Deserialize, Serialize};

/// Confirmation stage of an appointment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Rejected,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Rejected => "rejected",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

/// An appointment as listed by `GET /api/appointments`.
///
/// `amount` and `payment_status` are set by the server when the appointment is
/// created; the booking flow never sends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentInfo {
    pub id: String,
    pub appointment_date: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /api/appointments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAppointment {
    /// Local date-time in `YYYY-MM-DDTHH:MM:SS` form.
    pub appointment_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Server acknowledgement of a booking.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppointmentReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub appointment_id: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointment_listing() {
        let body = r#"{
            "id": "a1",
            "appointment_date": "2025-06-02T14:30:00",
            "status": "confirmed",
            "payment_status": "paid",
            "amount": 100.0,
            "notes": null,
            "created_at": "2025-06-01T09:00:00"
        }"#;
        let appointment: AppointmentInfo = serde_json::from_str(body).unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
        assert_eq!(appointment.amount, 100.0);
        assert!(appointment.notes.is_none());
    }

    #[test]
    fn test_new_appointment_omits_empty_notes() {
        let body = NewAppointment {
            appointment_date: "2025-06-02T14:30:00".to_string(),
            notes: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("notes").is_none());
    }
}
