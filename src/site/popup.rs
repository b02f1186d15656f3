//! Table-booking popup form.
//!
//! The popup opens on a form prefilled with today's date, the first evening slot and two
//! guests. Submitting a complete form waits [`SUBMIT_DELAY_MS`] before showing the
//! confirmation; a failed submission drops back to the form with input kept. Time is
//! passed in explicitly as milliseconds.

use chrono::NaiveDate;

use crate::foundation::error::{ScrollFxError, ScrollFxResult};

/// Bookable evening slots.
pub const TIME_SLOTS: [&str; 10] = [
    "17:00", "17:30", "18:00", "18:30", "19:00", "19:30", "20:00", "20:30", "21:00", "21:30",
];

pub const MAX_GUESTS: u8 = 8;

/// Delay between submit and the confirmation view.
pub const SUBMIT_DELAY_MS: u64 = 1500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl ContactField {
    fn label(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDetails {
    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
        }
    }

    fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
        }
    }

    /// All fields are required; the email needs a local part and a domain.
    pub fn validate(&self) -> ScrollFxResult<()> {
        for field in [
            ContactField::FirstName,
            ContactField::LastName,
            ContactField::Email,
            ContactField::Phone,
        ] {
            if self.field(field).trim().is_empty() {
                return Err(ScrollFxError::validation(format!(
                    "{} is required",
                    field.label()
                )));
            }
        }
        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ScrollFxError::validation(format!(
                "'{}' is not an email address",
                self.email.trim()
            ))),
        }
    }
}

/// What the embedder sends to the reservation backend.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub date: NaiveDate,
    pub time: String,
    pub guests: u8,
    pub contact: ContactDetails,
}

/// Which view the popup shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupStatus {
    Form,
    Submitting,
    Success,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Form,
    Submitting { since_ms: u64 },
    Success,
}

#[derive(Clone, Debug)]
pub struct BookingPopup {
    open: bool,
    phase: Phase,
    date: NaiveDate,
    time: &'static str,
    guests: u8,
    contact: ContactDetails,
}

impl BookingPopup {
    /// A visible popup prefilled for `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            open: true,
            phase: Phase::Form,
            date: today,
            time: TIME_SLOTS[0],
            guests: 2,
            contact: ContactDetails::default(),
        }
    }

    /// Prefilled with the local calendar date.
    pub fn for_today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_time(&mut self, slot: &str) -> ScrollFxResult<()> {
        let slot = TIME_SLOTS
            .iter()
            .find(|s| **s == slot.trim())
            .ok_or_else(|| ScrollFxError::validation(format!("unknown time slot '{slot}'")))?;
        self.time = *slot;
        Ok(())
    }

    pub fn set_guests(&mut self, guests: u8) -> ScrollFxResult<()> {
        if !(1..=MAX_GUESTS).contains(&guests) {
            return Err(ScrollFxError::validation(format!(
                "guests must be between 1 and {MAX_GUESTS}"
            )));
        }
        self.guests = guests;
        Ok(())
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.contact.field_mut(field) = value.into();
    }

    /// Start submitting. Incomplete input is rejected and the form stays up.
    pub fn submit(&mut self, now_ms: u64) -> ScrollFxResult<()> {
        if !self.open {
            return Err(ScrollFxError::validation("booking popup is closed"));
        }
        if self.phase != Phase::Form {
            return Err(ScrollFxError::validation("booking already submitted"));
        }
        self.contact.validate()?;
        self.phase = Phase::Submitting { since_ms: now_ms };
        tracing::debug!(date = %self.date, time = self.time, guests = self.guests, "booking submit");
        Ok(())
    }

    /// Complete a pending submission once the delay has elapsed.
    pub fn tick(&mut self, now_ms: u64) {
        let Phase::Submitting { since_ms } = self.phase else {
            return;
        };
        if now_ms.saturating_sub(since_ms) >= SUBMIT_DELAY_MS {
            self.phase = Phase::Success;
            tracing::info!(request = ?self.request(), "booking submitted");
        }
    }

    /// The pending submission failed; back to the form with input kept.
    pub fn submission_failed(&mut self) {
        if matches!(self.phase, Phase::Submitting { .. }) {
            tracing::warn!("booking failed");
            self.phase = Phase::Form;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn status(&self) -> PopupStatus {
        match self.phase {
            Phase::Form => PopupStatus::Form,
            Phase::Submitting { .. } => PopupStatus::Submitting,
            Phase::Success => PopupStatus::Success,
        }
    }

    pub fn request(&self) -> BookingRequest {
        BookingRequest {
            date: self.date,
            time: self.time.to_string(),
            guests: self.guests,
            contact: self.contact.clone(),
        }
    }

    /// Short date for the confirmation view, e.g. `Oct. 16`.
    pub fn confirmation_date(&self) -> String {
        self.date.format("%b. %d").to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/popup.rs"]
mod tests;
