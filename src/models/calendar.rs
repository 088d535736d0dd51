//! Tax calendar models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of a statutory deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineKind {
    /// A return filed with the Guyana Revenue Authority.
    GraFiling,
    /// Property tax payment.
    PropertyTax,
    /// Monthly NIS remittance.
    NisPayment,
}

/// How close a deadline is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Already passed.
    Overdue,
    /// Due within 7 days.
    Urgent,
    /// Due within 30 days.
    Soon,
    /// Due within 90 days.
    Upcoming,
    /// More than 90 days away.
    Future,
}

impl Urgency {
    /// Classifies a deadline by the number of days until it falls due.
    ///
    /// # Examples
    ///
    /// ```
    /// use gy_tax_engine::models::Urgency;
    ///
    /// assert_eq!(Urgency::from_days_until(-1), Urgency::Overdue);
    /// assert_eq!(Urgency::from_days_until(0), Urgency::Urgent);
    /// assert_eq!(Urgency::from_days_until(30), Urgency::Soon);
    /// assert_eq!(Urgency::from_days_until(91), Urgency::Future);
    /// ```
    pub fn from_days_until(days_until: i64) -> Self {
        match days_until {
            d if d < 0 => Urgency::Overdue,
            0..=7 => Urgency::Urgent,
            8..=30 => Urgency::Soon,
            31..=90 => Urgency::Upcoming,
            _ => Urgency::Future,
        }
    }
}

/// A dated deadline relative to a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Deadline name.
    pub name: String,
    /// What is due.
    pub description: String,
    /// Due date.
    pub date: NaiveDate,
    /// Deadline kind.
    pub kind: DeadlineKind,
    /// Days from today until the due date; negative once passed.
    pub days_until: i64,
    /// Urgency derived from `days_until`.
    pub urgency: Urgency,
}
