//! Statutory deadline calendar.

use chrono::{Datelike, Month, NaiveDate};

use crate::config::{TaxConfig, TaxDeadline};
use crate::models::{CalendarEvent, DeadlineKind, Urgency};

/// NIS payments that fell due at most this many days ago are still listed.
pub const RECENT_OVERDUE_DAYS: i64 = 7;

/// Lists statutory deadlines relative to `today`, earliest first.
///
/// Annual deadlines that have already passed this year are rolled to next
/// year. Monthly NIS payments are listed for each month of `today`'s year on
/// the configured due day; a payment that fell due within the last
/// [`RECENT_OVERDUE_DAYS`] days is listed as overdue, older ones are dropped.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use gy_tax_engine::calculation::upcoming_deadlines;
/// use gy_tax_engine::config::TaxConfig;
/// use gy_tax_engine::models::Urgency;
///
/// let config = TaxConfig::guyana_2026();
/// let today = NaiveDate::from_ymd_opt(2026, 4, 25).unwrap();
///
/// let events = upcoming_deadlines(today, &config);
/// let filing = events.iter().find(|e| e.name == "Individual Income Tax Filing").unwrap();
/// assert_eq!(filing.days_until, 5);
/// assert_eq!(filing.urgency, Urgency::Urgent);
/// ```
pub fn upcoming_deadlines(today: NaiveDate, config: &TaxConfig) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = config
        .deadlines()
        .iter()
        .filter_map(|deadline| annual_deadline(deadline, today))
        .collect();

    let due_day = config.rates().nis_payment_due_day;
    events.extend((1..=12).filter_map(|month| nis_payment(today, month, due_day)));

    events.sort_by_key(|event| event.date);
    events
}

fn annual_deadline(deadline: &TaxDeadline, today: NaiveDate) -> Option<CalendarEvent> {
    let this_year = NaiveDate::from_ymd_opt(today.year(), deadline.month, deadline.day);
    let date = match this_year {
        Some(date) if date >= today => date,
        _ => NaiveDate::from_ymd_opt(today.year() + 1, deadline.month, deadline.day)?,
    };
    let days_until = (date - today).num_days();

    Some(CalendarEvent {
        name: deadline.name.clone(),
        description: deadline.description.clone(),
        date,
        kind: deadline.kind,
        days_until,
        urgency: Urgency::from_days_until(days_until),
    })
}

fn nis_payment(today: NaiveDate, month: u32, due_day: u32) -> Option<CalendarEvent> {
    let date = NaiveDate::from_ymd_opt(today.year(), month, due_day)?;
    let days_until = (date - today).num_days();
    if days_until < -RECENT_OVERDUE_DAYS {
        return None;
    }

    let due_name = month_name(month)?;
    let contribution_name = month_name(if month == 1 { 12 } else { month - 1 })?;

    Some(CalendarEvent {
        name: format!("NIS Payment ({})", due_name),
        description: format!("NIS contribution due for {}", contribution_name),
        date,
        kind: DeadlineKind::NisPayment,
        days_until,
        urgency: Urgency::from_days_until(days_until),
    })
}

fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn nis_events(events: &[CalendarEvent]) -> Vec<&CalendarEvent> {
        events
            .iter()
            .filter(|e| e.kind == DeadlineKind::NisPayment)
            .collect()
    }

    #[test]
    fn test_passed_deadlines_roll_to_next_year() {
        let config = TaxConfig::guyana_2026();
        let events = upcoming_deadlines(date(2026, 10, 18), &config);

        let annual: Vec<&CalendarEvent> = events
            .iter()
            .filter(|e| e.kind != DeadlineKind::NisPayment)
            .collect();
        assert_eq!(annual.len(), 3);
        assert!(annual.iter().all(|e| e.date.year() == 2027));
        assert_eq!(annual[0].date, date(2027, 3, 31));
        assert_eq!(annual[0].urgency, Urgency::Future);
    }

    #[test]
    fn test_deadline_today_is_urgent() {
        let config = TaxConfig::guyana_2026();
        let events = upcoming_deadlines(date(2026, 6, 30), &config);
        let property = events
            .iter()
            .find(|e| e.kind == DeadlineKind::PropertyTax)
            .unwrap();
        assert_eq!(property.date, date(2026, 6, 30));
        assert_eq!(property.days_until, 0);
        assert_eq!(property.urgency, Urgency::Urgent);
    }

    #[test]
    fn test_recent_nis_payment_is_overdue() {
        let config = TaxConfig::guyana_2026();
        let events = upcoming_deadlines(date(2026, 10, 18), &config);
        let nis = nis_events(&events);

        // October 14 passed 4 days ago; earlier months are dropped.
        assert_eq!(nis.len(), 3);
        assert_eq!(nis[0].date, date(2026, 10, 14));
        assert_eq!(nis[0].days_until, -4);
        assert_eq!(nis[0].urgency, Urgency::Overdue);
        assert_eq!(nis[0].name, "NIS Payment (October)");
        assert_eq!(nis[0].description, "NIS contribution due for September");
        assert_eq!(nis[1].date, date(2026, 11, 14));
        assert_eq!(nis[1].urgency, Urgency::Soon);
        assert_eq!(nis[2].urgency, Urgency::Upcoming);
    }

    #[test]
    fn test_old_nis_payments_dropped() {
        let config = TaxConfig::guyana_2026();
        let events = upcoming_deadlines(date(2026, 10, 22), &config);
        let nis = nis_events(&events);
        assert_eq!(nis.len(), 2);
        assert_eq!(nis[0].date, date(2026, 11, 14));
    }

    #[test]
    fn test_january_nis_covers_december() {
        let config = TaxConfig::guyana_2026();
        let events = upcoming_deadlines(date(2026, 1, 1), &config);
        let nis = nis_events(&events);
        assert_eq!(nis.len(), 12);
        assert_eq!(nis[0].description, "NIS contribution due for December");
        assert_eq!(nis[0].days_until, 13);
        assert_eq!(nis[0].urgency, Urgency::Soon);
    }

    #[test]
    fn test_events_sorted_by_date() {
        let config = TaxConfig::guyana_2026();
        let events = upcoming_deadlines(date(2026, 3, 1), &config);
        assert!(events.windows(2).all(|pair| pair[0].date <= pair[1].date));
    }
}
