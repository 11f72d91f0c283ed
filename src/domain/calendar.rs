//! Compiled-in keynote calendar.
//!
//! Two hand-curated tables: the dates invitations went out, and the keynote
//! dates themselves with a `clustered` flag (the keynote sits close to another
//! announcement). Both are plain `const` records so nothing is parsed at
//! runtime; [`KeynoteCalendar::load`] turns them into `NaiveDate`s.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::AppError;

/// A calendar day as written in the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateRecord {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn to_date(self) -> Result<NaiveDate, AppError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            AppError::data(format!(
                "Invalid calendar date {:04}-{:02}-{:02} in keynote table.",
                self.year, self.month, self.day
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRecord {
    pub on: DateRecord,
    pub clustered: bool,
}

const fn event(year: i32, month: u32, day: u32, clustered: bool) -> EventRecord {
    EventRecord {
        on: DateRecord::new(year, month, day),
        clustered,
    }
}

const fn invite(year: i32, month: u32, day: u32) -> DateRecord {
    DateRecord::new(year, month, day)
}

/// Keynote dates, newest first.
pub const EVENT_TABLE: &[EventRecord] = &[
    event(2016, 3, 21, false),
    event(2015, 9, 9, false),
    event(2015, 3, 9, false),
    event(2014, 10, 16, true),
    event(2014, 9, 9, true),
    event(2013, 10, 22, true),
    event(2013, 9, 10, true),
    event(2012, 10, 23, true),
    event(2012, 9, 12, true),
    event(2012, 3, 7, false),
    event(2012, 1, 19, false),
    event(2011, 10, 4, false),
    event(2011, 3, 2, false),
    event(2010, 10, 20, true),
    event(2010, 9, 1, true),
    event(2010, 4, 8, false),
    event(2010, 1, 27, false),
    event(2009, 9, 9, false),
    event(2008, 10, 14, true),
    event(2008, 9, 9, true),
    event(2008, 3, 6, false),
    event(2007, 9, 12, true),
    event(2007, 8, 7, true),
    event(2007, 4, 15, false),
    event(2006, 9, 12, false),
    event(2006, 2, 28, false),
    event(2005, 10, 19, true),
    event(2005, 10, 12, true),
    event(2005, 9, 7, true),
];

/// Invitation dates, newest first.
pub const INVITATION_TABLE: &[DateRecord] = &[
    invite(2016, 3, 10),
    invite(2015, 8, 27),
    invite(2015, 2, 27),
    invite(2014, 10, 8),
    invite(2014, 8, 28),
    invite(2013, 10, 15),
    invite(2013, 9, 3),
    invite(2012, 10, 16),
    invite(2012, 9, 4),
    invite(2012, 2, 28),
    invite(2012, 1, 12),
    invite(2011, 9, 27),
    invite(2011, 2, 22),
    invite(2010, 10, 13),
    invite(2010, 8, 25),
    invite(2010, 4, 5),
    invite(2010, 1, 18),
    invite(2009, 8, 31),
    invite(2008, 10, 9),
    invite(2008, 9, 2),
    invite(2008, 2, 27),
    invite(2007, 9, 5),
    invite(2007, 7, 31),
    invite(2007, 3, 20),
    invite(2006, 9, 5),
    invite(2006, 2, 21),
    invite(2005, 10, 14),
    invite(2005, 10, 4),
    invite(2005, 8, 29),
];

/// A keynote event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Event {
    pub date: NaiveDate,
    pub clustered: bool,
}

/// Both tables converted to dates, in table order.
#[derive(Debug, Clone)]
pub struct KeynoteCalendar {
    pub events: Vec<Event>,
    pub invitations: Vec<NaiveDate>,
}

impl KeynoteCalendar {
    pub fn load() -> Result<Self, AppError> {
        Self::from_tables(EVENT_TABLE, INVITATION_TABLE)
    }

    pub fn from_tables(events: &[EventRecord], invitations: &[DateRecord]) -> Result<Self, AppError> {
        let events = events
            .iter()
            .map(|r| -> Result<Event, AppError> {
                Ok(Event {
                    date: r.on.to_date()?,
                    clustered: r.clustered,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;
        let invitations = invitations
            .iter()
            .map(|r| r.to_date())
            .collect::<Result<Vec<_>, AppError>>()?;
        Ok(Self { events, invitations })
    }

    /// Latest invitation dated on or before `event_date`.
    pub fn invitation_for(&self, event_date: NaiveDate) -> Option<NaiveDate> {
        self.invitations
            .iter()
            .copied()
            .filter(|d| *d <= event_date)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_load_into_valid_dates() {
        let cal = KeynoteCalendar::load().unwrap();
        assert_eq!(cal.events.len(), 29);
        assert_eq!(cal.invitations.len(), 29);
        assert_eq!(cal.events[0].date, NaiveDate::from_ymd_opt(2016, 3, 21).unwrap());
        assert!(!cal.events[0].clustered);
        assert!(cal.events[3].clustered);
    }

    #[test]
    fn invalid_record_is_a_data_error() {
        let bad = [event(2015, 2, 30, false)];
        let err = KeynoteCalendar::from_tables(&bad, &[]).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_DATA);
        assert!(err.message().contains("2015-02-30"));
    }

    #[test]
    fn every_event_pairs_with_its_own_invitation() {
        let cal = KeynoteCalendar::load().unwrap();
        for (ev, inv) in cal.events.iter().zip(&cal.invitations) {
            assert_eq!(cal.invitation_for(ev.date), Some(*inv), "event {}", ev.date);
        }
    }

    #[test]
    fn invitation_lookup_before_first_invite_is_none() {
        let cal = KeynoteCalendar::load().unwrap();
        let early = NaiveDate::from_ymd_opt(2005, 8, 1).unwrap();
        assert_eq!(cal.invitation_for(early), None);

        let mar_2016 = NaiveDate::from_ymd_opt(2016, 3, 21).unwrap();
        let lead = mar_2016 - cal.invitation_for(mar_2016).unwrap();
        assert_eq!(lead.num_days(), 11);
    }
}
