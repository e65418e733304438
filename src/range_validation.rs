// Date-range validation for a booking candidate. A range is only acceptable when
// every day between check-in and check-out is free of existing bookings, so the
// validator walks the range instead of checking the endpoints alone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::availability_index::AvailabilityIndex;

// Errors raised while selecting booking dates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("check out date cannot be prior to check in")]
    CheckoutBeforeCheckin,

    #[error("range overlaps an existing booking on {conflict}")]
    OverlapsExistingBooking { conflict: NaiveDate },

    #[error("no check in date has been selected")]
    CheckInNotSelected,

    #[error("{date} is not available as a check in date")]
    UnavailableCheckIn { date: NaiveDate },
}

// A tentative, not-yet-submitted check-in/check-out pair. Created empty, filled
// in by user selection, and collapsed back to check-in-only whenever the
// check-in changes (the set of valid check-outs depends on it).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeCandidate {
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
}

impl DateRangeCandidate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    // Both dates selected and validated
    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    // Selecting a check-in invalidates any previously accepted check-out
    pub fn select_check_in(&mut self, date: NaiveDate) {
        self.check_in = Some(date);
        self.check_out = None;
    }

    pub fn clear(&mut self) {
        self.check_in = None;
        self.check_out = None;
    }
}

// A calendar cell is grayed out when the day is already gone or already booked
pub fn disabled_date(index: &AvailabilityIndex, date: NaiveDate, today: NaiveDate) -> bool {
    date < today || index.is_booked(date)
}

// Validate a candidate check-out against a previously selected check-in.
//
// The walk starts the day after check-in (check-in was validated as unbooked
// when it was selected) and covers every day up to and including the
// candidate. The first booked day encountered is reported and the walk stops
// there. A check-out equal to the check-in is a valid 1-night stay; the walk
// has nothing to visit.
pub fn validate_checkout(
    index: &AvailabilityIndex,
    check_in: NaiveDate,
    candidate_check_out: NaiveDate,
) -> Result<DateRangeCandidate, ValidationError> {
    if candidate_check_out < check_in {
        return Err(ValidationError::CheckoutBeforeCheckin);
    }

    for day in check_in
        .iter_days()
        .skip(1)
        .take_while(|day| *day <= candidate_check_out)
    {
        if index.is_booked(day) {
            return Err(ValidationError::OverlapsExistingBooking { conflict: day });
        }
    }

    Ok(DateRangeCandidate {
        check_in: Some(check_in),
        check_out: Some(candidate_check_out),
    })
}
