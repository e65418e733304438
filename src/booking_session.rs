// Host-facing session layer: owns one availability snapshot and the candidate
// being assembled from date-picker selections. All validation failures are
// recovered here by leaving the previous candidate state in place; only a
// malformed index (handled upstream at decode time) degrades the feature.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::availability_index::AvailabilityIndex;
use crate::booking_quote::{quote, BookingQuote, QuoteError};
use crate::range_validation::{
    disabled_date, validate_checkout, DateRangeCandidate, ValidationError,
};

pub struct BookingSession {
    index: AvailabilityIndex,
    nightly_price: u64,
    candidate: DateRangeCandidate,
}

impl BookingSession {
    pub fn new(index: AvailabilityIndex, nightly_price: u64) -> Self {
        Self {
            index,
            nightly_price,
            candidate: DateRangeCandidate::new(),
        }
    }

    pub fn candidate(&self) -> &DateRangeCandidate {
        &self.candidate
    }

    pub fn nightly_price(&self) -> u64 {
        self.nightly_price
    }

    // Whether a calendar cell should be grayed out in the picker
    pub fn disabled_date(&self, date: NaiveDate, today: NaiveDate) -> bool {
        disabled_date(&self.index, date, today)
    }

    // Select a check-in day. The picker grays out disabled days, but the
    // session refuses them anyway. Accepting a new check-in clears any
    // previously accepted check-out.
    pub fn select_check_in(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), ValidationError> {
        if disabled_date(&self.index, date, today) {
            warn!(%date, "rejected unavailable check in selection");
            return Err(ValidationError::UnavailableCheckIn { date });
        }

        if self.candidate.check_out().is_some() {
            debug!(%date, "new check in selected, dropping accepted check out");
        }
        self.candidate.select_check_in(date);
        Ok(())
    }

    // Validate and accept a check-out day. On failure the candidate keeps its
    // prior state so the host can surface the error and let the user retry.
    pub fn select_check_out(
        &mut self,
        date: NaiveDate,
    ) -> Result<&DateRangeCandidate, ValidationError> {
        let check_in = self
            .candidate
            .check_in()
            .ok_or(ValidationError::CheckInNotSelected)?;

        match validate_checkout(&self.index, check_in, date) {
            Ok(accepted) => {
                self.candidate = accepted;
                Ok(&self.candidate)
            }
            Err(err) => {
                warn!(%date, error = %err, "rejected check out selection");
                Err(err)
            }
        }
    }

    // Quote for the current candidate at the session's nightly price
    pub fn quote(&self) -> Result<BookingQuote, QuoteError> {
        quote(&self.candidate, self.nightly_price)
    }

    // Wholesale snapshot replacement after the backing listing's bookings
    // change. An in-progress candidate would reference stale data, so it is
    // discarded rather than revalidated.
    pub fn replace_index(&mut self, index: AvailabilityIndex) {
        if self.candidate.check_in().is_some() {
            debug!("availability snapshot replaced, dropping in-progress candidate");
        }
        self.index = index;
        self.candidate.clear();
    }

    // Drop the candidate after a successful submission or user abandonment
    pub fn reset(&mut self) {
        self.candidate.clear();
    }
}
