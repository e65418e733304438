// Nights and total-price derivation for an accepted date range. Quotes are
// ephemeral: the host recomputes them on every candidate change and never
// persists them.

use serde::Serialize;
use thiserror::Error;

use crate::range_validation::DateRangeCandidate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    // Precondition violation in the host, not a user-recoverable state
    #[error("quote requested before a check out date was accepted")]
    InvalidCandidate,

    #[error("total price overflows for {nights} nights at {nightly_price} minor units")]
    PriceOverflow { nights: u32, nightly_price: u64 },
}

// Derived summary for an accepted candidate. Counting is inclusive of both
// endpoints: check-in equal to check-out is a 1-night stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingQuote {
    pub nights: u32,
    pub total: u64,
}

// Compute the quote for a complete candidate at the listing's nightly price
// (minor currency units, e.g. cents).
pub fn quote(
    candidate: &DateRangeCandidate,
    nightly_price: u64,
) -> Result<BookingQuote, QuoteError> {
    let (check_in, check_out) = match (candidate.check_in(), candidate.check_out()) {
        (Some(check_in), Some(check_out)) => (check_in, check_out),
        _ => return Err(QuoteError::InvalidCandidate),
    };

    // Candidates normally arrive through validation, but a deserialized one
    // can carry a reversed pair; a negative difference is not a valid stay.
    let nights = u32::try_from((check_out - check_in).num_days())
        .map_err(|_| QuoteError::InvalidCandidate)?
        + 1;
    let total = u64::from(nights)
        .checked_mul(nightly_price)
        .ok_or(QuoteError::PriceOverflow {
            nights,
            nightly_price,
        })?;

    Ok(BookingQuote { nights, total })
}

// Display helper for prices held in minor units. Rounded form is used in
// headline positions, exact form in charge summaries.
pub fn format_listing_price(minor_units: u64, round: bool) -> String {
    if round {
        let major = (minor_units + 50) / 100;
        format!("${}", major)
    } else {
        let exact = minor_units as f64 / 100.0;
        format!("${}", exact)
    }
}
