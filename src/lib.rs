// Booking availability engine for a rental marketplace listing.
// Pure date/range logic only; the surrounding UI, the remote API and the
// payment gateway are external collaborators.

pub mod availability_index;
pub mod booking_quote;
pub mod booking_session;
pub mod range_validation;

// Re-export key types for convenience
pub use availability_index::{AvailabilityIndex, MalformedIndexError};
pub use booking_quote::{format_listing_price, quote, BookingQuote, QuoteError};
pub use booking_session::BookingSession;
pub use range_validation::{
    disabled_date, validate_checkout, DateRangeCandidate, ValidationError,
};
