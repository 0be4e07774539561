mod domain;
mod filter;
mod import;

pub use domain::{BookingRecord, BookingStatus, UnknownBookingStatus};
pub use filter::{
    filter_bookings, BookingFilter, BookingFilterError, BookingQuery, BookingStats, StatusFilter,
    ALL_MONTHS, ALL_STATUSES,
};
pub use import::{import_bookings, BookingImportError};
