use super::domain::{BookingRecord, BookingStatus};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const ALL_STATUSES: &str = "all";
pub const ALL_MONTHS: &str = "0";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Is(BookingStatus),
    /// A label that names no status; it matches no booking.
    Unrecognized(String),
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_STATUSES {
            return Self::All;
        }
        match raw.parse::<BookingStatus>() {
            Ok(status) => Self::Is(status),
            Err(_) => {
                debug!(label = raw, "status filter matches no booking status");
                Self::Unrecognized(raw.to_string())
            }
        }
    }

    fn admits(&self, status: BookingStatus) -> bool {
        match self {
            Self::All => true,
            Self::Is(wanted) => *wanted == status,
            Self::Unrecognized(_) => false,
        }
    }
}

/// Typed booking filter; every active predicate must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingFilter {
    #[serde(default)]
    pub status: StatusFilter,
    /// Check-in month, 1-indexed.
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub exact_date: Option<NaiveDate>,
    #[serde(default)]
    pub query: Option<String>,
}

impl BookingFilter {
    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = StatusFilter::Is(status);
        self
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_exact_date(mut self, date: NaiveDate) -> Self {
        self.exact_date = Some(date);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn matches(&self, record: &BookingRecord) -> bool {
        if !self.status.admits(record.status) {
            return false;
        }
        if let Some(month) = self.month {
            if record.check_in.month() != month {
                return false;
            }
        }
        if let Some(date) = self.exact_date {
            if record.check_in != date {
                return false;
            }
        }
        match self.query.as_deref() {
            Some(query) if !query.is_empty() => {
                let needle = query.to_lowercase();
                record.customer_name.to_lowercase().contains(&needle)
                    || record.id.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }
}

/// Raw filter values as the bookings toolbar submits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingQuery {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

impl TryFrom<BookingQuery> for BookingFilter {
    type Error = BookingFilterError;

    fn try_from(raw: BookingQuery) -> Result<Self, Self::Error> {
        let status = raw
            .status
            .as_deref()
            .map(StatusFilter::parse)
            .unwrap_or_default();

        let month = match raw.month.as_deref().map(str::trim) {
            None | Some("") | Some(ALL_MONTHS) => None,
            Some(value) => {
                let month = value
                    .parse::<u32>()
                    .map_err(|_| BookingFilterError::InvalidMonth(value.to_string()))?;
                if !(1..=12).contains(&month) {
                    return Err(BookingFilterError::InvalidMonth(value.to_string()));
                }
                Some(month)
            }
        };

        let exact_date = match raw.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map_err(|_| BookingFilterError::InvalidDate(value.to_string()))?,
            ),
        };

        let query = raw.query.filter(|query| !query.is_empty());

        Ok(Self {
            status,
            month,
            exact_date,
            query,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingFilterError {
    #[error("month filter '{0}' must be 0 (all) or 1-12")]
    InvalidMonth(String),
    #[error("date filter '{0}' must be formatted YYYY-MM-DD")]
    InvalidDate(String),
}

/// Matching bookings, most recent check-in first. Equal check-ins keep input order.
pub fn filter_bookings(records: &[BookingRecord], filter: &BookingFilter) -> Vec<BookingRecord> {
    let mut matched: Vec<BookingRecord> = records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();
    matched.sort_by(|left, right| right.check_in.cmp(&left.check_in));
    matched
}

/// Per-status counts for the bookings summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStats {
    pub total: usize,
    pub confirmed: usize,
    pub cancelled: usize,
    pub checked_out: usize,
}

impl BookingStats {
    pub fn tally(records: &[BookingRecord]) -> Self {
        records.iter().fold(Self::default(), |mut stats, record| {
            stats.total += 1;
            match record.status {
                BookingStatus::Confirmed => stats.confirmed += 1,
                BookingStatus::Cancelled => stats.cancelled += 1,
                BookingStatus::CheckedOut => stats.checked_out += 1,
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn booking(id: &str, name: &str, check_in: NaiveDate, status: BookingStatus) -> BookingRecord {
        BookingRecord {
            id: id.to_string(),
            customer_name: name.to_string(),
            room_type: "Standard".to_string(),
            check_in,
            check_out: check_in + chrono::Duration::days(2),
            price: 360,
            status,
        }
    }

    #[test]
    fn no_filters_sorts_by_check_in_descending() {
        let records = vec![
            booking("BK-1", "A", date(2026, 3, 10), BookingStatus::Confirmed),
            booking("BK-2", "B", date(2026, 2, 20), BookingStatus::Confirmed),
            booking("BK-3", "C", date(2026, 3, 15), BookingStatus::Confirmed),
        ];

        let dates: Vec<_> = filter_bookings(&records, &BookingFilter::default())
            .into_iter()
            .map(|record| record.check_in)
            .collect();

        assert_eq!(
            dates,
            vec![date(2026, 3, 15), date(2026, 3, 10), date(2026, 2, 20)]
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let same_day = date(2026, 1, 5);
        let records = vec![
            booking("BK-1", "First", same_day, BookingStatus::Confirmed),
            booking("BK-2", "Second", date(2026, 1, 9), BookingStatus::Confirmed),
            booking("BK-3", "Third", same_day, BookingStatus::Confirmed),
        ];

        let ids: Vec<_> = filter_bookings(&records, &BookingFilter::default())
            .into_iter()
            .map(|record| record.id)
            .collect();

        assert_eq!(ids, vec!["BK-2", "BK-1", "BK-3"]);
    }

    #[test]
    fn query_matches_name_or_id_case_insensitively() {
        let records = vec![
            booking("BK-001", "Marco Rossi", date(2026, 3, 10), BookingStatus::Confirmed),
            booking("BK-002", "Elena Fischer", date(2026, 3, 5), BookingStatus::Confirmed),
        ];

        let by_name = filter_bookings(&records, &BookingFilter::default().with_query("ROSSI"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "BK-001");

        let by_id = filter_bookings(&records, &BookingFilter::default().with_query("bk-002"));
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].customer_name, "Elena Fischer");
    }

    #[test]
    fn predicates_are_combined() {
        let records = vec![
            booking("BK-1", "Anna", date(2026, 2, 1), BookingStatus::Cancelled),
            booking("BK-2", "Anna", date(2026, 3, 1), BookingStatus::Cancelled),
            booking("BK-3", "Anna", date(2026, 2, 1), BookingStatus::Confirmed),
        ];
        let filter = BookingFilter::default()
            .with_status(BookingStatus::Cancelled)
            .with_month(2)
            .with_query("anna");

        let matched = filter_bookings(&records, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "BK-1");

        let on_day = filter_bookings(
            &records,
            &BookingFilter::default().with_exact_date(date(2026, 2, 1)),
        );
        assert_eq!(on_day.len(), 2);
    }

    #[test]
    fn raw_query_honours_sentinels() {
        let filter = BookingFilter::try_from(BookingQuery {
            status: Some("all".to_string()),
            month: Some("0".to_string()),
            date: None,
            query: Some(String::new()),
        })
        .expect("sentinels parse");

        assert_eq!(filter, BookingFilter::default());
    }

    #[test]
    fn raw_query_parses_values() {
        let filter = BookingFilter::try_from(BookingQuery {
            status: Some("Checked Out".to_string()),
            month: Some("2".to_string()),
            date: Some("2026-02-20".to_string()),
            query: Some("carter".to_string()),
        })
        .expect("values parse");

        assert_eq!(filter.status, StatusFilter::Is(BookingStatus::CheckedOut));
        assert_eq!(filter.month, Some(2));
        assert_eq!(filter.exact_date, Some(date(2026, 2, 20)));
    }

    #[test]
    fn lowercase_status_matches_nothing() {
        let records = vec![booking(
            "BK-1",
            "Maria",
            date(2026, 2, 25),
            BookingStatus::Cancelled,
        )];
        let filter = BookingFilter::try_from(BookingQuery {
            status: Some("cancelled".to_string()),
            ..BookingQuery::default()
        })
        .expect("unknown labels are not errors");

        assert!(filter_bookings(&records, &filter).is_empty());
    }

    #[test]
    fn malformed_month_and_date_are_rejected() {
        let month = BookingFilter::try_from(BookingQuery {
            month: Some("13".to_string()),
            ..BookingQuery::default()
        });
        assert_eq!(month, Err(BookingFilterError::InvalidMonth("13".to_string())));

        let date = BookingFilter::try_from(BookingQuery {
            date: Some("20/02/2026".to_string()),
            ..BookingQuery::default()
        });
        assert_eq!(
            date,
            Err(BookingFilterError::InvalidDate("20/02/2026".to_string()))
        );
    }

    #[test]
    fn stats_count_each_status() {
        let records = vec![
            booking("BK-1", "A", date(2026, 1, 1), BookingStatus::Confirmed),
            booking("BK-2", "B", date(2026, 1, 2), BookingStatus::Cancelled),
            booking("BK-3", "C", date(2026, 1, 3), BookingStatus::CheckedOut),
            booking("BK-4", "D", date(2026, 1, 4), BookingStatus::Confirmed),
        ];

        assert_eq!(
            BookingStats::tally(&records),
            BookingStats {
                total: 4,
                confirmed: 2,
                cancelled: 1,
                checked_out: 1,
            }
        );
    }
}
