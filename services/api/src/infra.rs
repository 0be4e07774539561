use chrono::NaiveDate;
use extranet::error::AppError;
use extranet::partner::bookings::{import_bookings, BookingRecord};
use extranet::partner::catalog;
use extranet::partner::performance::{MarketSnapshot, PerformanceSeries};
use extranet::partner::rates::RateGrid;
use extranet::partner::{HotelListing, RoomCategory};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::sync::{Arc, Mutex};

const FIRST_SERIAL: u16 = 100;
const LAST_SERIAL: u16 = 999;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory extranet data shared by the partner routes.
#[derive(Clone)]
pub(crate) struct ExtranetState {
    pub(crate) hotel_id: String,
    pub(crate) listings: Arc<Mutex<Vec<HotelListing>>>,
    pub(crate) bookings: Arc<Vec<BookingRecord>>,
    pub(crate) rates: Arc<Mutex<RateGrid>>,
    pub(crate) performance: Arc<Vec<PerformanceSeries>>,
    pub(crate) market: Arc<Vec<MarketSnapshot>>,
    next_serial: Arc<AtomicU16>,
}

impl ExtranetState {
    pub(crate) fn from_catalog(
        hotel_id: &str,
        bookings: Vec<BookingRecord>,
    ) -> Result<Self, AppError> {
        let listings = catalog::sample_hotels();
        let hotel = listings
            .iter()
            .find(|listing| listing.id == hotel_id)
            .ok_or_else(|| AppError::HotelNotFound(hotel_id.to_string()))?;
        let rates = RateGrid::seeded(&hotel.profile.rooms, calendar_spread);

        Ok(Self {
            hotel_id: hotel_id.to_string(),
            listings: Arc::new(Mutex::new(listings)),
            bookings: Arc::new(bookings),
            rates: Arc::new(Mutex::new(rates)),
            performance: Arc::new(catalog::sample_performance()),
            market: Arc::new(catalog::sample_market()),
            next_serial: Arc::new(AtomicU16::new(FIRST_SERIAL)),
        })
    }

    pub(crate) fn hotel(&self) -> Result<HotelListing, AppError> {
        let guard = self.listings.lock().expect("listing mutex poisoned");
        guard
            .iter()
            .find(|listing| listing.id == self.hotel_id)
            .cloned()
            .ok_or_else(|| AppError::HotelNotFound(self.hotel_id.clone()))
    }

    /// Falls back to the first series, as the dashboard does for hotels without history.
    pub(crate) fn performance_for(&self, hotel_id: &str) -> Option<&PerformanceSeries> {
        self.performance
            .iter()
            .find(|series| series.hotel_id == hotel_id)
            .or_else(|| self.performance.first())
    }

    pub(crate) fn market_for(&self, city: &str) -> Option<&MarketSnapshot> {
        self.market.iter().find(|snapshot| snapshot.city == city)
    }

    /// Cycles through 100..=999.
    pub(crate) fn next_property_serial(&self) -> u16 {
        let serial = self
            .next_serial
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some(if current >= LAST_SERIAL {
                    FIRST_SERIAL
                } else {
                    current + 1
                })
            })
            .unwrap_or(FIRST_SERIAL);
        serial.clamp(FIRST_SERIAL, LAST_SERIAL)
    }
}

/// Deterministic stand-in for day-to-day price movement, within ±20 of the base rate.
pub(crate) fn calendar_spread(room: &RoomCategory, day: u8) -> i64 {
    (i64::from(day) * 7 + i64::from(room.base_rate)) % 41 - 20
}

pub(crate) fn load_bookings(path: Option<&Path>) -> Result<Vec<BookingRecord>, AppError> {
    match path {
        Some(path) => {
            let file = File::open(path)?;
            Ok(import_bookings(file)?)
        }
        None => Ok(catalog::sample_bookings()),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
