//! Demo dataset served by the extranet until a real property store exists.

use super::bookings::{BookingRecord, BookingStatus};
use super::onboarding::{Coordinates, PlaceSuggestion};
use super::performance::{DemandLevel, MarketSnapshot, PerformanceSeries, PricingBands};
use super::property::{HotelListing, OnboardingStatus, PropertyProfile, RoomCategory, StarRating};
use chrono::NaiveDate;

fn rooms(entries: &[(&str, u32, u32)]) -> Vec<RoomCategory> {
    entries
        .iter()
        .map(|(room_type, count, base_rate)| RoomCategory::new(*room_type, *count, *base_rate))
        .collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    property_id: &str,
    status: OnboardingStatus,
    channel_manager_connected: bool,
    content_score: u8,
    profile: PropertyProfile,
    room_entries: &[(&str, u32, u32)],
    amenities: &[&str],
) -> HotelListing {
    let profile = PropertyProfile {
        rooms: rooms(room_entries),
        ..profile.with_amenities(strings(amenities))
    };
    HotelListing {
        id: id.to_string(),
        property_id: property_id.to_string(),
        onboarding_status: status,
        channel_manager_connected,
        content_score,
        profile,
    }
}

pub fn sample_hotels() -> Vec<HotelListing> {
    vec![
        listing(
            "h1",
            "SH-FLR-001",
            OnboardingStatus::Completed,
            true,
            88,
            PropertyProfile::new(
                "Starhotels Collezione - Hotel Helvetia & Bristol",
                "Via dei Pescioni 2, 50123 Florence, Italy",
                StarRating::FIVE,
                "Florence",
            )
            .with_description(
                "A luxurious 5-star property in the heart of Florence, offering timeless elegance and modern comfort.",
            ),
            &[
                ("Standard", 30, 180),
                ("Deluxe Sea View", 15, 320),
                ("Junior Suite", 8, 450),
                ("Presidential Suite", 2, 1200),
            ],
            &["WiFi", "Spa", "Pool", "Restaurant", "Bar", "Gym", "Concierge", "Room Service"],
        ),
        listing(
            "h2",
            "SH-ROM-002",
            OnboardingStatus::Completed,
            true,
            75,
            PropertyProfile::new(
                "Starhotels Michelangelo Rome",
                "Via della Stazione di San Pietro 14, 00165 Rome, Italy",
                StarRating::FOUR,
                "Rome",
            )
            .with_description(
                "Contemporary elegance near the Vatican, perfect for leisure and business travelers.",
            ),
            &[
                ("Standard", 50, 140),
                ("Deluxe Sea View", 20, 240),
                ("Junior Suite", 10, 380),
            ],
            &["WiFi", "Restaurant", "Bar", "Gym", "Concierge"],
        ),
        listing(
            "h3",
            "SH-MIL-003",
            OnboardingStatus::PendingApproval,
            false,
            62,
            PropertyProfile::new(
                "Starhotels Echo Milan",
                "Viale Andrea Doria 4, 20124 Milan, Italy",
                StarRating::FOUR,
                "Milan",
            )
            .with_description("An eco-friendly urban retreat in central Milan."),
            &[("Standard", 40, 160), ("Deluxe Sea View", 12, 280)],
            &["WiFi", "Restaurant", "Gym"],
        ),
        listing(
            "h4",
            "SH-VEN-004",
            OnboardingStatus::InProgress,
            false,
            45,
            PropertyProfile::new(
                "Grand Hotel Venezia",
                "Riva degli Schiavoni 4149, 30122 Venice, Italy",
                StarRating::FIVE,
                "Venice",
            ),
            &[("Standard", 25, 220), ("Junior Suite", 6, 520)],
            &["WiFi", "Restaurant", "Bar", "Room Service"],
        ),
        listing(
            "h5",
            "SH-GEN-005",
            OnboardingStatus::Completed,
            true,
            92,
            PropertyProfile::new(
                "Starhotels President Genoa",
                "Corte Lambruschini 4, 16129 Genoa, Italy",
                StarRating::THREE,
                "Genoa",
            )
            .with_description("A charming seaside property with stunning harbor views."),
            &[("Standard", 35, 110), ("Deluxe Sea View", 10, 190)],
            &["WiFi", "Restaurant", "Bar", "Gym", "Pool", "Spa"],
        ),
    ]
}

pub fn sample_performance() -> Vec<PerformanceSeries> {
    vec![
        PerformanceSeries {
            hotel_id: "h1".to_string(),
            monthly_revenue: vec![120_000, 135_000, 128_000, 145_000, 160_000, 172_000],
            bookings: vec![320, 350, 310, 380, 410, 440],
            adr: vec![375, 386, 413, 382, 390, 391],
            cancellation_rate: vec![8, 6, 7, 5, 4, 3],
        },
        PerformanceSeries {
            hotel_id: "h2".to_string(),
            monthly_revenue: vec![85_000, 92_000, 88_000, 97_000, 105_000, 112_000],
            bookings: vec![420, 460, 430, 490, 520, 550],
            adr: vec![202, 200, 205, 198, 202, 204],
            cancellation_rate: vec![10, 9, 11, 8, 7, 6],
        },
    ]
}

fn market(
    city: &str,
    avg_adr: u32,
    occupancy: [u8; 6],
    (budget, mid, luxury): (u32, u32, u32),
    demand: DemandLevel,
) -> MarketSnapshot {
    MarketSnapshot {
        city: city.to_string(),
        avg_adr,
        occupancy: occupancy.to_vec(),
        pricing_bands: PricingBands {
            budget,
            mid,
            luxury,
        },
        demand,
    }
}

pub fn sample_market() -> Vec<MarketSnapshot> {
    vec![
        market("Florence", 350, [72, 75, 80, 85, 82, 78], (120, 250, 450), DemandLevel::High),
        market("Rome", 280, [68, 72, 76, 80, 78, 74], (100, 200, 380), DemandLevel::High),
        market("Milan", 260, [65, 70, 73, 78, 75, 71], (90, 180, 350), DemandLevel::Medium),
        market("Venice", 320, [60, 65, 75, 82, 80, 70], (110, 220, 420), DemandLevel::Medium),
        market("Genoa", 180, [55, 60, 65, 70, 68, 62], (70, 140, 260), DemandLevel::Low),
    ]
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("catalog dates are valid")
}

fn booking(
    id: &str,
    customer_name: &str,
    room_type: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    price: u32,
    status: BookingStatus,
) -> BookingRecord {
    BookingRecord {
        id: id.to_string(),
        customer_name: customer_name.to_string(),
        room_type: room_type.to_string(),
        check_in,
        check_out,
        price,
        status,
    }
}

pub fn sample_bookings() -> Vec<BookingRecord> {
    use BookingStatus::{Cancelled, CheckedOut, Confirmed};

    vec![
        booking("BK-001", "Marco Rossi", "Deluxe Sea View", day(2026, 3, 10), day(2026, 3, 14), 1280, Confirmed),
        booking("BK-002", "Elena Fischer", "Junior Suite", day(2026, 3, 5), day(2026, 3, 8), 1350, Confirmed),
        booking("BK-003", "James Carter", "Standard", day(2026, 2, 20), day(2026, 2, 23), 540, CheckedOut),
        booking("BK-004", "Sophie Laurent", "Presidential Suite", day(2026, 3, 15), day(2026, 3, 20), 6000, Confirmed),
        booking("BK-005", "Hiroshi Tanaka", "Deluxe Sea View", day(2026, 2, 10), day(2026, 2, 13), 960, CheckedOut),
        booking("BK-006", "Maria Garcia", "Standard", day(2026, 2, 25), day(2026, 2, 28), 540, Cancelled),
        booking("BK-007", "Luca Bianchi", "Junior Suite", day(2026, 4, 1), day(2026, 4, 5), 1800, Confirmed),
        booking("BK-008", "Anna Müller", "Standard", day(2026, 1, 15), day(2026, 1, 18), 540, CheckedOut),
        booking("BK-009", "Oliver Smith", "Deluxe Sea View", day(2026, 3, 22), day(2026, 3, 26), 1280, Confirmed),
        booking("BK-010", "Priya Sharma", "Junior Suite", day(2026, 2, 1), day(2026, 2, 4), 1350, Cancelled),
        booking("BK-011", "Chen Wei", "Presidential Suite", day(2026, 1, 20), day(2026, 1, 25), 6000, CheckedOut),
        booking("BK-012", "Emily Johnson", "Standard", day(2026, 4, 10), day(2026, 4, 13), 540, Confirmed),
    ]
}

fn place(name: &str, address: &str, lat: f64, lng: f64, phone: &str) -> PlaceSuggestion {
    PlaceSuggestion {
        name: name.to_string(),
        address: address.to_string(),
        coordinates: Coordinates { lat, lng },
        phone: phone.to_string(),
    }
}

pub fn sample_places() -> Vec<PlaceSuggestion> {
    vec![
        place("Hotel Bella Vista", "Via Roma 42, Florence, Italy", 43.77, 11.25, "+39 055 1234567"),
        place("Grand Palace Hotel", "Piazza del Duomo 5, Milan, Italy", 45.46, 9.19, "+39 02 5551234"),
        place("Marina Bay Resort", "Corso Italia 28, Genoa, Italy", 44.41, 8.93, "+39 010 2612641"),
        place("Hotel Splendido", "Via Roma 15, Florence, Italy", 43.77, 11.25, "+39 055 1234567"),
        place("Palazzo Luxury Hotel", "Via Veneto 42, Rome, Italy", 41.91, 12.49, "+39 06 9876543"),
        place("Hotel Belvedere", "Corso Buenos Aires 8, Milan, Italy", 45.48, 9.21, "+39 02 5551234"),
        place("Ca' Sagredo Hotel", "Campo Santa Sofia, Venice, Italy", 45.44, 12.33, "+39 041 2413111"),
        place("Hotel Continental", "Via Balbi 33, Genoa, Italy", 44.41, 8.93, "+39 010 2612641"),
    ]
}
