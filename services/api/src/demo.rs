use crate::infra::{load_bookings, ExtranetState};
use chrono::NaiveDate;
use clap::Args;
use extranet::error::AppError;
use extranet::partner::admin::{leaderboard, FleetOverview};
use extranet::partner::bookings::{
    filter_bookings, BookingFilter, BookingQuery, BookingRecord, BookingStats, BookingStatus,
};
use extranet::partner::catalog;
use extranet::partner::content::{score_profile, ContentFactor, AMENITY_CATALOG};
use extranet::partner::onboarding::{
    suggest_places, ChannelManagerLink, KycDocument, OnboardingDraft, RoomField,
};
use extranet::partner::performance::{MarketIntel, PerformanceSummary, MONTH_LABELS};
use extranet::partner::rates::{apply_bulk_rate, parse_rate};
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Catalog hotel to walk through
    #[arg(long, default_value = "h1")]
    pub(crate) hotel_id: String,
    /// Optional bookings CSV export replacing the bundled reservations
    #[arg(long)]
    pub(crate) bookings_csv: Option<PathBuf>,
    /// Rate applied to the first week of the calendar
    #[arg(long, default_value = "199")]
    pub(crate) rate: String,
    /// Place search used to prefill the onboarding wizard
    #[arg(long, default_value = "Marina")]
    pub(crate) place_query: String,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            hotel_id: "h1".to_string(),
            bookings_csv: None,
            rate: "199".to_string(),
            place_query: "Marina".to_string(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct BookingSearchArgs {
    /// Confirmed, Cancelled, Checked Out or all
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Check-in month 1-12, or 0 for every month
    #[arg(long)]
    pub(crate) month: Option<String>,
    /// Exact check-in date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Case-insensitive match on guest name or booking id
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Bookings CSV export to search instead of the bundled sample
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_booking_search(args: BookingSearchArgs) -> Result<(), AppError> {
    let bookings = load_bookings(args.csv.as_deref())?;
    let matched = search(&bookings, args)?;

    println!("{} of {} bookings match", matched.len(), bookings.len());
    for booking in &matched {
        render_booking(booking);
    }
    Ok(())
}

fn search(bookings: &[BookingRecord], args: BookingSearchArgs) -> Result<Vec<BookingRecord>, AppError> {
    let mut filter = BookingFilter::try_from(BookingQuery {
        status: args.status,
        month: args.month,
        date: None,
        query: args.query,
    })?;
    if let Some(date) = args.date {
        filter = filter.with_exact_date(date);
    }
    Ok(filter_bookings(bookings, &filter))
}

fn render_booking(booking: &BookingRecord) {
    println!(
        "  {} | {:<16} | {:<18} | {} -> {} ({} nights) | EUR {} | {}",
        booking.id,
        booking.customer_name,
        booking.room_type,
        booking.check_in,
        booking.check_out,
        booking.nights(),
        booking.price,
        booking.status.label()
    );
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        hotel_id,
        bookings_csv,
        rate,
        place_query,
    } = args;

    let bookings = load_bookings(bookings_csv.as_deref())?;
    let state = ExtranetState::from_catalog(&hotel_id, bookings)?;
    let hotel = state.hotel()?;

    println!("Partner extranet demo for {}", hotel.profile.name);
    println!(
        "- {} | {} star | {} | onboarding {}",
        hotel.property_id,
        hotel.profile.star_rating.value(),
        hotel.profile.city,
        hotel.onboarding_status.label()
    );

    let card = score_profile(&hotel.profile);
    println!(
        "\nContent score {}/100{}",
        card.total,
        if card.premium { " (premium)" } else { "" }
    );
    for factor in ContentFactor::ordered() {
        if let Some(component) = card.component(factor) {
            println!(
                "  - {}: {}/{} ({})",
                factor.label(),
                component.points,
                factor.max_points(),
                component.notes
            );
        }
    }

    demo_onboarding(&state, &place_query)?;

    println!("\nReservations");
    let stats = BookingStats::tally(&state.bookings);
    println!(
        "- {} total | {} confirmed | {} cancelled | {} checked out",
        stats.total, stats.confirmed, stats.cancelled, stats.checked_out
    );
    let upcoming = filter_bookings(
        &state.bookings,
        &BookingFilter::default().with_status(BookingStatus::Confirmed),
    );
    for booking in upcoming.iter().take(3) {
        render_booking(booking);
    }

    println!("\nRate calendar");
    let rate = parse_rate(&rate)?;
    let first_week: BTreeSet<u8> = (1..=7).collect();
    let mut grid = state.rates.lock().expect("rate mutex poisoned");
    let room_type = grid
        .room_types()
        .next()
        .map(str::to_string)
        .ok_or_else(|| AppError::HotelNotFound(hotel.id.clone()))?;
    let before = grid.rate(&room_type, 1);
    let (updated, outcome) = apply_bulk_rate(&grid, &room_type, &first_week, i64::from(rate))?;
    *grid = updated;
    println!(
        "- {} days of {} set to EUR {} (day 1 was EUR {})",
        outcome.days_updated,
        outcome.room_type,
        outcome.rate,
        before.map_or_else(|| "-".to_string(), |value| value.to_string())
    );
    drop(grid);

    let lead_rate = hotel.profile.rooms.first().map(|room| room.base_rate);
    if let Some(series) = state.performance_for(&hotel.id) {
        let market = state.market_for(&hotel.profile.city);
        let summary = PerformanceSummary::build(series, market, lead_rate);

        println!("\nPerformance (vs city ADR EUR {})", summary.city_avg_adr);
        for (idx, label) in MONTH_LABELS.iter().enumerate() {
            let revenue = series.monthly_revenue.get(idx).copied().unwrap_or_default();
            let adr = series.adr.get(idx).copied().unwrap_or_default();
            println!("  {label}: EUR {revenue} revenue | ADR EUR {adr}");
        }
        if let Some(gap) = summary.adr_gap_pct {
            println!("- latest ADR is {gap:+}% against the city average");
        }
        if let Some(position) = summary.position {
            println!("- lead room priced {}", position.label());
        }
    }

    if let Some(intel) = MarketIntel::resolve(&state.market, &hotel.profile.city, lead_rate) {
        println!(
            "\nMarket intelligence for {}{}",
            intel.city,
            if intel.fallback { " (fallback market)" } else { "" }
        );
        println!(
            "- city ADR EUR {} | demand {} | peak occupancy {}%",
            intel.avg_adr,
            intel.demand.label(),
            intel.peak_occupancy.unwrap_or_default()
        );
        println!(
            "- pricing bands: budget EUR {} | mid EUR {} | luxury EUR {}",
            intel.pricing_bands.budget, intel.pricing_bands.mid, intel.pricing_bands.luxury
        );
        let trend: Vec<String> = intel
            .occupancy_trend
            .iter()
            .map(|point| format!("{} {}%", point.month, point.occupancy))
            .collect();
        println!("- occupancy: {}", trend.join(", "));
    }

    let listings = state.listings.lock().expect("listing mutex poisoned");
    let overview = FleetOverview::from_listings(&listings);
    println!("\nFleet overview");
    println!(
        "- {} properties | {} active | {} pending review | avg score {} | {}% channel manager",
        overview.total_properties,
        overview.active_properties,
        overview.pending_review,
        overview.avg_content_score,
        overview.channel_manager_connected_pct
    );
    for entry in leaderboard(&listings).iter().take(3) {
        println!("  #{} {} ({})", entry.rank, entry.hotel_name, entry.score);
    }

    Ok(())
}

fn demo_onboarding(state: &ExtranetState, place_query: &str) -> Result<(), AppError> {
    println!("\nOnboarding walkthrough");
    let places = catalog::sample_places();
    let mut draft = OnboardingDraft::default();

    match suggest_places(&places, place_query).first() {
        Some(place) => draft.apply_place(place),
        None => println!("- no place matches '{place_query}', continuing with a blank hotel"),
    }
    report_step(&draft);

    draft.next_step();
    draft.update_room(0, RoomField::Count, 24)?;
    draft.update_room(0, RoomField::BaseRate, 140)?;
    report_step(&draft);

    draft.next_step();
    draft.contract.accepted = true;
    draft.contract.signature = "Front Office Manager".to_string();
    report_step(&draft);

    draft.next_step();
    for document in [KycDocument::IdProof, KycDocument::TaxId] {
        draft.kyc.mark_uploaded(document);
        println!("  uploaded {}", document.label());
    }
    report_step(&draft);

    draft.next_step();
    draft.channel_manager = ChannelManagerLink {
        provider: "SiteMinder".to_string(),
        api_key: "demo-key-0042".to_string(),
        connected: false,
    };
    draft.channel_manager.connect()?;
    report_step(&draft);

    draft.next_step();
    draft
        .content
        .amenities
        .extend(AMENITY_CATALOG.iter().take(4).map(|amenity| amenity.to_string()));
    let description = draft.generate_description().to_string();
    report_step(&draft);
    println!("  description: {description}");

    draft.next_step();
    let property_id = draft.submit(state.next_property_serial())?;
    println!(
        "- submitted at {}% as {property_id}",
        draft.completion_pct()
    );
    Ok(())
}

fn report_step(draft: &OnboardingDraft) {
    println!(
        "- step {} {}: {}% complete",
        draft.step.index() + 1,
        draft.step.label(),
        draft.completion_pct()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_combines_raw_filters_with_exact_date() {
        let bookings = catalog::sample_bookings();
        let args = BookingSearchArgs {
            status: Some("all".to_string()),
            date: NaiveDate::from_ymd_opt(2026, 3, 5),
            ..BookingSearchArgs::default()
        };

        let matched = search(&bookings, args).expect("valid filter");
        let ids: Vec<_> = matched.iter().map(|booking| booking.id.as_str()).collect();
        assert_eq!(ids, vec!["BK-002"]);
    }

    #[test]
    fn search_rejects_month_out_of_range() {
        let args = BookingSearchArgs {
            month: Some("13".to_string()),
            ..BookingSearchArgs::default()
        };
        let err = search(&catalog::sample_bookings(), args).expect_err("month rejected");
        assert!(matches!(err, AppError::BookingFilter(_)));
    }

    #[test]
    fn demo_runs_against_sample_catalog() {
        assert!(run_demo(DemoArgs::default()).is_ok());
    }

    #[test]
    fn demo_rejects_unknown_hotel() {
        let args = DemoArgs {
            hotel_id: "h77".to_string(),
            ..DemoArgs::default()
        };
        assert!(matches!(run_demo(args), Err(AppError::HotelNotFound(_))));
    }
}
