use extranet::partner::catalog;
use extranet::partner::rates::{apply_bulk_rate, RateError, RateGrid, DAYS_IN_MONTH};
use std::collections::BTreeSet;

fn flagship_grid() -> RateGrid {
    let hotels = catalog::sample_hotels();
    let flagship = hotels
        .iter()
        .find(|hotel| hotel.id == "h1")
        .expect("flagship hotel present");
    RateGrid::seeded(&flagship.profile.rooms, |_, day| i64::from(day) - 15)
}

#[test]
fn weekend_override_touches_only_selected_standard_days() {
    let grid = flagship_grid();
    let days: BTreeSet<u8> = [5, 6, 7].into_iter().collect();

    let (updated, outcome) =
        apply_bulk_rate(&grid, "Standard", &days, 150).expect("override applies");

    assert_eq!(outcome.days_updated, 3);
    for room_type in grid.room_types() {
        for day in 1..=DAYS_IN_MONTH {
            let expected = if room_type == "Standard" && days.contains(&day) {
                Some(150)
            } else {
                grid.rate(room_type, day)
            };
            assert_eq!(updated.rate(room_type, day), expected, "{room_type} day {day}");
        }
    }

    let (again, _) = apply_bulk_rate(&updated, "Standard", &days, 150).expect("reapplies");
    assert_eq!(again, updated);
}

#[test]
fn negative_override_leaves_grid_byte_for_byte_unchanged() {
    let grid = flagship_grid();
    let before = serde_json::to_vec(&grid).expect("grid serializes");
    let days: BTreeSet<u8> = [1].into_iter().collect();

    let result = apply_bulk_rate(&grid, "Standard", &days, -5);

    assert_eq!(result, Err(RateError::InvalidRate("-5".to_string())));
    assert_eq!(serde_json::to_vec(&grid).expect("grid serializes"), before);
}
