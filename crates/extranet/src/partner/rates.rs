//! Per-room, per-day rate calendar and the bulk override applied to it.

use super::property::RoomCategory;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

pub const DAYS_IN_MONTH: u8 = 30;

/// Room type to day-of-month to rate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateGrid {
    cells: BTreeMap<String, BTreeMap<u8, u32>>,
}

impl RateGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every day of every room starts at the room's base rate.
    pub fn from_rooms(rooms: &[RoomCategory]) -> Self {
        Self::seeded(rooms, |_, _| 0)
    }

    /// Seeds each cell with the base rate shifted by `adjust`, floored at zero.
    pub fn seeded<F>(rooms: &[RoomCategory], mut adjust: F) -> Self
    where
        F: FnMut(&RoomCategory, u8) -> i64,
    {
        let cells = rooms
            .iter()
            .map(|room| {
                let days = (1..=DAYS_IN_MONTH)
                    .map(|day| {
                        let rate = i64::from(room.base_rate) + adjust(room, day);
                        (day, u32::try_from(rate.max(0)).unwrap_or(u32::MAX))
                    })
                    .collect();
                (room.room_type.clone(), days)
            })
            .collect();
        Self { cells }
    }

    pub fn rate(&self, room_type: &str, day: u8) -> Option<u32> {
        self.cells.get(room_type)?.get(&day).copied()
    }

    pub fn room_types(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn row(&self, room_type: &str) -> Option<&BTreeMap<u8, u32>> {
        self.cells.get(room_type)
    }

    /// Validates the whole request before touching any cell.
    pub fn apply_bulk(
        &mut self,
        room_type: &str,
        days: &BTreeSet<u8>,
        rate: i64,
    ) -> Result<BulkRateOutcome, RateError> {
        let rate = validate_rate(rate)?;
        if let Some(day) = days
            .iter()
            .copied()
            .find(|day| !(1..=DAYS_IN_MONTH).contains(day))
        {
            return Err(RateError::DayOutOfRange(day));
        }
        let row = self
            .cells
            .get_mut(room_type)
            .ok_or_else(|| RateError::UnknownRoomType(room_type.to_string()))?;

        for day in days {
            row.insert(*day, rate);
        }

        Ok(BulkRateOutcome {
            room_type: room_type.to_string(),
            rate,
            days_updated: days.len(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkRateOutcome {
    pub room_type: String,
    pub rate: u32,
    pub days_updated: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateError {
    #[error("rate must be a positive whole number, got '{0}'")]
    InvalidRate(String),
    #[error("room type '{0}' is not on the rate calendar")]
    UnknownRoomType(String),
    #[error("day {0} is outside 1-30")]
    DayOutOfRange(u8),
}

fn validate_rate(rate: i64) -> Result<u32, RateError> {
    match u32::try_from(rate) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(RateError::InvalidRate(rate.to_string())),
    }
}

/// Parses the free-text rate box. Only positive whole numbers are accepted.
pub fn parse_rate(raw: &str) -> Result<u32, RateError> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| RateError::InvalidRate(trimmed.to_string()))?;
    validate_rate(value)
}

/// Returns a copy of `grid` with the override applied; `grid` itself is never changed.
pub fn apply_bulk_rate(
    grid: &RateGrid,
    room_type: &str,
    days: &BTreeSet<u8>,
    rate: i64,
) -> Result<(RateGrid, BulkRateOutcome), RateError> {
    let mut updated = grid.clone();
    match updated.apply_bulk(room_type, days, rate) {
        Ok(outcome) => Ok((updated, outcome)),
        Err(err) => {
            warn!(room_type, rate, error = %err, "bulk rate rejected");
            Err(err)
        }
    }
}
