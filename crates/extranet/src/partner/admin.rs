use super::property::{HotelListing, OnboardingStatus, StarRating};
use serde::{Deserialize, Serialize};

/// Headline numbers for the admin console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetOverview {
    pub total_properties: usize,
    pub active_properties: usize,
    pub pending_review: usize,
    pub avg_content_score: u8,
    pub channel_manager_connected_pct: u8,
}

impl FleetOverview {
    pub fn from_listings(listings: &[HotelListing]) -> Self {
        if listings.is_empty() {
            return Self::default();
        }

        let total = listings.len();
        let count_status = |status: OnboardingStatus| {
            listings
                .iter()
                .filter(|listing| listing.onboarding_status == status)
                .count()
        };
        let score_sum: u32 = listings
            .iter()
            .map(|listing| u32::from(listing.content_score))
            .sum();
        let connected = listings
            .iter()
            .filter(|listing| listing.channel_manager_connected)
            .count();

        Self {
            total_properties: total,
            active_properties: count_status(OnboardingStatus::Completed),
            pending_review: count_status(OnboardingStatus::PendingApproval),
            avg_content_score: rounded_ratio(score_sum as f64, total as f64, 1.0),
            channel_manager_connected_pct: rounded_ratio(connected as f64, total as f64, 100.0),
        }
    }
}

fn rounded_ratio(numerator: f64, denominator: f64, scale: f64) -> u8 {
    (numerator / denominator * scale).round().clamp(0.0, 100.0) as u8
}

/// `None` keeps every listing.
pub fn filter_by_star_rating(
    listings: &[HotelListing],
    rating: Option<StarRating>,
) -> Vec<&HotelListing> {
    listings
        .iter()
        .filter(|listing| rating.map_or(true, |wanted| listing.profile.star_rating == wanted))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub const fn resulting_status(self) -> OnboardingStatus {
        match self {
            Self::Approve => OnboardingStatus::Completed,
            Self::Reject => OnboardingStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminError {
    #[error("no hotel listing with id '{0}'")]
    ListingNotFound(String),
}

/// Returns the listings with the reviewed hotel moved to its new status.
pub fn review_listing(
    listings: &[HotelListing],
    hotel_id: &str,
    decision: ReviewDecision,
) -> Result<Vec<HotelListing>, AdminError> {
    if !listings.iter().any(|listing| listing.id == hotel_id) {
        return Err(AdminError::ListingNotFound(hotel_id.to_string()));
    }

    Ok(listings
        .iter()
        .cloned()
        .map(|mut listing| {
            if listing.id == hotel_id {
                listing.onboarding_status = decision.resulting_status();
            }
            listing
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub hotel_name: String,
    pub score: u8,
}

/// Highest content score first; equal scores keep listing order.
pub fn leaderboard(listings: &[HotelListing]) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<&HotelListing> = listings.iter().collect();
    ranked.sort_by(|left, right| right.content_score.cmp(&left.content_score));
    ranked
        .into_iter()
        .enumerate()
        .map(|(idx, listing)| LeaderboardEntry {
            rank: idx + 1,
            hotel_name: listing.profile.name.clone(),
            score: listing.content_score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partner::catalog;

    #[test]
    fn overview_matches_sample_fleet() {
        let overview = FleetOverview::from_listings(&catalog::sample_hotels());

        assert_eq!(overview.total_properties, 5);
        assert_eq!(overview.active_properties, 3);
        assert_eq!(overview.pending_review, 1);
        assert_eq!(overview.avg_content_score, 72);
        assert_eq!(overview.channel_manager_connected_pct, 60);
    }

    #[test]
    fn overview_of_empty_fleet_is_zeroed() {
        assert_eq!(FleetOverview::from_listings(&[]), FleetOverview::default());
    }

    #[test]
    fn star_filter_selects_matching_hotels() {
        let hotels = catalog::sample_hotels();
        let four_star = filter_by_star_rating(&hotels, Some(StarRating::FOUR));
        let ids: Vec<_> = four_star.iter().map(|listing| listing.id.as_str()).collect();
        assert_eq!(ids, vec!["h2", "h3"]);
        assert_eq!(filter_by_star_rating(&hotels, None).len(), hotels.len());
    }

    #[test]
    fn review_moves_only_the_target_listing() {
        let hotels = catalog::sample_hotels();
        let reviewed =
            review_listing(&hotels, "h3", ReviewDecision::Approve).expect("h3 exists");

        assert_eq!(reviewed[2].onboarding_status, OnboardingStatus::Completed);
        assert_eq!(reviewed[3].onboarding_status, hotels[3].onboarding_status);

        let rejected = review_listing(&reviewed, "h4", ReviewDecision::Reject).expect("h4 exists");
        assert_eq!(rejected[3].onboarding_status, OnboardingStatus::Rejected);

        assert_eq!(
            review_listing(&hotels, "h9", ReviewDecision::Approve),
            Err(AdminError::ListingNotFound("h9".to_string()))
        );
    }

    #[test]
    fn leaderboard_ranks_by_content_score() {
        let board = leaderboard(&catalog::sample_hotels());
        let scores: Vec<_> = board.iter().map(|entry| entry.score).collect();
        assert_eq!(scores, vec![92, 88, 75, 62, 45]);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[0].hotel_name, "Starhotels President Genoa");
    }
}
