use super::super::property::{PropertyProfile, StarRating};
use std::collections::BTreeSet;

const HIGHLIGHTED_AMENITIES: usize = 3;

fn highlights(amenities: &BTreeSet<String>) -> String {
    amenities
        .iter()
        .take(HIGHLIGHTED_AMENITIES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Draft copy for the content page "generate" action on a live listing.
pub fn draft_listing_description(profile: &PropertyProfile, amenities: &BTreeSet<String>) -> String {
    format!(
        "Welcome to {name}, a stunning {stars}-star property located in {city}. \
         Guests enjoy world-class {highlights} and more. \
         Experience unforgettable luxury at {address}.",
        name = profile.name,
        stars = profile.star_rating.value(),
        city = profile.city,
        highlights = highlights(amenities),
        address = profile.address,
    )
}

/// Draft copy for the onboarding wizard, where any field may still be blank.
pub fn draft_onboarding_description(
    name: &str,
    star_rating: Option<StarRating>,
    address: &str,
    amenities: &BTreeSet<String>,
) -> String {
    let name = if name.trim().is_empty() {
        "our hotel"
    } else {
        name.trim()
    };
    let rating = star_rating
        .map(|rating| format!("{}-star", rating.value()))
        .unwrap_or_else(|| "luxury".to_string());
    let address = if address.trim().is_empty() {
        "a prime location"
    } else {
        address.trim()
    };

    let mut sentences = vec![format!(
        "Welcome to {name}, a {rating} property offering exceptional hospitality and modern amenities."
    )];
    if !amenities.is_empty() {
        sentences.push(format!("Guests enjoy {}, and more.", highlights(amenities)));
    }
    sentences.push(format!(
        "Located at {address}, we provide an unforgettable experience for every traveler."
    ));

    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn listing_description_names_three_amenities() {
        let profile = PropertyProfile::new(
            "Starhotels Echo Milan",
            "Viale Andrea Doria 4, Milan",
            StarRating::FOUR,
            "Milan",
        );
        let text = draft_listing_description(&profile, &set(&["Gym", "Bar", "WiFi", "Spa"]));

        assert!(text.starts_with("Welcome to Starhotels Echo Milan, a stunning 4-star"));
        assert!(text.contains("world-class Bar, Gym, Spa and more"));
        assert!(!text.contains("WiFi"));
        assert!(text.ends_with("at Viale Andrea Doria 4, Milan."));
    }

    #[test]
    fn onboarding_description_falls_back_for_blank_fields() {
        let text = draft_onboarding_description("  ", None, "", &BTreeSet::new());

        assert_eq!(
            text,
            "Welcome to our hotel, a luxury property offering exceptional hospitality and modern amenities. \
             Located at a prime location, we provide an unforgettable experience for every traveler."
        );
        assert!(!text.contains("  "));
        assert!(!text.contains("Guests enjoy"));
    }

    #[test]
    fn onboarding_description_mentions_amenities_when_present() {
        let text = draft_onboarding_description(
            "Hotel Bella Vista",
            Some(StarRating::THREE),
            "Via Roma 42, Florence",
            &set(&["Pool"]),
        );

        assert!(text.contains("a 3-star property"));
        assert!(text.contains("Guests enjoy Pool, and more."));
    }
}
