use serde::{Deserialize, Serialize};

/// Shortest query that triggers a lookup.
pub const MIN_QUERY_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub phone: String,
}

/// Places whose name or address contains `query`, ignoring case.
pub fn suggest_places<'a>(catalog: &'a [PlaceSuggestion], query: &str) -> Vec<&'a PlaceSuggestion> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|place| {
            place.name.to_lowercase().contains(&needle)
                || place.address.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partner::catalog;

    #[test]
    fn short_queries_return_nothing() {
        let places = catalog::sample_places();
        assert!(suggest_places(&places, "Ho").is_empty());
    }

    #[test]
    fn matches_name_or_address_case_insensitively() {
        let places = catalog::sample_places();

        let florence: Vec<_> = suggest_places(&places, "florence")
            .into_iter()
            .map(|place| place.name.as_str())
            .collect();
        assert_eq!(florence, vec!["Hotel Bella Vista", "Hotel Splendido"]);

        let palace = suggest_places(&places, "PALACE");
        assert_eq!(palace.len(), 1);
        assert_eq!(palace[0].phone, "+39 02 5551234");
    }
}
