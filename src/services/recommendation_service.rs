use crate::models::vehicle::Vehicle;

/// No single vehicle seats more than this; larger groups get no
/// recommendation and are handled as multi-vehicle enquiries by staff.
pub const MAX_GROUP_SIZE: u32 = 13;

/// Range the booking form allows for the passenger stepper.
pub const PASSENGER_RANGE: (u32, u32) = (1, 40);

/// Priority ordering for small groups (up to 4 passengers).
const TIER_SMALL: [&str; 6] = [
    "toyota-alphard-executive",
    "hyundai-h1-vip",
    "hyundai-staria-luxury",
    "toyota-majesty-premium",
    "toyota-commuter-vip",
    "toyota-commuter-standard",
];

/// Priority ordering for mid-size groups (5 to 9 passengers).
const TIER_MEDIUM: [&str; 6] = [
    "toyota-commuter-vip",
    "toyota-majesty-premium",
    "hyundai-staria-luxury",
    "hyundai-h1-vip",
    "toyota-alphard-executive",
    "toyota-commuter-standard",
];

/// Priority ordering for large groups (10 to 13 passengers).
const TIER_LARGE: [&str; 6] = [
    "toyota-commuter-standard",
    "toyota-commuter-vip",
    "toyota-majesty-premium",
    "hyundai-staria-luxury",
    "hyundai-h1-vip",
    "toyota-alphard-executive",
];

/// Threshold table for the single top pick. Checked in order; the first
/// threshold the passenger count fits under wins.
const TOP_PICKS: [(u32, &str); 4] = [
    (4, "toyota-alphard-executive"),
    (5, "hyundai-h1-vip"),
    (7, "toyota-commuter-vip"),
    (9, "toyota-commuter-vip"),
];

/// Fallback pick for 10 to 13 passengers.
const TOP_PICK_LARGE: &str = "toyota-commuter-standard";

pub struct RecommendationService;

impl RecommendationService {
    /// Clamp a raw passenger count into the range the form accepts.
    pub fn clamp_passengers(passengers: u32) -> u32 {
        passengers.clamp(PASSENGER_RANGE.0, PASSENGER_RANGE.1)
    }

    fn tier_priority(passengers: u32) -> &'static [&'static str] {
        if passengers <= 4 {
            &TIER_SMALL
        } else if passengers <= 9 {
            &TIER_MEDIUM
        } else {
            &TIER_LARGE
        }
    }

    /// Order the fleet by fitness for the group size. Vehicles missing from
    /// the tier's priority list sort last. Empty for groups above
    /// `MAX_GROUP_SIZE`.
    pub fn recommend(passengers: u32, fleet: &[Vehicle]) -> Vec<Vehicle> {
        if passengers > MAX_GROUP_SIZE {
            return Vec::new();
        }

        let priority = Self::tier_priority(passengers);
        let rank = |v: &Vehicle| {
            priority
                .iter()
                .position(|slug| *slug == v.slug)
                .unwrap_or(usize::MAX)
        };

        let mut sorted = fleet.to_vec();
        sorted.sort_by_key(rank);
        sorted
    }

    /// The single vehicle the form pre-highlights, from the threshold table.
    /// Falls back to the first catalog entry if the mapped slug is not in the
    /// fleet; `None` for groups above `MAX_GROUP_SIZE`.
    pub fn top_pick(passengers: u32, fleet: &[Vehicle]) -> Option<Vehicle> {
        if passengers > MAX_GROUP_SIZE {
            return None;
        }

        let slug = TOP_PICKS
            .iter()
            .find(|(limit, _)| passengers <= *limit)
            .map(|(_, slug)| *slug)
            .unwrap_or(TOP_PICK_LARGE);

        fleet
            .iter()
            .find(|v| v.slug == slug)
            .or_else(|| fleet.first())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_top_pick_small_groups() {
        let fleet = data::fleet();
        for p in 1..=4 {
            let pick = RecommendationService::top_pick(p, &fleet).unwrap();
            assert_eq!(pick.slug, "toyota-alphard-executive", "passengers={}", p);
        }
    }

    #[test]
    fn test_top_pick_five() {
        let fleet = data::fleet();
        let pick = RecommendationService::top_pick(5, &fleet).unwrap();
        assert_eq!(pick.slug, "hyundai-h1-vip");
    }

    #[test]
    fn test_top_pick_six_to_nine() {
        let fleet = data::fleet();
        for p in 6..=9 {
            let pick = RecommendationService::top_pick(p, &fleet).unwrap();
            assert_eq!(pick.slug, "toyota-commuter-vip", "passengers={}", p);
        }
    }

    #[test]
    fn test_top_pick_ten_to_thirteen() {
        let fleet = data::fleet();
        for p in 10..=13 {
            let pick = RecommendationService::top_pick(p, &fleet).unwrap();
            assert_eq!(pick.slug, "toyota-commuter-standard", "passengers={}", p);
        }
    }

    #[test]
    fn test_no_pick_above_max_group_size() {
        let fleet = data::fleet();
        assert!(RecommendationService::top_pick(14, &fleet).is_none());
        assert!(RecommendationService::recommend(14, &fleet).is_empty());
        assert!(RecommendationService::recommend(40, &fleet).is_empty());
    }

    #[test]
    fn test_recommend_orders_by_tier_priority() {
        let fleet = data::fleet();

        let small = RecommendationService::recommend(2, &fleet);
        let slugs: Vec<&str> = small.iter().map(|v| v.slug.as_str()).collect();
        assert_eq!(slugs, TIER_SMALL);

        let large = RecommendationService::recommend(12, &fleet);
        assert_eq!(large[0].slug, "toyota-commuter-standard");
        assert_eq!(large[5].slug, "toyota-alphard-executive");
    }

    #[test]
    fn test_unknown_slug_sorts_last() {
        let mut fleet = data::fleet();
        let mut stranger = fleet[0].clone();
        stranger.slug = "mystery-van".to_string();
        fleet.insert(0, stranger);

        let sorted = RecommendationService::recommend(3, &fleet);
        assert_eq!(sorted.last().unwrap().slug, "mystery-van");
    }

    #[test]
    fn test_top_pick_falls_back_to_first_entry() {
        let fleet: Vec<Vehicle> = data::fleet()
            .into_iter()
            .filter(|v| v.slug != "toyota-alphard-executive")
            .collect();
        let pick = RecommendationService::top_pick(2, &fleet).unwrap();
        assert_eq!(pick.slug, fleet[0].slug);
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let fleet = data::fleet();
        for p in [1, 5, 9, 13] {
            let first = RecommendationService::recommend(p, &fleet);
            let second = RecommendationService::recommend(p, &fleet);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_clamp_passengers() {
        assert_eq!(RecommendationService::clamp_passengers(0), 1);
        assert_eq!(RecommendationService::clamp_passengers(7), 7);
        assert_eq!(RecommendationService::clamp_passengers(99), 40);
    }
}
