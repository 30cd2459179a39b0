use std::cmp::Ordering;

use crate::models::{BudgetLevel, Destination, TravelStyle};

/// Compare two destinations for ranking, descending on the key the
/// travel style selects: eco-score for eco-friendly trips, visitor
/// rating otherwise.
///
/// Equal keys compare as `Ordering::Equal`; the matcher relies on a
/// stable sort, so ties keep their filter-pass order.
pub fn compare_ranked(a: &Destination, b: &Destination, style: TravelStyle) -> Ordering {
    match style {
        TravelStyle::EcoFriendly => b.eco_score.cmp(&a.eco_score),
        TravelStyle::Budget | TravelStyle::Luxury => b
            .rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal),
    }
}

/// Map a budget level to the matching per-person cost tier.
#[inline]
pub fn cost_for_tier(destination: &Destination, budget: BudgetLevel) -> i64 {
    match budget {
        BudgetLevel::Low => destination.cost_budget,
        BudgetLevel::Medium => destination.cost_medium,
        BudgetLevel::High => destination.cost_luxury,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CarbonFootprint, Difficulty};

    fn create_destination(id: &str, eco_score: i32, rating: f64) -> Destination {
        Destination {
            id: id.to_string(),
            name: format!("Trek {}", id),
            location: "Nepal".to_string(),
            description: String::new(),
            image_url: String::new(),
            image_detail_url: None,
            difficulty: Difficulty::Moderate,
            duration_min: 5,
            duration_max: 9,
            altitude: String::new(),
            rating,
            reviews_count: 0,
            eco_score,
            carbon_footprint: CarbonFootprint::Low,
            cost_budget: 300,
            cost_medium: 600,
            cost_luxury: 1200,
            is_hidden_gem: false,
            group_friendly: true,
            children_friendly: true,
            elderly_friendly: true,
            accessibility_notes: String::new(),
            vibes: vec![],
            highlights: vec![],
            amenities: vec![],
            activities_list: vec![],
            sustainable_tips: vec![],
            warnings: vec![],
            health_advisories: vec![],
            best_months: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_eco_style_orders_by_eco_score() {
        let high = create_destination("1", 90, 3.0);
        let low = create_destination("2", 40, 5.0);

        assert_eq!(
            compare_ranked(&high, &low, TravelStyle::EcoFriendly),
            Ordering::Less
        );
    }

    #[test]
    fn test_other_styles_order_by_rating() {
        let liked = create_destination("1", 40, 4.9);
        let eco = create_destination("2", 95, 3.8);

        assert_eq!(
            compare_ranked(&liked, &eco, TravelStyle::Luxury),
            Ordering::Less
        );
        assert_eq!(
            compare_ranked(&liked, &eco, TravelStyle::Budget),
            Ordering::Less
        );
    }

    #[test]
    fn test_equal_keys_compare_equal() {
        let a = create_destination("1", 80, 4.2);
        let b = create_destination("2", 80, 4.2);

        assert_eq!(
            compare_ranked(&a, &b, TravelStyle::EcoFriendly),
            Ordering::Equal
        );
        assert_eq!(compare_ranked(&a, &b, TravelStyle::Budget), Ordering::Equal);
    }

    #[test]
    fn test_cost_tier_mapping() {
        let dest = create_destination("1", 80, 4.2);

        assert_eq!(cost_for_tier(&dest, BudgetLevel::Low), 300);
        assert_eq!(cost_for_tier(&dest, BudgetLevel::Medium), 600);
        assert_eq!(cost_for_tier(&dest, BudgetLevel::High), 1200);
    }
}
