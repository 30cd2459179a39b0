use crate::models::{Destination, Difficulty, MatchingLimits, TravelStyle, UserPreferences};

/// Check whether a destination's difficulty is compatible with the
/// requested trip length.
///
/// This is a deliberate proxy: the visitor is never asked for a
/// difficulty directly. Short trips admit Easy only, mid-length trips
/// exclude Challenging, and anything over ten days is unrestricted.
#[inline]
pub fn difficulty_compatible(destination: &Destination, duration: u32) -> bool {
    if duration <= 3 {
        return destination.difficulty == Difficulty::Easy;
    }
    if duration <= 10 {
        return destination.difficulty != Difficulty::Challenging;
    }
    true
}

/// Check group accessibility with first-true-wins precedence: when the
/// group includes children only the children constraint applies, even if
/// elderly travelers are also present.
#[inline]
pub fn group_compatible(destination: &Destination, preferences: &UserPreferences) -> bool {
    if preferences.has_children {
        return destination.children_friendly;
    }
    if preferences.has_elderly {
        return destination.elderly_friendly;
    }
    true
}

/// Check the nature/vibes constraint.
///
/// Passes when no nature preference was selected, or when the destination
/// carries at least one vibe tag. Any selected category is satisfied by
/// any vibe; there is no semantic mapping from mountains/forests/lakes to
/// specific tags.
#[inline]
pub fn vibes_compatible(destination: &Destination, preferences: &UserPreferences) -> bool {
    if preferences.nature_preference.is_empty() {
        return true;
    }
    !destination.vibes.is_empty()
}

/// Check the sustainability constraint. Only the eco-friendly travel
/// style imposes a threshold; budget and luxury styles pass everything.
#[inline]
pub fn eco_compatible(destination: &Destination, style: TravelStyle, threshold: i32) -> bool {
    match style {
        TravelStyle::EcoFriendly => destination.eco_score >= threshold,
        TravelStyle::Budget | TravelStyle::Luxury => true,
    }
}

/// Run the full compatibility pipeline for one destination.
#[inline]
pub fn passes_filters(
    destination: &Destination,
    preferences: &UserPreferences,
    limits: &MatchingLimits,
) -> bool {
    difficulty_compatible(destination, preferences.duration)
        && group_compatible(destination, preferences)
        && vibes_compatible(destination, preferences)
        && eco_compatible(
            destination,
            preferences.travel_style,
            limits.eco_score_threshold,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CarbonFootprint, NaturePreference};

    fn create_destination(id: &str, difficulty: Difficulty) -> Destination {
        Destination {
            id: id.to_string(),
            name: format!("Trek {}", id),
            location: "Nepal".to_string(),
            description: String::new(),
            image_url: String::new(),
            image_detail_url: None,
            difficulty,
            duration_min: 3,
            duration_max: 7,
            altitude: "3,200m".to_string(),
            rating: 4.5,
            reviews_count: 120,
            eco_score: 75,
            carbon_footprint: CarbonFootprint::Low,
            cost_budget: 300,
            cost_medium: 600,
            cost_luxury: 1200,
            is_hidden_gem: false,
            group_friendly: true,
            children_friendly: true,
            elderly_friendly: true,
            accessibility_notes: String::new(),
            vibes: vec!["Peaceful".to_string()],
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
    fn test_short_trip_admits_easy_only() {
        let easy = create_destination("1", Difficulty::Easy);
        let moderate = create_destination("2", Difficulty::Moderate);

        assert!(difficulty_compatible(&easy, 2));
        assert!(!difficulty_compatible(&moderate, 2));
    }

    #[test]
    fn test_mid_trip_excludes_challenging() {
        let moderate = create_destination("1", Difficulty::Moderate);
        let challenging = create_destination("2", Difficulty::Challenging);

        assert!(difficulty_compatible(&moderate, 7));
        assert!(!difficulty_compatible(&challenging, 7));
    }

    #[test]
    fn test_long_trip_unrestricted() {
        let challenging = create_destination("1", Difficulty::Challenging);
        assert!(difficulty_compatible(&challenging, 15));
    }

    #[test]
    fn test_difficulty_boundaries() {
        let moderate = create_destination("1", Difficulty::Moderate);
        let challenging = create_destination("2", Difficulty::Challenging);

        // 3 days is still the short-trip bucket, 4 is not
        assert!(!difficulty_compatible(&moderate, 3));
        assert!(difficulty_compatible(&moderate, 4));

        // 10 days still excludes Challenging, 11 does not
        assert!(!difficulty_compatible(&challenging, 10));
        assert!(difficulty_compatible(&challenging, 11));
    }

    #[test]
    fn test_children_check_wins_over_elderly() {
        let mut dest = create_destination("1", Difficulty::Easy);
        dest.children_friendly = true;
        dest.elderly_friendly = false;

        let prefs = UserPreferences {
            has_children: true,
            has_elderly: true,
            ..Default::default()
        };

        // Only the children constraint applies
        assert!(group_compatible(&dest, &prefs));
    }

    #[test]
    fn test_elderly_checked_when_no_children() {
        let mut dest = create_destination("1", Difficulty::Easy);
        dest.elderly_friendly = false;

        let prefs = UserPreferences {
            has_elderly: true,
            ..Default::default()
        };

        assert!(!group_compatible(&dest, &prefs));
    }

    #[test]
    fn test_no_flags_no_restriction() {
        let mut dest = create_destination("1", Difficulty::Easy);
        dest.children_friendly = false;
        dest.elderly_friendly = false;

        assert!(group_compatible(&dest, &UserPreferences::default()));
    }

    #[test]
    fn test_vibes_pass_without_nature_preference() {
        let mut dest = create_destination("1", Difficulty::Easy);
        dest.vibes.clear();

        assert!(vibes_compatible(&dest, &UserPreferences::default()));
    }

    #[test]
    fn test_vibes_require_any_tag_when_nature_selected() {
        let tagged = create_destination("1", Difficulty::Easy);
        let mut untagged = create_destination("2", Difficulty::Easy);
        untagged.vibes.clear();

        let prefs = UserPreferences {
            nature_preference: vec![NaturePreference::Lakes],
            ..Default::default()
        };

        assert!(vibes_compatible(&tagged, &prefs));
        assert!(!vibes_compatible(&untagged, &prefs));
    }

    #[test]
    fn test_eco_threshold_applies_to_eco_style_only() {
        let mut dest = create_destination("1", Difficulty::Easy);
        dest.eco_score = 50;

        assert!(!eco_compatible(&dest, TravelStyle::EcoFriendly, 70));
        assert!(eco_compatible(&dest, TravelStyle::Budget, 70));
        assert!(eco_compatible(&dest, TravelStyle::Luxury, 70));

        dest.eco_score = 70;
        assert!(eco_compatible(&dest, TravelStyle::EcoFriendly, 70));
    }
}
