use serde::{Deserialize, Deserializer, Serialize};

/// Trek difficulty grade as stored in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

/// Relative carbon footprint of visiting a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarbonFootprint {
    Low,
    Medium,
    High,
}

/// Activity tags a visitor can select in the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Trekking,
    Hiking,
    Adventure,
    Sightseeing,
    Walking,
    Wildlife,
}

/// Scenery categories offered by the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NaturePreference {
    Mountains,
    Forests,
    Lakes,
}

/// Spending level, mapped onto the catalog's three cost tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelStyle {
    EcoFriendly,
    Budget,
    Luxury,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Peak,
    OffSeason,
}

/// Destination record supplied by the catalog backend (read-only)
///
/// List-valued columns may arrive as a proper JSON array, a JSON-encoded
/// string, or null depending on how the row was written; they are all
/// normalized to plain vectors here so the matcher never type-sniffs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub image_detail_url: Option<String>,
    pub difficulty: Difficulty,
    pub duration_min: u32,
    pub duration_max: u32,
    #[serde(default)]
    pub altitude: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews_count: i64,
    pub eco_score: i32,
    pub carbon_footprint: CarbonFootprint,
    pub cost_budget: i64,
    pub cost_medium: i64,
    pub cost_luxury: i64,
    #[serde(default)]
    pub is_hidden_gem: bool,
    #[serde(default)]
    pub group_friendly: bool,
    #[serde(default)]
    pub children_friendly: bool,
    #[serde(default)]
    pub elderly_friendly: bool,
    #[serde(default)]
    pub accessibility_notes: String,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub vibes: Vec<String>,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub amenities: Vec<String>,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub activities_list: Vec<String>,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub sustainable_tips: Vec<String>,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub warnings: Vec<String>,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub health_advisories: Vec<String>,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub best_months: Vec<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Visitor preferences accumulated by the planner wizard
///
/// `months`, `season` and `interests` are collected for the preference
/// summary only; the matcher does not consult them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(alias = "nature_preference", rename = "naturePreference", default)]
    pub nature_preference: Vec<NaturePreference>,
    #[serde(default = "default_budget")]
    pub budget: BudgetLevel,
    #[serde(alias = "travel_style", rename = "travelStyle", default = "default_travel_style")]
    pub travel_style: TravelStyle,
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    #[serde(alias = "has_children", rename = "hasChildren", default)]
    pub has_children: bool,
    #[serde(alias = "has_elderly", rename = "hasElderly", default)]
    pub has_elderly: bool,
    #[serde(default)]
    pub months: Vec<String>,
    #[serde(default = "default_season")]
    pub season: Season,
    #[serde(default)]
    pub interests: Vec<String>,
}

fn default_budget() -> BudgetLevel { BudgetLevel::Medium }
fn default_travel_style() -> TravelStyle { TravelStyle::EcoFriendly }
fn default_duration() -> u32 { 5 }
fn default_travelers() -> u32 { 1 }
fn default_season() -> Season { Season::Peak }

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            activities: Vec::new(),
            nature_preference: Vec::new(),
            budget: default_budget(),
            travel_style: default_travel_style(),
            duration: default_duration(),
            travelers: default_travelers(),
            has_children: false,
            has_elderly: false,
            months: Vec::new(),
            season: default_season(),
            interests: Vec::new(),
        }
    }
}

/// Engagement event fired from the results surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripEvent {
    pub destination_id: String,
    pub event_type: TripEventType,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripEventType {
    Favorited,
    Unfavorited,
    BookingIntent,
}

/// Booking request row written to the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub destination_id: String,
    pub full_name: String,
    pub email: String,
    pub travelers: u32,
    pub start_date: chrono::NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Bounds applied by the matcher
#[derive(Debug, Clone, Copy)]
pub struct MatchingLimits {
    pub result_limit: usize,
    pub eco_score_threshold: i32,
}

impl Default for MatchingLimits {
    fn default() -> Self {
        Self {
            result_limit: 6,
            eco_score_threshold: 70,
        }
    }
}

/// Accept a list column as an array, a JSON-encoded string, a
/// comma-joined string, or null.
fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(normalize_tags(value))
}

fn normalize_tags(value: serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        serde_json::Value::String(s) => {
            if let Ok(items) = serde_json::from_str::<Vec<String>>(&s) {
                return items;
            }
            s.split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vibes_from_json_array() {
        let dest: Destination = serde_json::from_value(serde_json::json!({
            "id": "d1",
            "name": "Langtang Valley Trek",
            "location": "Langtang",
            "difficulty": "Moderate",
            "duration_min": 7,
            "duration_max": 10,
            "eco_score": 80,
            "carbon_footprint": "low",
            "cost_budget": 400,
            "cost_medium": 800,
            "cost_luxury": 1500,
            "vibes": ["Peaceful", "Adventure"],
        }))
        .unwrap();

        assert_eq!(dest.vibes, vec!["Peaceful", "Adventure"]);
    }

    #[test]
    fn test_vibes_from_json_encoded_string() {
        let value = serde_json::Value::String("[\"Cultural\",\"Wildlife\"]".to_string());
        assert_eq!(normalize_tags(value), vec!["Cultural", "Wildlife"]);
    }

    #[test]
    fn test_vibes_from_comma_joined_string() {
        let value = serde_json::Value::String("Peaceful, Cultural".to_string());
        assert_eq!(normalize_tags(value), vec!["Peaceful", "Cultural"]);
    }

    #[test]
    fn test_missing_list_columns_default_empty() {
        let dest: Destination = serde_json::from_value(serde_json::json!({
            "id": "d2",
            "name": "Upper Mustang",
            "location": "Mustang",
            "difficulty": "Challenging",
            "duration_min": 12,
            "duration_max": 16,
            "eco_score": 72,
            "carbon_footprint": "medium",
            "cost_budget": 900,
            "cost_medium": 1600,
            "cost_luxury": 3200,
            "vibes": null,
        }))
        .unwrap();

        assert!(dest.vibes.is_empty());
        assert!(dest.highlights.is_empty());
        assert!(dest.warnings.is_empty());
    }

    #[test]
    fn test_preferences_defaults() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.budget, BudgetLevel::Medium);
        assert_eq!(prefs.travel_style, TravelStyle::EcoFriendly);
        assert_eq!(prefs.duration, 5);
        assert_eq!(prefs.travelers, 1);
        assert!(prefs.activities.is_empty());
    }

    #[test]
    fn test_preferences_camel_case_wire_names() {
        let prefs: UserPreferences = serde_json::from_value(serde_json::json!({
            "activities": ["trekking", "wildlife"],
            "naturePreference": ["mountains"],
            "travelStyle": "luxury",
            "hasChildren": true,
            "duration": 4,
        }))
        .unwrap();

        assert_eq!(prefs.activities, vec![Activity::Trekking, Activity::Wildlife]);
        assert_eq!(prefs.nature_preference, vec![NaturePreference::Mountains]);
        assert_eq!(prefs.travel_style, TravelStyle::Luxury);
        assert!(prefs.has_children);
        assert!(!prefs.has_elderly);
    }
}
