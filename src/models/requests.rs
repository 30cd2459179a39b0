use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::UserPreferences;

/// Request to generate trip recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(flatten)]
    pub preferences: UserPreferences,
    #[validate(range(min = 1))]
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    6
}

/// Request to record a favorite-toggle or booking-intent event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordEventRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "destination_id", rename = "destinationId")]
    pub destination_id: String,
    #[serde(alias = "eventType", rename = "eventType")]
    pub event_type: String,
}

/// Request to submit a booking for a destination
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "destination_id", rename = "destinationId")]
    pub destination_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "full_name", rename = "fullName")]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(range(min = 1, max = 20))]
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    #[serde(alias = "start_date", rename = "startDate")]
    pub start_date: chrono::NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_travelers() -> u32 {
    1
}
