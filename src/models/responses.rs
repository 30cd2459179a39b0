use serde::{Deserialize, Serialize};

use crate::models::domain::{BudgetLevel, Destination};
use crate::core::ranking::cost_for_tier;

/// One ranked entry in a recommendation response
///
/// Carries the catalog record untouched plus the per-person cost at the
/// visitor's chosen budget tier, so the results surface does not need to
/// re-derive it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedDestination {
    #[serde(flatten)]
    pub destination: Destination,
    #[serde(rename = "estimatedCost")]
    pub estimated_cost: i64,
}

impl RecommendedDestination {
    pub fn new(destination: Destination, budget: BudgetLevel) -> Self {
        let estimated_cost = cost_for_tier(&destination, budget);
        Self {
            destination,
            estimated_cost,
        }
    }
}

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<RecommendedDestination>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the catalog listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationListResponse {
    pub destinations: Vec<Destination>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Record event response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEventResponse {
    pub success: bool,
    pub event_id: String,
}

/// Booking submission response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub success: bool,
    pub booking_id: String,
}
