// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Activity, Booking, BudgetLevel, CarbonFootprint, Destination, Difficulty, MatchingLimits,
    NaturePreference, Season, TravelStyle, TripEvent, TripEventType, UserPreferences,
};
pub use requests::{BookingRequest, RecommendRequest, RecordEventRequest};
pub use responses::{
    BookingResponse, DestinationListResponse, ErrorResponse, HealthResponse, RecommendResponse,
    RecommendedDestination, RecordEventResponse,
};
