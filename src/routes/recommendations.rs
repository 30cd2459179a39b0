use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Matcher;
use crate::models::{
    Booking, BookingRequest, BookingResponse, Destination, DestinationListResponse, Difficulty,
    ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse, RecommendedDestination,
    RecordEventRequest, RecordEventResponse, TripEvent, TripEventType,
};
use crate::services::{CacheError, CacheKey, CacheManager, SupabaseClient, SupabaseError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub supabase: Arc<SupabaseClient>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
}

/// Configure all trip-planning routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/destinations", web::get().to(list_destinations))
        .route("/destinations/{id}", web::get().to(get_destination))
        .route("/recommendations", web::post().to(recommend))
        .route("/events", web::post().to(record_event))
        .route("/bookings", web::post().to(create_booking));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let backend_healthy = state.supabase.health_check().await.unwrap_or(false);

    let status = if backend_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Query parameters for the catalog listing
#[derive(Debug, serde::Deserialize)]
pub struct CatalogQuery {
    pub difficulty: Option<String>,
    pub vibe: Option<String>,
    #[serde(default)]
    pub refresh: bool,
}

/// Catalog listing endpoint
///
/// GET /api/v1/destinations?difficulty=Easy&vibe=Peaceful
///
/// `refresh=true` bypasses and repopulates the cache.
async fn list_destinations(
    state: web::Data<AppState>,
    query: web::Query<CatalogQuery>,
) -> impl Responder {
    let difficulty = match query.difficulty.as_deref().map(parse_difficulty) {
        Some(None) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid difficulty".to_string(),
                message: "Difficulty must be one of: Easy, Moderate, Challenging".to_string(),
                status_code: 400,
            });
        }
        Some(parsed) => parsed,
        None => None,
    };

    let mut destinations = load_catalog(&state, query.refresh).await;

    if let Some(difficulty) = difficulty {
        destinations.retain(|d| d.difficulty == difficulty);
    }
    if let Some(vibe) = query.vibe.as_deref() {
        destinations.retain(|d| d.vibes.iter().any(|v| v.eq_ignore_ascii_case(vibe)));
    }

    let count = destinations.len();
    HttpResponse::Ok().json(DestinationListResponse {
        destinations,
        count,
    })
}

/// Single destination endpoint
///
/// GET /api/v1/destinations/{id}
async fn get_destination(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    let cache_key = CacheKey::destination(&id);

    match state.cache.get::<Destination>(&cache_key).await {
        Ok(destination) => return HttpResponse::Ok().json(destination),
        Err(CacheError::CacheMiss(_)) => {}
        Err(e) => tracing::warn!("Destination cache read failed for {}: {}", id, e),
    }

    match state.supabase.get_destination(&id).await {
        Ok(destination) => {
            if let Err(e) = state.cache.set(&cache_key, &destination).await {
                tracing::warn!("Failed to cache destination {}: {}", id, e);
            }
            HttpResponse::Ok().json(destination)
        }
        Err(SupabaseError::NotFound(_)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Destination not found".to_string(),
            message: format!("No destination with id {}", id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch destination {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch destination".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Trip recommendation endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "activities": ["trekking"],
///   "naturePreference": ["mountains"],
///   "budget": "medium",
///   "travelStyle": "eco-friendly",
///   "duration": 7,
///   "travelers": 2,
///   "hasChildren": false,
///   "hasElderly": false,
///   "limit": 6
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let preferences = &req.preferences;
    let limit = req.limit as usize;

    tracing::info!(
        "Generating recommendations: style={:?}, duration={} days, travelers={}",
        preferences.travel_style,
        preferences.duration,
        preferences.travelers
    );

    // Snapshot of the catalog for this invocation; a cache refresh
    // during the match cannot change the result.
    let catalog = load_catalog(&state, false).await;

    let result = state
        .matcher
        .recommend_with_limit(preferences, catalog, limit);

    let response = RecommendResponse {
        total_candidates: result.total_candidates,
        recommendations: result
            .recommendations
            .into_iter()
            .map(|destination| RecommendedDestination::new(destination, preferences.budget))
            .collect(),
    };

    tracing::info!(
        "Returning {} recommendations (from {} candidates)",
        response.recommendations.len(),
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Record engagement event endpoint
///
/// POST /api/v1/events
///
/// Request body:
/// ```json
/// {
///   "destinationId": "string",
///   "eventType": "favorited|unfavorited|booking_intent"
/// }
/// ```
async fn record_event(
    state: web::Data<AppState>,
    req: web::Json<RecordEventRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let event_type = match req.event_type.to_lowercase().as_str() {
        "favorited" => TripEventType::Favorited,
        "unfavorited" => TripEventType::Unfavorited,
        "booking_intent" | "booking-intent" => TripEventType::BookingIntent,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid event type".to_string(),
                message: "Event type must be one of: favorited, unfavorited, booking_intent"
                    .to_string(),
                status_code: 400,
            });
        }
    };

    let event = TripEvent {
        destination_id: req.destination_id.clone(),
        event_type,
        created_at: chrono::Utc::now(),
    };

    // Fire-and-forget for the caller: a failed write is logged, never
    // surfaced as a request failure.
    if let Err(e) = state.supabase.record_event(&event).await {
        tracing::warn!(
            "Failed to record {:?} event for {}: {}",
            event.event_type,
            event.destination_id,
            e
        );
    }

    HttpResponse::Ok().json(RecordEventResponse {
        success: true,
        event_id: uuid::Uuid::new_v4().to_string(),
    })
}

/// Booking submission endpoint
///
/// POST /api/v1/bookings
async fn create_booking(
    state: web::Data<AppState>,
    req: web::Json<BookingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let booking = Booking {
        id: uuid::Uuid::new_v4().to_string(),
        destination_id: req.destination_id.clone(),
        full_name: req.full_name.clone(),
        email: req.email.clone(),
        travelers: req.travelers,
        start_date: req.start_date,
        notes: req.notes.clone(),
        created_at: chrono::Utc::now(),
    };

    match state.supabase.create_booking(&booking).await {
        Ok(()) => {
            tracing::info!(
                "Booking {} created for destination {}",
                booking.id,
                booking.destination_id
            );
            HttpResponse::Ok().json(BookingResponse {
                success: true,
                booking_id: booking.id,
            })
        }
        Err(e) => {
            tracing::error!("Failed to create booking: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Failed to create booking".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        }
    }
}

/// Load the destination catalog, cache-aside.
///
/// Any retrieval failure degrades to an empty catalog: the matcher then
/// produces an empty recommendation list and presentation shows its
/// no-matches state. The failure detail never crosses this boundary.
async fn load_catalog(state: &AppState, refresh: bool) -> Vec<Destination> {
    let key = CacheKey::catalog();

    if refresh {
        if let Err(e) = state.cache.delete(&key).await {
            tracing::warn!("Failed to invalidate catalog cache: {}", e);
        }
    } else {
        match state.cache.get::<Vec<Destination>>(&key).await {
            Ok(catalog) => return catalog,
            Err(CacheError::CacheMiss(_)) => {}
            Err(e) => tracing::warn!("Catalog cache read failed: {}", e),
        }
    }

    match state.supabase.get_all_destinations().await {
        Ok(catalog) => {
            if !catalog.is_empty() {
                if let Err(e) = state.cache.set(&key, &catalog).await {
                    tracing::warn!("Failed to cache catalog: {}", e);
                }
            }
            catalog
        }
        Err(e) => {
            tracing::error!("Failed to fetch destination catalog: {}", e);
            Vec::new()
        }
    }
}

fn parse_difficulty(value: &str) -> Option<Difficulty> {
    match value.to_lowercase().as_str() {
        "easy" => Some(Difficulty::Easy),
        "moderate" => Some(Difficulty::Moderate),
        "challenging" => Some(Difficulty::Challenging),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(parse_difficulty("Easy"), Some(Difficulty::Easy));
        assert_eq!(parse_difficulty("challenging"), Some(Difficulty::Challenging));
        assert_eq!(parse_difficulty("extreme"), None);
    }

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
