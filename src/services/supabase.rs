use crate::models::{Booking, Destination, TripEvent};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the Supabase REST API
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Thin Supabase (PostgREST) query client
///
/// The only data-access layer in the service: it supplies the read-only
/// destination catalog and receives bookings and engagement events.
/// There is no server-side logic behind it beyond basic CRUD.
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
    tables: SupabaseTables,
}

/// Table names in the Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseTables {
    pub destinations: String,
    pub bookings: String,
    pub trip_events: String,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(base_url: String, api_key: String, tables: SupabaseTables) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
            tables,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            table
        )
    }

    fn check_status(status: reqwest::StatusCode, context: &str) -> Result<(), SupabaseError> {
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SupabaseError::Unauthorized);
        }
        if !status.is_success() {
            return Err(SupabaseError::ApiError(format!("{}: {}", context, status)));
        }
        Ok(())
    }

    /// Fetch the full destination catalog, ordered by rating descending.
    ///
    /// Rows that fail to decode are skipped with a warning rather than
    /// failing the whole catalog; a single malformed record must never
    /// abort a ranking run.
    pub async fn get_all_destinations(&self) -> Result<Vec<Destination>, SupabaseError> {
        let url = format!(
            "{}?select=*&order=rating.desc",
            self.table_url(&self.tables.destinations)
        );

        tracing::debug!("Fetching destination catalog from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        Self::check_status(response.status(), "Failed to fetch destinations")?;

        let rows: Vec<Value> = response.json().await.map_err(|e| {
            SupabaseError::InvalidResponse(format!("Expected a JSON array of rows: {}", e))
        })?;

        let total = rows.len();
        let destinations: Vec<Destination> = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<Destination>(row.clone()) {
                Ok(dest) => Some(dest),
                Err(e) => {
                    let id = row.get("id").and_then(|v| v.as_str()).unwrap_or("<no id>");
                    tracing::warn!("Skipping malformed destination row {}: {}", id, e);
                    None
                }
            })
            .collect();

        tracing::debug!(
            "Fetched {} destinations ({} rows skipped)",
            destinations.len(),
            total - destinations.len()
        );

        Ok(destinations)
    }

    /// Fetch a single destination by id.
    pub async fn get_destination(&self, id: &str) -> Result<Destination, SupabaseError> {
        let url = format!(
            "{}?select=*&id=eq.{}",
            self.table_url(&self.tables.destinations),
            urlencoding::encode(id)
        );

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        Self::check_status(response.status(), "Failed to fetch destination")?;

        let rows: Vec<Value> = response.json().await.map_err(|e| {
            SupabaseError::InvalidResponse(format!("Expected a JSON array of rows: {}", e))
        })?;

        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| SupabaseError::NotFound(format!("Destination {}", id)))?;

        serde_json::from_value(row)
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse destination: {}", e)))
    }

    /// Insert a booking row.
    pub async fn create_booking(&self, booking: &Booking) -> Result<(), SupabaseError> {
        let url = self.table_url(&self.tables.bookings);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .json(booking)
            .send()
            .await?;

        Self::check_status(response.status(), "Failed to create booking")?;

        tracing::debug!(
            "Created booking {} for destination {}",
            booking.id,
            booking.destination_id
        );

        Ok(())
    }

    /// Record a favorite-toggle or booking-intent event. Callers treat
    /// this as fire-and-forget; failures are logged upstream.
    pub async fn record_event(&self, event: &TripEvent) -> Result<(), SupabaseError> {
        let url = self.table_url(&self.tables.trip_events);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .json(event)
            .send()
            .await?;

        Self::check_status(response.status(), "Failed to record event")?;

        tracing::debug!(
            "Recorded {:?} event for destination {}",
            event.event_type,
            event.destination_id
        );

        Ok(())
    }

    /// Cheap reachability probe for the health endpoint.
    pub async fn health_check(&self) -> Result<bool, SupabaseError> {
        let url = format!(
            "{}?select=id&limit=1",
            self.table_url(&self.tables.destinations)
        );

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}
