use crate::core::{filters::passes_filters, ranking::compare_ranked};
use crate::models::{Destination, MatchingLimits, UserPreferences};

/// Result of one matching invocation
#[derive(Debug)]
pub struct MatchResult {
    pub recommendations: Vec<Destination>,
    pub total_candidates: usize,
}

/// Recommendation engine - implements the filter/rank/truncate pipeline
///
/// # Pipeline Stages
/// 1. Difficulty proxy (trip duration bounds the admitted difficulty)
/// 2. Group accessibility (children before elderly, first-true-wins)
/// 3. Nature/vibes compatibility
/// 4. Eco-score threshold (eco-friendly style only)
/// 5. Stable descending sort on eco-score or rating, truncate
#[derive(Debug, Clone)]
pub struct Matcher {
    limits: MatchingLimits,
}

impl Matcher {
    pub fn new(limits: MatchingLimits) -> Self {
        Self { limits }
    }

    pub fn with_default_limits() -> Self {
        Self {
            limits: MatchingLimits::default(),
        }
    }

    pub fn limits(&self) -> &MatchingLimits {
        &self.limits
    }

    /// Rank a catalog snapshot against a preference set.
    ///
    /// Pure and deterministic: identical catalog and preferences produce
    /// identical output, elements and order. The catalog is consumed as
    /// an owned snapshot, so a concurrent refresh can never affect a
    /// match in progress. The sort is stable; destinations with equal
    /// ranking keys keep their catalog order.
    ///
    /// An empty catalog, or preferences nothing satisfies, yield an
    /// empty recommendation list rather than an error.
    pub fn recommend(
        &self,
        preferences: &UserPreferences,
        catalog: Vec<Destination>,
    ) -> MatchResult {
        let total_candidates = catalog.len();

        let mut recommendations: Vec<Destination> = catalog
            .into_iter()
            .filter(|destination| passes_filters(destination, preferences, &self.limits))
            .collect();

        recommendations
            .sort_by(|a, b| compare_ranked(a, b, preferences.travel_style));

        recommendations.truncate(self.limits.result_limit);

        MatchResult {
            recommendations,
            total_candidates,
        }
    }

    /// Same pipeline with a per-call result cap, used by the HTTP
    /// surface to honor a client-requested limit without exceeding the
    /// configured one.
    pub fn recommend_with_limit(
        &self,
        preferences: &UserPreferences,
        catalog: Vec<Destination>,
        limit: usize,
    ) -> MatchResult {
        let mut result = self.recommend(preferences, catalog);
        result
            .recommendations
            .truncate(limit.min(self.limits.result_limit));
        result
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_limits()
    }
}
