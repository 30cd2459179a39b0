use thiserror::Error;

use crate::core::matcher::Matcher;
use crate::models::{
    Activity, BudgetLevel, Destination, NaturePreference, Season, TravelStyle, UserPreferences,
};

/// Steps of the trip-planner wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    CollectingActivities,
    CollectingPreferences,
    ShowingResults,
}

/// Refused wizard transitions
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("select at least one activity before continuing")]
    NoActivitySelected,

    #[error("transition not available from the {0:?} step")]
    WrongStep(WizardStep),
}

/// Three-step preference collector driving the recommendation engine.
///
/// Every operation borrows the current wizard and returns a fresh value
/// carrying the updated preference snapshot; a refused transition returns
/// an error and leaves the caller's wizard untouched. This keeps each
/// step independently testable and makes the preference object impossible
/// to mutate behind the presentation layer's back.
#[derive(Debug, Clone)]
pub struct TripWizard {
    step: WizardStep,
    preferences: UserPreferences,
    recommendations: Vec<Destination>,
}

impl TripWizard {
    /// Start a fresh wizard run with default preferences.
    pub fn new() -> Self {
        Self {
            step: WizardStep::CollectingActivities,
            preferences: UserPreferences::default(),
            recommendations: Vec::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn recommendations(&self) -> &[Destination] {
        &self.recommendations
    }

    /// Whether the activities step may advance.
    pub fn can_continue(&self) -> bool {
        !self.preferences.activities.is_empty()
    }

    // --- selection operations (set-membership toggles) ---

    pub fn toggle_activity(&self, activity: Activity) -> Self {
        self.with_preferences(|prefs| prefs.activities = toggle(prefs.activities.clone(), activity))
    }

    pub fn toggle_nature(&self, nature: NaturePreference) -> Self {
        self.with_preferences(|prefs| {
            prefs.nature_preference = toggle(prefs.nature_preference.clone(), nature)
        })
    }

    pub fn toggle_month(&self, month: &str) -> Self {
        self.with_preferences(|prefs| prefs.months = toggle(prefs.months.clone(), month.to_string()))
    }

    pub fn toggle_interest(&self, interest: &str) -> Self {
        self.with_preferences(|prefs| {
            prefs.interests = toggle(prefs.interests.clone(), interest.to_string())
        })
    }

    // --- scalar selections ---

    pub fn set_budget(&self, budget: BudgetLevel) -> Self {
        self.with_preferences(|prefs| prefs.budget = budget)
    }

    pub fn set_travel_style(&self, style: TravelStyle) -> Self {
        self.with_preferences(|prefs| prefs.travel_style = style)
    }

    pub fn set_duration(&self, days: u32) -> Self {
        self.with_preferences(|prefs| prefs.duration = days.clamp(1, 30))
    }

    pub fn set_travelers(&self, count: u32) -> Self {
        self.with_preferences(|prefs| prefs.travelers = count.clamp(1, 20))
    }

    pub fn set_has_children(&self, value: bool) -> Self {
        self.with_preferences(|prefs| prefs.has_children = value)
    }

    pub fn set_has_elderly(&self, value: bool) -> Self {
        self.with_preferences(|prefs| prefs.has_elderly = value)
    }

    pub fn set_season(&self, season: Season) -> Self {
        self.with_preferences(|prefs| prefs.season = season)
    }

    // --- transitions ---

    /// Advance from activities to the preference step. Guarded: refused
    /// while no activity is selected.
    pub fn continue_to_preferences(&self) -> Result<Self, WizardError> {
        if self.step != WizardStep::CollectingActivities {
            return Err(WizardError::WrongStep(self.step));
        }
        if !self.can_continue() {
            return Err(WizardError::NoActivitySelected);
        }
        Ok(self.at_step(WizardStep::CollectingPreferences))
    }

    /// Run the matcher against a catalog snapshot and move to results.
    ///
    /// Unconditional from the preference step; the catalog is copied at
    /// call time so a refresh during the match cannot skew the ranking.
    pub fn generate_recommendations(
        &self,
        matcher: &Matcher,
        catalog: &[Destination],
    ) -> Result<Self, WizardError> {
        if self.step != WizardStep::CollectingPreferences {
            return Err(WizardError::WrongStep(self.step));
        }

        let result = matcher.recommend(&self.preferences, catalog.to_vec());

        let mut next = self.at_step(WizardStep::ShowingResults);
        next.recommendations = result.recommendations;
        Ok(next)
    }

    /// Return from results to the preference step, keeping everything
    /// accumulated so far.
    pub fn modify_preferences(&self) -> Result<Self, WizardError> {
        if self.step != WizardStep::ShowingResults {
            return Err(WizardError::WrongStep(self.step));
        }
        Ok(self.at_step(WizardStep::CollectingPreferences))
    }

    /// Return from the preference step to activity selection,
    /// preferences preserved.
    pub fn back(&self) -> Result<Self, WizardError> {
        if self.step != WizardStep::CollectingPreferences {
            return Err(WizardError::WrongStep(self.step));
        }
        Ok(self.at_step(WizardStep::CollectingActivities))
    }

    /// Rewind from results to the first step. Accumulated preferences
    /// are kept; results are recomputed on the next generate anyway.
    pub fn start_over(&self) -> Result<Self, WizardError> {
        if self.step != WizardStep::ShowingResults {
            return Err(WizardError::WrongStep(self.step));
        }
        Ok(self.at_step(WizardStep::CollectingActivities))
    }

    fn with_preferences(&self, mutate: impl FnOnce(&mut UserPreferences)) -> Self {
        let mut next = self.clone();
        mutate(&mut next.preferences);
        next
    }

    fn at_step(&self, step: WizardStep) -> Self {
        let mut next = self.clone();
        next.step = step;
        next
    }
}

impl Default for TripWizard {
    fn default() -> Self {
        Self::new()
    }
}

/// Membership toggle: remove the item when present, append it otherwise.
fn toggle<T: PartialEq>(mut items: Vec<T>, item: T) -> Vec<T> {
    if let Some(pos) = items.iter().position(|existing| *existing == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
    items
}
