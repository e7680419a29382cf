use crate::{
    error::AppResult,
    models::{Mood, RecommendationItem},
    services::catalog::{CatalogProvider, SubjectQuery},
};

/// Aggregated recommendations plus per-category fetch outcomes
///
/// Outcomes are never surfaced to the user; they exist so the silent skip
/// of a failed category shows up in logs and is assertable in tests.
#[derive(Debug)]
pub struct Recommendations {
    pub items: Vec<RecommendationItem>,
    pub outcomes: Vec<CategoryOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOutcome {
    pub category: &'static str,
    pub result: CategoryResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryResult {
    /// Category fetched; item count before flattening into the list
    Fetched(usize),
    /// Category skipped after a non-success catalog status
    Skipped(u16),
}

/// Fetches and aggregates recommendations for a mood
///
/// Queries the catalog once per mapped category, sequentially and in
/// category order. The output preserves category order, then response
/// order within each category; no de-duplication, no ranking. A failed
/// category contributes nothing and the remaining categories still render.
pub async fn recommend(catalog: &dyn CatalogProvider, mood: Mood) -> AppResult<Recommendations> {
    let mut items = Vec::new();
    let mut outcomes = Vec::with_capacity(3);

    for category in mood.categories() {
        match catalog.volumes_by_subject(category).await? {
            SubjectQuery::Volumes(volumes) => {
                outcomes.push(CategoryOutcome {
                    category,
                    result: CategoryResult::Fetched(volumes.len()),
                });
                items.extend(volumes.into_iter().map(RecommendationItem::from));
            }
            SubjectQuery::Failed(status) => {
                outcomes.push(CategoryOutcome {
                    category,
                    result: CategoryResult::Skipped(status),
                });
            }
        }
    }

    let skipped = outcomes
        .iter()
        .filter(|outcome| matches!(outcome.result, CategoryResult::Skipped(_)))
        .count();
    if skipped > 0 {
        tracing::warn!(
            mood = %mood,
            skipped,
            "Partial catalog fetch, some categories were skipped"
        );
    }

    tracing::info!(mood = %mood, items = items.len(), "Recommendations aggregated");

    Ok(Recommendations { items, outcomes })
}
