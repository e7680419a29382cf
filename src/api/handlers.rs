use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::db;
use crate::error::AppResult;
use crate::models::mood::{self, MoodResolution};
use crate::models::NewReview;
use crate::services::recommendations::recommend;

use super::pages;
use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct MoodSelection {
    pub mood: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Mood picker page
pub async fn index() -> Html<String> {
    pages::index_page()
}

/// Recommendation list, guidance page, or error page for the submitted mood
pub async fn recommendations(
    State(state): State<AppState>,
    Form(selection): Form<MoodSelection>,
) -> AppResult<Response> {
    match mood::resolve(&selection.mood) {
        MoodResolution::Supported(mood) => {
            let recommendations = recommend(state.catalog.as_ref(), mood).await?;
            Ok(pages::recommendations_page(mood, &recommendations.items).into_response())
        }
        MoodResolution::SynonymOf(mood) => {
            Ok(pages::guidance_page(&selection.mood, mood).into_response())
        }
        MoodResolution::Unknown => {
            Ok(pages::unsupported_mood_page(&selection.mood).into_response())
        }
    }
}

/// Review submission form
pub async fn input_review() -> Html<String> {
    pages::input_review_page()
}

/// Inserts a submitted review and redirects to the review list
pub async fn submit_review(
    State(state): State<AppState>,
    Form(review): Form<NewReview>,
) -> AppResult<Redirect> {
    tracing::info!(
        title = %review.title,
        author = %review.author,
        rating = %review.rating,
        comment = %review.comment,
        "Review submitted"
    );

    db::reviews::insert_review(&state.db, &review).await?;

    Ok(Redirect::to("/reviews"))
}

/// A bare GET lands on the review list without inserting anything
pub async fn submit_review_redirect() -> Redirect {
    Redirect::to("/reviews")
}

/// All stored reviews
pub async fn reviews(State(state): State<AppState>) -> AppResult<Html<String>> {
    let reviews = db::reviews::list_reviews(&state.db).await?;
    Ok(pages::reviews_page(&reviews))
}
