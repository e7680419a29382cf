use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::{NewReview, Review};

/// Appends a review row. Reviews are never updated or deleted.
pub async fn insert_review(pool: &SqlitePool, review: &NewReview) -> AppResult<()> {
    sqlx::query("INSERT INTO reviews (title, author, rating, comment) VALUES (?, ?, ?, ?)")
        .bind(&review.title)
        .bind(&review.author)
        .bind(&review.rating)
        .bind(&review.comment)
        .execute(pool)
        .await?;

    Ok(())
}

/// Returns all reviews in insertion order
pub async fn list_reviews(pool: &SqlitePool) -> AppResult<Vec<Review>> {
    let reviews =
        sqlx::query_as::<_, Review>("SELECT id, title, author, rating, comment FROM reviews")
            .fetch_all(pool)
            .await?;

    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::init_schema(&pool).await.unwrap();
        pool
    }

    fn review(title: &str) -> NewReview {
        NewReview {
            title: title.to_string(),
            author: "A".to_string(),
            rating: "5".to_string(),
            comment: "Good".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_list_round_trips_fields() {
        let pool = memory_pool().await;

        insert_review(&pool, &review("T")).await.unwrap();

        let reviews = list_reviews(&pool).await.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].id, 1);
        assert_eq!(reviews[0].title, "T");
        assert_eq!(reviews[0].author, "A");
        assert_eq!(reviews[0].rating, 5);
        assert_eq!(reviews[0].comment, "Good");
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let pool = memory_pool().await;

        for title in ["first", "second", "third"] {
            insert_review(&pool, &review(title)).await.unwrap();
        }

        let reviews = list_reviews(&pool).await.unwrap();
        let titles: Vec<&str> = reviews.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);

        let ids: Vec<i64> = reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[tokio::test]
    async fn test_numeric_text_rating_lands_as_integer() {
        // Column affinity converts the unvalidated "4" on the way in
        let pool = memory_pool().await;

        let mut submitted = review("affinity");
        submitted.rating = "4".to_string();
        insert_review(&pool, &submitted).await.unwrap();

        let reviews = list_reviews(&pool).await.unwrap();
        assert_eq!(reviews[0].rating, 4);
    }
}
