//! Server-rendered HTML pages
//!
//! Pages are built with `format!` and served through axum's `Html`. All
//! free-text values pass through `escape_html` before interpolation.

use axum::response::Html;

use crate::models::mood::ALL_MOODS;
use crate::models::{Mood, RecommendationItem, Review};

/// Escapes text for interpolation into HTML bodies and attributes
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Shared page shell: header navigation plus a centered main column
fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; background-color: #f7f4ef; color: #222; line-height: 1.6; }}
        header {{ background-color: #2f4858; padding: 16px 24px; }}
        header a {{ color: #cfe3f3; margin-right: 16px; text-decoration: none; }}
        main {{ max-width: 860px; margin: 0 auto; padding: 24px; }}
        .book {{ display: flex; gap: 16px; background: #fff; border: 1px solid #ddd; border-radius: 6px; padding: 16px; margin-bottom: 16px; }}
        .book img {{ width: 90px; height: auto; align-self: flex-start; }}
        .review {{ background: #fff; border: 1px solid #ddd; border-radius: 6px; padding: 12px 16px; margin-bottom: 12px; }}
        form label {{ display: block; margin-top: 12px; }}
        input, select, textarea {{ padding: 6px; margin-top: 4px; width: 100%; max-width: 420px; box-sizing: border-box; }}
        button {{ margin-top: 16px; padding: 8px 20px; background: #2f4858; color: #fff; border: none; border-radius: 4px; cursor: pointer; }}
        .error {{ background: #fdecea; border: 1px solid #f5c6cb; padding: 16px; border-radius: 6px; }}
    </style>
</head>
<body>
    <header>
        <a href="/">Recommendations</a>
        <a href="/input_review">Write a review</a>
        <a href="/reviews">Reviews</a>
    </header>
    <main>
{body}
    </main>
</body>
</html>
"#
    ))
}

/// Mood picker
pub fn index_page() -> Html<String> {
    let options: String = ALL_MOODS
        .iter()
        .map(|mood| format!("        <option value=\"{mood}\">{mood}</option>\n"))
        .collect();

    page(
        "How are you feeling?",
        &format!(
            r#"<h1>Find a book for your mood</h1>
<form action="/recommendations" method="post">
    <label for="mood">Select your mood</label>
    <select id="mood" name="mood">
{options}    </select>
    <button type="submit">Recommend books</button>
</form>"#
        ),
    )
}

/// Recommendation list for a resolved mood
pub fn recommendations_page(mood: Mood, items: &[RecommendationItem]) -> Html<String> {
    let mut body = format!("<h1>Books for when you feel {mood}</h1>\n");

    if items.is_empty() {
        body.push_str("<p>No recommendations found right now. Try again in a bit.</p>\n");
    }

    for item in items {
        let cover = if item.cover_image_url.is_empty() {
            String::new()
        } else {
            format!(
                "    <img src=\"{}\" alt=\"Cover of {}\">\n",
                escape_html(&item.cover_image_url),
                escape_html(&item.title)
            )
        };

        body.push_str(&format!(
            r#"<div class="book">
{cover}    <div>
        <h2>{title}</h2>
        <p><em>{authors}</em></p>
        <p>{description}</p>
        <p><a href="{link}">Buy this book</a></p>
    </div>
</div>
"#,
            title = escape_html(&item.title),
            authors = escape_html(&item.authors),
            description = escape_html(&item.description),
            link = escape_html(&item.purchase_link),
        ));
    }

    page("Recommendations", &body)
}

/// Guidance page shown when the input matched an emotion word
pub fn guidance_page(submitted: &str, mood: Mood) -> Html<String> {
    page(
        "Almost there",
        &format!(
            r#"<div class="error">
    <h1>We don't list "{submitted}", but it sounds like {mood}</h1>
    <p>Head <a href="/">back to the picker</a> and try selecting <strong>{mood}</strong>.</p>
</div>"#,
            submitted = escape_html(submitted),
        ),
    )
}

/// Generic error page for inputs matching neither a mood nor a synonym
pub fn unsupported_mood_page(submitted: &str) -> Html<String> {
    page(
        "Unsupported mood",
        &format!(
            r#"<div class="error">
    <h1>Sorry, we can't match "{}" to a mood</h1>
    <p><a href="/">Back to the picker</a></p>
</div>"#,
            escape_html(submitted)
        ),
    )
}

/// Review submission form
pub fn input_review_page() -> Html<String> {
    page(
        "Write a review",
        r#"<h1>Write a review</h1>
<form action="/submit_review" method="post">
    <label for="title">Book title</label>
    <input type="text" id="title" name="title" required>
    <label for="author">Author</label>
    <input type="text" id="author" name="author" required>
    <label for="rating">Rating (1-5)</label>
    <input type="text" id="rating" name="rating" required>
    <label for="comment">Your thoughts</label>
    <textarea id="comment" name="comment" rows="5" required></textarea>
    <button type="submit">Submit review</button>
</form>"#,
    )
}

/// Review list
pub fn reviews_page(reviews: &[Review]) -> Html<String> {
    let mut body = String::from("<h1>Reader reviews</h1>\n");

    if reviews.is_empty() {
        body.push_str(
            "<p>No reviews yet. <a href=\"/input_review\">Write the first one</a>.</p>\n",
        );
    }

    for review in reviews {
        body.push_str(&format!(
            r#"<div class="review">
    <h2>{title}</h2>
    <p><em>by {author}</em> &middot; rated {rating}</p>
    <p>{comment}</p>
</div>
"#,
            title = escape_html(&review.title),
            author = escape_html(&review.author),
            rating = review.rating,
            comment = escape_html(&review.comment),
        ));
    }

    page("Reviews", &body)
}

/// Minimal page for unhandled server faults
pub fn server_error_page(message: &str) -> Html<String> {
    page(
        "Something went wrong",
        &format!(
            r#"<div class="error">
    <h1>Something went wrong</h1>
    <p>{}</p>
</div>"#,
            escape_html(message)
        ),
    )
}
