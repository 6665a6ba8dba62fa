//! Display formatting for review lists

use std::fmt;

use crate::review::{average, Review};

const FILLED: &str = "★";
const EMPTY: &str = "☆";
const MAX_STARS: usize = 5;

/// Placeholder shown for reviews without a name
pub const ANONYMOUS: &str = "Anon";

/// `rating` filled stars padded with empty ones to five glyphs
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating).min(MAX_STARS);
    pad_stars(FILLED.repeat(filled))
}

/// Star bar for an average rating
///
/// Whole stars are filled; a remaining half or more is drawn as an empty
/// star, the same glyph as the padding.
pub fn average_stars(avg: f64) -> String {
    let avg = avg.clamp(0.0, MAX_STARS as f64);
    let full = avg.floor() as usize;
    let mut stars = FILLED.repeat(full);
    if avg - avg.floor() >= 0.5 {
        stars.push_str(EMPTY);
    }
    pad_stars(stars)
}

fn pad_stars(mut stars: String) -> String {
    let missing = MAX_STARS.saturating_sub(stars.chars().count());
    stars.push_str(&EMPTY.repeat(missing));
    stars
}

/// Average with one decimal place
pub fn format_average(avg: f64) -> String {
    format!("{avg:.1}")
}

pub fn display_name(name: &str) -> &str {
    if name.is_empty() {
        ANONYMOUS
    } else {
        name
    }
}

/// Escape `&`, `<`, `>` and `"` for embedding in HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn count_label(count: usize) -> String {
    format!("({count} reviews)")
}

/// Aggregate figures shown above a review list
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub average: f64,
    pub count: usize,
    /// Number of reviews per rating, index 0 holding 1-star reviews
    pub distribution: [usize; MAX_STARS],
}

impl Summary {
    pub fn of(items: &[Review]) -> Self {
        let mut distribution = [0; MAX_STARS];
        for review in items {
            if (1..=5).contains(&review.rating) {
                distribution[usize::from(review.rating) - 1] += 1;
            }
        }
        Self {
            average: average(items),
            count: items.len(),
            distribution,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_average(self.average),
            average_stars(self.average),
            count_label(self.count)
        )
    }
}

/// One review as a single display line
pub fn review_line(review: &Review) -> String {
    format!(
        "{}  {}  {}",
        rating_stars(review.rating),
        display_name(&review.name),
        review.comment
    )
}
