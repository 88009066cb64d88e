//! Per-post business resolution: geolocation first, name-extraction
//! fallback second.

use std::sync::Arc;

use tracing::warn;

use tabletrend_common::{Business, Post};

use crate::traits::{EntityFinder, GeoResolver, NameSpan};

/// Category tags that qualify a place as a food business.
pub const FOOD_CATEGORIES: &[&str] = &[
    "cafe",
    "bakery",
    "restaurant",
    "bar",
    "food",
    "grocery_or_supermarket",
];

pub struct BusinessResolver {
    geo: Arc<dyn GeoResolver>,
    finder: Arc<dyn EntityFinder>,
}

impl BusinessResolver {
    pub fn new(geo: Arc<dyn GeoResolver>, finder: Arc<dyn EntityFinder>) -> Self {
        Self { geo, finder }
    }

    /// Resolve one post to at most one food business. The coordinate branch
    /// runs first; if it yields nothing (no coordinate, no geocoding result,
    /// or a non-food place) the name-extraction branch runs. `None` is a
    /// normal miss, not a failure. Collaborator errors at any sub-step are
    /// logged and treated as "nothing from that step", so the chain falls
    /// through instead of aborting.
    pub async fn resolve(&self, post: &Post) -> Option<Business> {
        if let Some(business) = self.resolve_by_coordinate(post).await {
            return Some(business);
        }
        self.resolve_by_name(post).await
    }

    async fn resolve_by_coordinate(&self, post: &Post) -> Option<Business> {
        let coord = post.coordinate?;
        let candidates = match self.geo.reverse_geocode(coord.lat, coord.lng).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(lat = coord.lat, lng = coord.lng, error = %e, "Reverse geocoding failed");
                return None;
            }
        };
        let first = candidates.first()?;
        self.details_if_food(&first.place_id).await
    }

    async fn resolve_by_name(&self, post: &Post) -> Option<Business> {
        let tokens = tokenize(&post.text);
        let spans = self.finder.find_candidate_spans(&tokens);
        let name = most_probable_name(&tokens, &spans)?;

        let candidates = match self.geo.find_by_text(&name).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(name = name.as_str(), error = %e, "Find place by text failed");
                return None;
            }
        };
        let first = candidates.first()?;
        self.details_if_food(&first.place_id).await
    }

    /// Fetch details for a candidate and keep it only if it is a food
    /// business; a category mismatch is a miss for this branch.
    async fn details_if_food(&self, place_id: &str) -> Option<Business> {
        let details = match self.geo.place_details(place_id).await {
            Ok(details) => details,
            Err(e) => {
                warn!(place_id, error = %e, "Place details fetch failed");
                return None;
            }
        };
        details.filter(is_food_business)
    }
}

fn is_food_business(business: &Business) -> bool {
    business
        .categories
        .iter()
        .any(|category| FOOD_CATEGORIES.contains(&category.as_str()))
}

/// Whitespace tokenizer: trims surrounding punctuation (keeping
/// apostrophes, which occur inside business names) and drops empty tokens.
/// A leading `#` is trimmed, so hashtags contribute their bare word.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| c.is_ascii_punctuation() && c != '\'')
                .to_string()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Select the span with the strictly highest confidence — ties go to the
/// earliest span — and join its tokens with single spaces. Spans with zero
/// confidence are never selected.
fn most_probable_name(tokens: &[String], spans: &[NameSpan]) -> Option<String> {
    let mut best: Option<&NameSpan> = None;
    let mut max_confidence = 0.0;
    for span in spans {
        if span.confidence > max_confidence {
            max_confidence = span.confidence;
            best = Some(span);
        }
    }
    let span = best?;
    let slice = tokens.get(span.start..span.end)?;
    if slice.is_empty() {
        return None;
    }
    Some(slice.join(" "))
}
