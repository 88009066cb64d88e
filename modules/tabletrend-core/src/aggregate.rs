//! Aggregation of resolved mentions into ranked trends.

use std::collections::HashMap;

use tabletrend_common::{ResolvedMention, Trend};

/// Group resolved mentions by business identity and rank the groups.
///
/// Unresolved mentions are dropped. The first business record observed for
/// a given place id is kept as the canonical record; later duplicates with
/// diverging fields are counted but not merged. Per group, repost and
/// favorite counts are summed from the underlying posts and the mention
/// count is the group size.
///
/// Trends are sorted descending by (mentions, favorites, reposts). The
/// sort is stable and groups enter in first-observation order, so tied
/// trends come out in a deterministic order for a fixed input order.
pub fn aggregate(mentions: &[ResolvedMention]) -> Vec<Trend> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Trend> = HashMap::new();

    for mention in mentions {
        let Some(business) = &mention.business else {
            continue;
        };
        let entry = groups
            .entry(business.place_id.as_str())
            .or_insert_with(|| {
                order.push(business.place_id.as_str());
                Trend {
                    business: business.clone(),
                    total_mentions: 0,
                    total_reposts: 0,
                    total_favorites: 0,
                }
            });
        entry.total_mentions += 1;
        entry.total_reposts += u64::from(mention.post.repost_count);
        entry.total_favorites += u64::from(mention.post.favorite_count);
    }

    let mut trends: Vec<Trend> = order
        .into_iter()
        .filter_map(|place_id| groups.remove(place_id))
        .collect();
    trends.sort_by(|a, b| b.rank_key().cmp(&a.rank_key()));
    trends
}
