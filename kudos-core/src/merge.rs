//! Reconciliation of a remote seed list into the local collection

use std::collections::HashSet;

use crate::review::Review;

/// Merge `remote` into `local` without duplicates
///
/// Local entries are taken first and win on key collisions; remote entries
/// follow in their original order when their key is new. The result is
/// ordered newest-first. The sort is stable, so records sharing a timestamp
/// (including seeded records without one) keep their insertion order.
pub fn merge_reviews(local: Vec<Review>, remote: Vec<Review>) -> Vec<Review> {
    let mut seen = HashSet::with_capacity(local.len() + remote.len());
    let mut merged = Vec::with_capacity(local.len() + remote.len());

    for review in local.into_iter().chain(remote) {
        if seen.insert(review.key()) {
            merged.push(review);
        }
    }

    merged.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(ts: i64, comment: &str) -> Review {
        Review::new(5, "", comment, ts)
    }

    #[test]
    fn test_duplicate_key_kept_once() {
        let local = vec![review(100, "hello world this is long")];
        let remote = vec![review(100, "hello world this is long...")];

        let merged = merge_reviews(local, remote);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].comment, "hello world this is long");
    }

    #[test]
    fn test_prefix_collision_beyond_32_chars() {
        let prefix = "a".repeat(32);
        let local = vec![review(7, &format!("{prefix}-local"))];
        let remote = vec![review(7, &format!("{prefix}-remote"))];

        let merged = merge_reviews(local, remote);
        assert_eq!(merged.len(), 1);
        assert!(merged[0].comment.ends_with("-local"));
    }

    #[test]
    fn test_local_wins_on_collision() {
        let mut local = review(50, "same comment here");
        local.name = "Local".to_string();
        let mut remote = review(50, "same comment here");
        remote.name = "Remote".to_string();

        let merged = merge_reviews(vec![local], vec![remote]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Local");
    }

    #[test]
    fn test_sorted_descending() {
        let merged = merge_reviews(vec![review(200, "newer one")], vec![review(100, "older one")]);
        let ts: Vec<i64> = merged.iter().map(|r| r.timestamp).collect();
        assert_eq!(ts, vec![200, 100]);

        let merged = merge_reviews(vec![review(100, "older one")], vec![review(200, "newer one")]);
        let ts: Vec<i64> = merged.iter().map(|r| r.timestamp).collect();
        assert_eq!(ts, vec![200, 100]);
    }

    #[test]
    fn test_zero_timestamps_last_in_insertion_order() {
        let local = vec![review(0, "local seed"), review(300, "submitted")];
        let remote = vec![review(0, "remote first"), review(0, "remote second")];

        let merged = merge_reviews(local, remote);
        let comments: Vec<&str> = merged.iter().map(|r| r.comment.as_str()).collect();
        assert_eq!(
            comments,
            vec!["submitted", "local seed", "remote first", "remote second"]
        );
    }

    #[test]
    fn test_duplicates_within_remote_collapse() {
        let remote = vec![review(10, "twice listed"), review(10, "twice listed")];
        let merged = merge_reviews(Vec::new(), remote);
        assert_eq!(merged.len(), 1);
    }
}
