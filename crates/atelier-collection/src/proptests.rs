//! Property-based tests for news ordering and ranking.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::news::{NewsMeta, rank_related, relevance, sort_by_date_desc};
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    fn tag() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["rust", "web", "ops", "ai", "data"]).prop_map(String::from)
    }

    fn posts() -> impl Strategy<Value = Vec<NewsMeta>> {
        prop::collection::vec((0i64..60, 0i64..3, prop::collection::vec(tag(), 0..4)), 0..12).prop_map(
            |raw| {
                raw.into_iter()
                    .enumerate()
                    .map(|(i, (day, hour, tags))| NewsMeta {
                        slug: format!("post-{i}"),
                        title: format!("Post {i}"),
                        description: String::new(),
                        date: NaiveDate::from_ymd_opt(2024, 1, 1)
                            .and_then(|d| d.and_hms_opt(0, 0, 0))
                            .unwrap()
                            .and_utc()
                            + Duration::days(day)
                            + Duration::hours(hour * 8),
                        tags,
                        draft: false,
                    })
                    .collect()
            },
        )
    }

    fn index_of(posts: &[NewsMeta], slug: &str) -> usize {
        posts.iter().position(|p| p.slug == slug).unwrap()
    }

    proptest! {
        #[test]
        fn test_sort_is_newest_first_and_stable(original in posts()) {
            let mut sorted = original.clone();
            sort_by_date_desc(&mut sorted);

            prop_assert_eq!(sorted.len(), original.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].date >= pair[1].date);
                if pair[0].date == pair[1].date {
                    prop_assert!(
                        index_of(&original, &pair[0].slug) < index_of(&original, &pair[1].slug)
                    );
                }
            }
        }

        #[test]
        fn test_rank_related_excludes_reference_and_respects_limit(
            listing in posts(),
            pick in any::<prop::sample::Index>(),
            limit in 0usize..6,
        ) {
            prop_assume!(!listing.is_empty());
            let reference = &listing[pick.index(listing.len())];

            let related = rank_related(&listing, &reference.slug, limit);

            prop_assert!(related.len() <= limit);
            prop_assert_eq!(related.len(), limit.min(listing.len() - 1));
            prop_assert!(related.iter().all(|p| p.slug != reference.slug));
        }

        #[test]
        fn test_rank_related_scores_non_increasing(
            listing in posts(),
            pick in any::<prop::sample::Index>(),
        ) {
            prop_assume!(!listing.is_empty());
            let reference = &listing[pick.index(listing.len())];

            let related = rank_related(&listing, &reference.slug, listing.len());
            let scores: Vec<usize> = related
                .iter()
                .map(|p| relevance(&reference.tags, &p.tags))
                .collect();

            for pair in scores.windows(2) {
                prop_assert!(pair[0] >= pair[1]);
            }
            for (a, b) in related.iter().zip(related.iter().skip(1)) {
                if relevance(&reference.tags, &a.tags) == relevance(&reference.tags, &b.tags) {
                    prop_assert!(index_of(&listing, &a.slug) < index_of(&listing, &b.slug));
                }
            }
        }

        #[test]
        fn test_relevance_is_symmetric(
            a in prop::collection::vec(tag(), 0..5),
            b in prop::collection::vec(tag(), 0..5),
        ) {
            prop_assert_eq!(relevance(&a, &b), relevance(&b, &a));
        }
    }
}
