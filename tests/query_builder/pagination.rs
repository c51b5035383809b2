use brawls_stats::query_builder::{Pagination, QueryBuilder};
use proptest::prelude::*;

#[test]
fn test_pagination_only_with_limit() {
    assert_eq!(Pagination::from_request(None, Some(10)), None);
    assert_eq!(
        Pagination::from_request(Some(5), None),
        Some(Pagination::limit_only(5))
    );

    let sql = QueryBuilder::new("\"StatisticEvents\"")
        .paginate(Pagination::from_request(Some(20), Some(40)))
        .build_sql();
    assert!(sql.ends_with(" LIMIT 20 OFFSET 40"));
}

proptest! {
    #[test]
    fn prop_limit_and_offset_rendered_verbatim(limit in 0u32..10_000, offset in 0u32..10_000) {
        let sql = QueryBuilder::new("t")
            .paginate(Some(Pagination::limit_offset(limit, offset)))
            .build_sql();
        let expected_suffix = format!(" LIMIT {limit} OFFSET {offset}");
        prop_assert!(sql.ends_with(&expected_suffix));
    }
}
