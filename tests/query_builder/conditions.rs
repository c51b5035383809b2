use brawls_stats::query_builder::{CompareOp, Condition, Expr, SqlValue};

#[test]
fn test_condition_composition() {
    let condition = Condition::eq("cause_id", "kill")
        .and(Condition::is_not_null("game_type"))
        .and(Condition::compare(
            Expr::column("experience_amount"),
            CompareOp::Gte,
            Expr::literal(5),
        ));

    let statement = condition.to_sql();
    assert_eq!(
        statement.sql,
        "(cause_id = $1 AND game_type IS NOT NULL AND experience_amount >= 5)"
    );
    assert_eq!(statement.params, vec![SqlValue::from("kill")]);
}

#[test]
fn test_or_nested_inside_and() {
    let condition = Condition::eq("game_type", "tumble")
        .or(Condition::eq("game_type", "laser_tag"))
        .and(Condition::is_null("game_id"));

    assert_eq!(
        condition.to_sql().sql,
        "((game_type = $1 OR game_type = $2) AND game_id IS NULL)"
    );
}

#[test]
fn test_event_predicate_in_count() {
    let statement = Expr::count_of_events("arrow_hit", "dodgebolt").to_sql();
    assert_eq!(
        statement.sql,
        "COUNT(CASE WHEN (cause_id = $1 AND game_type = $2) THEN 1 END)"
    );
}
