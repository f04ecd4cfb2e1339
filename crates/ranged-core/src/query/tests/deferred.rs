use super::*;
use crate::{
    error::EvalError,
    query::{Predicate, Query},
    range::{Inclusivity, Range},
    seq::RangeIterExt,
};
use std::cell::Cell;

#[test]
fn deferred_range_filter_matches_eager_filter() {
    let rows = samples();
    let range = Range::with_inclusivity(20, 40, Inclusivity::InclusiveMinExclusiveMax);

    let eager: Vec<&Sample> = rows.iter().filter_by_range(|s| s.score, &range).collect();
    let deferred = Query::new(&rows).filter_by_range(SCORE, &range).execute();

    assert_eq!(deferred, Ok(eager));
}

#[test]
fn optional_filter_over_present_rows_matches_eager_filter() {
    let rows: Vec<Sample> = samples()
        .into_iter()
        .filter(|sample| sample.bonus.is_some())
        .collect();
    let range = Range::new(5, 30);

    let eager: Vec<&Sample> = rows
        .iter()
        .filter_present_by_range(|s| s.bonus, &range)
        .collect();
    let deferred = Query::new(&rows).filter_by_range(BONUS, &range).execute();

    assert_eq!(deferred, Ok(eager));
    assert_eq!(Query::new(&rows).filter_by_range(BONUS, &range).count(), Ok(2));
}

#[test]
fn optional_filter_over_absent_rows_fails() {
    let rows = samples();
    let query = Query::new(&rows).filter_by_range(BONUS, &Range::new(0, 100));

    assert_eq!(
        query.execute(),
        Err(EvalError::AbsentValue { field: "Bonus" })
    );
}

#[test]
fn filters_are_conjunctive_and_keep_source_order() {
    let rows = samples();
    let ids: Vec<u32> = Query::new(&rows)
        .filter_by_range(SCORE, &Range::new(10, 40))
        .filter(Predicate::gt(SCORE, 15))
        .execute()
        .unwrap()
        .into_iter()
        .map(|sample| sample.id)
        .collect();

    assert_eq!(ids, [2, 3, 4]);
}

#[test]
fn nothing_is_evaluated_until_execute() {
    thread_local! {
        static READS: Cell<usize> = const { Cell::new(0) };
    }

    const COUNTED: Field<Sample, i32> = Field::new("Score", |sample| {
        READS.with(|reads| reads.set(reads.get() + 1));
        sample.score
    });

    let rows = samples();
    let query = Query::new(&rows).filter_by_range(COUNTED, &Range::new(0, 100));
    assert_eq!(READS.with(Cell::get), 0);

    let matched = query.execute().unwrap();
    assert_eq!(matched.len(), rows.len());
    assert_eq!(READS.with(Cell::get), rows.len() * 2);
}

#[test]
fn explain_lists_recorded_filters() {
    let rows = samples();

    assert_eq!(Query::new(&rows).explain(), "TRUE");

    let query = Query::new(&rows)
        .filter_by_range(
            SCORE,
            &Range::with_inclusivity(10, 30, Inclusivity::ExclusiveMinExclusiveMax),
        )
        .filter_by_range(BONUS, &Range::new(1, 2));

    assert_eq!(query.filter_count(), 2);
    assert_eq!(
        query.explain(),
        "(Score > 10 AND Score < 30) AND (Bonus.value >= 1 AND Bonus.value <= 2)"
    );
}

#[test]
fn unfiltered_query_returns_every_row() {
    let rows = samples();

    assert_eq!(Query::new(&rows).count(), Ok(rows.len()));
}
