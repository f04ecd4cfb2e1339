use crate::{
    error::EvalError,
    query::{build::build_predicate, predicate::Operand, predicate::Predicate},
    range::Range,
};
use std::fmt;

///
/// EntityFilter
///
/// Type-erased view of a predicate over entities of type `E`, letting one
/// query hold filters on fields of different value types.
///

pub trait EntityFilter<E> {
    fn matches(&self, entity: &E) -> Result<bool, EvalError>;

    fn describe(&self) -> String;
}

impl<E, T> EntityFilter<E> for Predicate<E, T>
where
    T: PartialOrd + fmt::Display,
{
    fn matches(&self, entity: &E) -> Result<bool, EvalError> {
        self.eval(entity)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

///
/// Query
///
/// Deferred in-memory query over a slice of entities.
///
/// Filters are recorded as predicate trees and nothing is evaluated until
/// `execute` or `count` runs. All filters must match for an entity to be
/// returned, and source order is preserved.
///

pub struct Query<'a, E> {
    source: &'a [E],
    filters: Vec<Box<dyn EntityFilter<E> + 'a>>,
}

impl<'a, E> Query<'a, E> {
    #[must_use]
    pub const fn new(source: &'a [E]) -> Self {
        Self {
            source,
            filters: Vec::new(),
        }
    }

    #[must_use]
    pub fn filter<T>(mut self, predicate: Predicate<E, T>) -> Self
    where
        E: 'a,
        T: PartialOrd + fmt::Display + 'a,
    {
        self.filters.push(Box::new(predicate));
        self
    }

    /// Record a range filter on a direct or optional field.
    #[must_use]
    pub fn filter_by_range<T>(self, operand: impl Into<Operand<E, T>>, range: &Range<T>) -> Self
    where
        E: 'a,
        T: Clone + PartialOrd + fmt::Display + 'a,
    {
        self.filter(build_predicate(operand, range))
    }

    #[must_use]
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Render the recorded filters the way a back-end would receive them.
    #[must_use]
    pub fn explain(&self) -> String {
        if self.filters.is_empty() {
            return "TRUE".to_string();
        }

        self.filters
            .iter()
            .map(|filter| format!("({})", filter.describe()))
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    /// Evaluate the recorded filters and return the matching entities.
    pub fn execute(&self) -> Result<Vec<&'a E>, EvalError> {
        let mut rows = Vec::new();

        for entity in self.source {
            if self.matches(entity)? {
                rows.push(entity);
            }
        }

        log::debug!(
            "query executed: {} filters, {} of {} rows matched",
            self.filters.len(),
            rows.len(),
            self.source.len()
        );

        Ok(rows)
    }

    pub fn count(&self) -> Result<usize, EvalError> {
        let mut count = 0;

        for entity in self.source {
            if self.matches(entity)? {
                count += 1;
            }
        }

        Ok(count)
    }

    fn matches(&self, entity: &E) -> Result<bool, EvalError> {
        for filter in &self.filters {
            if !filter.matches(entity)? {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

impl<E> fmt::Debug for Query<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("rows", &self.source.len())
            .field("filters", &self.explain())
            .finish()
    }
}
