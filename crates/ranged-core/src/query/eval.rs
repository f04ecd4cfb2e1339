use crate::{
    error::EvalError,
    query::predicate::{ComparePredicate, Operand, Predicate},
};

///
/// Evaluate a predicate against a single entity.
///
/// This is the immediate counterpart of a back-end translation: operators
/// and literals are applied exactly as the tree states them. `And`/`Or`
/// short-circuit, so an absent optional value in an unreached branch is not
/// an error.
///

impl<E, T: PartialOrd> Predicate<E, T> {
    pub fn eval(&self, entity: &E) -> Result<bool, EvalError> {
        match self {
            Self::True => Ok(true),
            Self::False => Ok(false),

            Self::And(children) => {
                for child in children {
                    if !child.eval(entity)? {
                        return Ok(false);
                    }
                }

                Ok(true)
            }
            Self::Or(children) => {
                for child in children {
                    if child.eval(entity)? {
                        return Ok(true);
                    }
                }

                Ok(false)
            }
            Self::Not(inner) => inner.eval(entity).map(|matched| !matched),

            Self::Compare(cmp) => cmp.eval(entity),
        }
    }
}

impl<E, T: PartialOrd> ComparePredicate<E, T> {
    pub fn eval(&self, entity: &E) -> Result<bool, EvalError> {
        let actual = self.operand.read(entity)?;

        Ok(self.op.test(&actual, &self.value))
    }
}

impl<E, T> Operand<E, T> {
    /// Read the operand value; unwrapping an absent optional fails.
    pub fn read(&self, entity: &E) -> Result<T, EvalError> {
        match self {
            Self::Field(field) => Ok(field.read(entity)),
            Self::Unwrap(field) => field
                .read(entity)
                .ok_or(EvalError::AbsentValue { field: field.name() }),
        }
    }
}
