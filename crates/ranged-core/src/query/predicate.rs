use crate::{
    compare::CompareOp,
    query::field::{Field, OptionalField},
};
use std::{
    fmt,
    ops::{BitAnd, BitOr},
};

///
/// Predicate AST
///
/// A boolean expression over one typed field, built now and evaluated later
/// by a query back-end. The tree carries field names, operators, and literal
/// values so a back-end can translate it; the in-memory evaluator lives in
/// `eval`.
///

///
/// Operand
///
/// Left-hand side of a comparison. `Unwrap` reads an optional field and
/// assumes the value is present.
///

pub enum Operand<E, T> {
    Field(Field<E, T>),
    Unwrap(OptionalField<E, T>),
}

impl<E, T> Operand<E, T> {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Field(field) => field.name(),
            Self::Unwrap(field) => field.name(),
        }
    }

    #[must_use]
    pub const fn is_unwrap(&self) -> bool {
        matches!(self, Self::Unwrap(_))
    }
}

impl<E, T> From<Field<E, T>> for Operand<E, T> {
    fn from(field: Field<E, T>) -> Self {
        Self::Field(field)
    }
}

impl<E, T> From<OptionalField<E, T>> for Operand<E, T> {
    fn from(field: OptionalField<E, T>) -> Self {
        Self::Unwrap(field)
    }
}

impl<E, T> Clone for Operand<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for Operand<E, T> {}

// Operands compare by what a back-end sees: the field path.
impl<E, T> PartialEq for Operand<E, T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_unwrap() == other.is_unwrap() && self.name() == other.name()
    }
}

impl<E, T> Eq for Operand<E, T> {}

impl<E, T> fmt::Debug for Operand<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => f.debug_tuple("Field").field(&field.name()).finish(),
            Self::Unwrap(field) => f.debug_tuple("Unwrap").field(&field.name()).finish(),
        }
    }
}

impl<E, T> fmt::Display for Operand<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => f.write_str(field.name()),
            Self::Unwrap(field) => write!(f, "{}.value", field.name()),
        }
    }
}

///
/// ComparePredicate
///

pub struct ComparePredicate<E, T> {
    pub operand: Operand<E, T>,
    pub op: CompareOp,
    pub value: T,
}

impl<E, T> ComparePredicate<E, T> {
    #[must_use]
    pub fn new(operand: impl Into<Operand<E, T>>, op: CompareOp, value: T) -> Self {
        Self {
            operand: operand.into(),
            op,
            value,
        }
    }
}

impl<E, T: Clone> Clone for ComparePredicate<E, T> {
    fn clone(&self) -> Self {
        Self {
            operand: self.operand,
            op: self.op,
            value: self.value.clone(),
        }
    }
}

impl<E, T: PartialEq> PartialEq for ComparePredicate<E, T> {
    fn eq(&self, other: &Self) -> bool {
        self.operand == other.operand && self.op == other.op && self.value == other.value
    }
}

impl<E, T: fmt::Debug> fmt::Debug for ComparePredicate<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparePredicate")
            .field("operand", &self.operand)
            .field("op", &self.op)
            .field("value", &self.value)
            .finish()
    }
}

impl<E, T: fmt::Display> fmt::Display for ComparePredicate<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.operand, self.op, self.value)
    }
}

///
/// Predicate
///

pub enum Predicate<E, T> {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate<E, T>),
}

impl<E, T> Predicate<E, T> {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(pred: Self) -> Self {
        Self::Not(Box::new(pred))
    }

    #[must_use]
    pub fn compare(operand: impl Into<Operand<E, T>>, op: CompareOp, value: T) -> Self {
        Self::Compare(ComparePredicate::new(operand, op, value))
    }

    #[must_use]
    pub fn lt(operand: impl Into<Operand<E, T>>, value: T) -> Self {
        Self::compare(operand, CompareOp::Lt, value)
    }

    #[must_use]
    pub fn lte(operand: impl Into<Operand<E, T>>, value: T) -> Self {
        Self::compare(operand, CompareOp::Lte, value)
    }

    #[must_use]
    pub fn gt(operand: impl Into<Operand<E, T>>, value: T) -> Self {
        Self::compare(operand, CompareOp::Gt, value)
    }

    #[must_use]
    pub fn gte(operand: impl Into<Operand<E, T>>, value: T) -> Self {
        Self::compare(operand, CompareOp::Gte, value)
    }

    const fn is_compound(&self) -> bool {
        matches!(self, Self::And(_) | Self::Or(_))
    }
}

impl<E, T: Clone> Clone for Predicate<E, T> {
    fn clone(&self) -> Self {
        match self {
            Self::True => Self::True,
            Self::False => Self::False,
            Self::And(children) => Self::And(children.clone()),
            Self::Or(children) => Self::Or(children.clone()),
            Self::Not(inner) => Self::Not(inner.clone()),
            Self::Compare(cmp) => Self::Compare(cmp.clone()),
        }
    }
}

impl<E, T: PartialEq> PartialEq for Predicate<E, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::True, Self::True) | (Self::False, Self::False) => true,
            (Self::And(left), Self::And(right)) | (Self::Or(left), Self::Or(right)) => {
                left == right
            }
            (Self::Not(left), Self::Not(right)) => left == right,
            (Self::Compare(left), Self::Compare(right)) => left == right,
            _ => false,
        }
    }
}

impl<E, T: fmt::Debug> fmt::Debug for Predicate<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.write_str("True"),
            Self::False => f.write_str("False"),
            Self::And(children) => f.debug_tuple("And").field(children).finish(),
            Self::Or(children) => f.debug_tuple("Or").field(children).finish(),
            Self::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
            Self::Compare(cmp) => f.debug_tuple("Compare").field(cmp).finish(),
        }
    }
}

impl<E, T: fmt::Display> fmt::Display for Predicate<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.write_str("TRUE"),
            Self::False => f.write_str("FALSE"),
            Self::And(children) if children.is_empty() => f.write_str("TRUE"),
            Self::Or(children) if children.is_empty() => f.write_str("FALSE"),
            Self::And(children) => write_joined(f, children, " AND "),
            Self::Or(children) => write_joined(f, children, " OR "),
            Self::Not(inner) => {
                f.write_str("NOT ")?;
                write_operand(f, inner)
            }
            Self::Compare(cmp) => write!(f, "{cmp}"),
        }
    }
}

fn write_joined<E, T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    children: &[Predicate<E, T>],
    separator: &str,
) -> fmt::Result {
    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write_operand(f, child)?;
    }

    Ok(())
}

fn write_operand<E, T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    pred: &Predicate<E, T>,
) -> fmt::Result {
    if pred.is_compound() {
        write!(f, "({pred})")
    } else {
        write!(f, "{pred}")
    }
}

impl<E, T> BitAnd for Predicate<E, T> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl<E, T: Clone> BitAnd for &Predicate<E, T> {
    type Output = Predicate<E, T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        Predicate::And(vec![self.clone(), rhs.clone()])
    }
}

impl<E, T> BitOr for Predicate<E, T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl<E, T: Clone> BitOr for &Predicate<E, T> {
    type Output = Predicate<E, T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        Predicate::Or(vec![self.clone(), rhs.clone()])
    }
}
