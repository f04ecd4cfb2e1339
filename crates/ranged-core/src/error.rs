use derive_more::Display;
use thiserror::Error as ThisError;

///
/// RangeError
///
/// Failures raised while constructing or reducing ranges.
///
/// Endpoint ordering violations are never reported here: construction and
/// assignment resolve them by swapping the endpoints.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum RangeError {
    #[error("cannot compute a bounding range over an empty sequence")]
    EmptySequence,

    #[error("invalid inclusivity code {0:#04b}; expected a code in 0b00..=0b11")]
    InvalidInclusivity(u8),

    #[error("range {0} was never assigned")]
    UnsetEndpoint(Endpoint),
}

///
/// Endpoint
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Endpoint {
    #[display("minimum")]
    Minimum,

    #[display("maximum")]
    Maximum,
}

///
/// EvalError
///
/// Failures raised while evaluating a deferred predicate against an entity.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum EvalError {
    #[error(
        "optional field '{field}' has no value; filter out absent values before evaluating the predicate"
    )]
    AbsentValue { field: &'static str },
}
