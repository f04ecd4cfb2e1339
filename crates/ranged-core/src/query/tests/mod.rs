mod deferred;

use crate::query::{Field, OptionalField};

///
/// Sample
///
/// Fixture entity with one direct and one optional field.
///

#[derive(Clone, Debug, PartialEq)]
pub(super) struct Sample {
    pub id: u32,
    pub score: i32,
    pub bonus: Option<i32>,
}

impl Sample {
    pub const fn new(id: u32, score: i32, bonus: Option<i32>) -> Self {
        Self { id, score, bonus }
    }
}

pub(super) const SCORE: Field<Sample, i32> = Field::new("Score", |sample| sample.score);
pub(super) const BONUS: OptionalField<Sample, i32> =
    OptionalField::new("Bonus", |sample| sample.bonus);

pub(super) fn samples() -> Vec<Sample> {
    vec![
        Sample::new(1, 10, Some(5)),
        Sample::new(2, 20, None),
        Sample::new(3, 30, Some(25)),
        Sample::new(4, 40, Some(40)),
        Sample::new(5, 50, None),
    ]
}
