use std::fmt::{self, Display};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::util::{Error, Probability, Result};
use crate::DIE_FACES;

/// Condition of the investigator rolling the dice.
///
/// The status decides how many faces of a d6 count as a success: normally a
/// 5 or a 6, a 4 or better when blessed, and only a 6 when cursed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    #[default]
    Normal,
    Blessed,
    Cursed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Normal, Status::Blessed, Status::Cursed];

    /// One in `denominator` rolls is a success.
    #[must_use]
    pub const fn denominator(self) -> u32 {
        match self {
            Status::Normal => 3,
            Status::Blessed => 2,
            Status::Cursed => 6,
        }
    }

    #[must_use]
    pub fn hit_chance(self) -> Probability {
        1.0 / Probability::from(self.denominator())
    }

    #[must_use]
    pub fn miss_chance(self) -> Probability {
        1.0 - self.hit_chance()
    }

    #[must_use]
    pub const fn success_faces(self) -> RangeInclusive<u32> {
        let n = DIE_FACES / self.denominator();
        DIE_FACES - n + 1..=DIE_FACES
    }

    #[must_use]
    pub fn is_success(self, face: u32) -> bool {
        self.success_faces().contains(&face)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Blessed => "blessed",
            Status::Cursed => "cursed",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Status::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownStatus(s.to_owned()))
    }
}

impl TryFrom<u32> for Status {
    type Error = Error;

    fn try_from(denominator: u32) -> Result<Self> {
        Status::ALL
            .into_iter()
            .find(|status| status.denominator() == denominator)
            .ok_or(Error::InvalidDenominator(denominator))
    }
}
