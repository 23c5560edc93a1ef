//! Team-slot tokens used by the dungeon tasks.

use std::{fmt, ops::RangeInclusive, str::FromStr};

use thiserror::Error;

/// Literal selecting the five strongest characters by power ranking.
pub const TOP_POWER_TOKEN: &str = "zhanli";

pub const GROUP_RANGE: RangeInclusive<i64> = 1..=5;
pub const TEAM_RANGE: RangeInclusive<i64> = 1..=3;

/// A single team slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamSlot {
    /// Empty token: keep whichever team was used last time.
    Keep,
    /// `zhanli`: pick the top five by power.
    TopPower,
    /// `A-B`: team `B` of formation group `A`.
    Group { group: i64, team: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamSlotError {
    #[error("every item must look like A-B or be zhanli, but '{token}' is neither")]
    MissingDash { token: String },

    #[error("two integers must be separated by '-', but '{token}' has {count} fields")]
    FieldCount { token: String, count: usize },

    #[error("two integers must be separated by '-', but '{token}' is not")]
    NotInteger { token: String },

    #[error("group A in A-B must be an integer from 1 to 5, but '{token}' is not")]
    GroupOutOfRange { token: String },

    #[error("team B in A-B must be an integer from 1 to 3, but '{token}' is not")]
    TeamOutOfRange { token: String },
}

impl fmt::Display for TeamSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSlot::Keep => Ok(()),
            TeamSlot::TopPower => f.write_str(TOP_POWER_TOKEN),
            TeamSlot::Group { group, team } => write!(f, "{group}-{team}"),
        }
    }
}

impl FromStr for TeamSlot {
    type Err = TeamSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(TeamSlot::Keep);
        }
        if s == TOP_POWER_TOKEN {
            return Ok(TeamSlot::TopPower);
        }
        if !s.contains('-') {
            return Err(TeamSlotError::MissingDash { token: s.to_string() });
        }
        let fields: Vec<&str> = s.split('-').collect();
        if fields.len() != 2 {
            return Err(TeamSlotError::FieldCount {
                token: s.to_string(),
                count: fields.len(),
            });
        }
        let (Ok(group), Ok(team)) = (fields[0].trim().parse::<i64>(), fields[1].trim().parse::<i64>()) else {
            return Err(TeamSlotError::NotInteger { token: s.to_string() });
        };
        if !GROUP_RANGE.contains(&group) {
            return Err(TeamSlotError::GroupOutOfRange { token: s.to_string() });
        }
        if !TEAM_RANGE.contains(&team) {
            return Err(TeamSlotError::TeamOutOfRange { token: s.to_string() });
        }
        Ok(TeamSlot::Group { group, team })
    }
}
