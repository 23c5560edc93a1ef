//! Team list editor used by the dungeon tasks.

use serde_json::Value;
use tasklet_types::{TOP_POWER_TOKEN, TeamSlot, validation::validate_team_tokens};
use tracing::debug;

use crate::{Console, InputBox, InputError, console::next_line};

const INTRO: &[&str] = &[
    "Enter the teams in order",
    "A-B selects team B of formation group A (A from 1 to 5, B from 1 to 3)",
    "zhanli picks the five strongest characters by power ranking",
    "end finishes the list",
];

/// Builds an ordered list of team slots, one prompt per slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamBox;

impl InputBox for TeamBox {
    fn produce(&self, console: &mut dyn Console) -> Result<Value, InputError> {
        for line in INTRO {
            console.print(line)?;
        }
        let mut slots: Vec<TeamSlot> = Vec::new();
        loop {
            let entry = next_line(console, &format!("team {}: ", slots.len() + 1))?;
            if entry == "end" {
                debug!(teams = slots.len(), "team list finished");
                let tokens: Vec<String> = slots.iter().map(TeamSlot::to_string).collect();
                return Ok(Value::from(tokens));
            }
            if entry == TOP_POWER_TOKEN {
                slots.push(TeamSlot::TopPower);
                continue;
            }
            match entry.parse::<TeamSlot>() {
                Ok(slot @ TeamSlot::Group { .. }) => slots.push(slot),
                Ok(_) => console.print("invalid input, please try again")?,
                Err(error) => console.print(&format!("invalid input: {error}; please try again"))?,
            }
        }
    }

    fn validate(&self, candidate: &Value) -> String {
        validate_team_tokens(candidate).err().unwrap_or_default()
    }
}
