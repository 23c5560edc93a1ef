//! Input boxes: the interactive producers and validators bound to task parameters.
//!
//! Every parameter carries an [`InputBox`]. The scalar boxes cover the four
//! standard kinds; the sweep editors and the team editor run small command
//! interpreters to build list-valued parameters.

pub mod console;
pub mod error;
pub mod scalar;
pub mod sweep;
pub mod team;

use std::fmt::Debug;

use serde_json::Value;

pub use console::{Console, LineConsole, StdConsole};
pub use error::{CommandError, InputError};
pub use scalar::{BoolBox, FloatBox, IntBox, StrBox, standard_input_box};
pub use sweep::{HardSweepBox, NormalSweepBox, SweepBox, SweepPlan};
pub use team::TeamBox;

/// Capability pair bound to a parameter: produce a value interactively, or
/// validate a value supplied from elsewhere.
pub trait InputBox: Debug + Send + Sync {
    /// Runs the interactive protocol until a valid value is entered.
    ///
    /// Malformed input is reported and re-prompted; only console failures and
    /// end of input end the protocol early.
    fn produce(&self, console: &mut dyn Console) -> Result<Value, InputError>;

    /// Returns an empty string when `candidate` is acceptable, otherwise a
    /// human-readable diagnostic.
    fn validate(&self, candidate: &Value) -> String;
}
