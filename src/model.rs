//! # Schedule Model
//!
//! The normalized festival schedule produced by the parser and consumed
//! read-only by the renderers.
//!
//! ## Type Hierarchy
//! ```text
//! Lineup (Vec<Day>)
//!   └── Day
//!         ├── name: String ("Friday")
//!         └── Vec<Stage>
//!               ├── name: String ("COMMON STAGE")
//!               └── Vec<Act>
//!                     ├── artist: String
//!                     ├── time_from: "HH:MM"
//!                     └── time_to: "HH:MM"
//! ```
//!
//! Days, stages and acts keep the order they first appear in the source
//! text; nothing is sorted or mutated after parsing.
//!
//! Times are literal 24h clock strings. A `time_to` at or past midnight is
//! written as the schedule writes it (`"24:30"`); no date rollover is
//! modeled.
//!
//! The JSON form of a `Lineup` is an array of day objects with sorted keys
//! (`day`/`stages`, `acts`/`stage`, `artist`/`time_from`/`time_to`), and
//! round-trips losslessly through [`serde_json`]. Struct fields below are
//! declared in that key order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single artist's timed performance slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Act {
    pub artist: String,
    pub time_from: String,
    pub time_to: String,
}

/// A performance venue within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub acts: Vec<Act>,
    #[serde(rename = "stage")]
    pub name: String,
}

/// One festival day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    #[serde(rename = "day")]
    pub name: String,
    pub stages: Vec<Stage>,
}

/// The full schedule for one year.
pub type Lineup = Vec<Day>;

/// Person name -> artist name -> score (1-5 by convention).
pub type PreferenceMap = HashMap<String, HashMap<String, i64>>;
