//! `am-core` — foundational types for the automail simulation.
//!
//! This crate is a dependency of every other `am-*` crate.  It intentionally
//! has no `am-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RobotKind`, `RobotId`, `MailId`                      |
//! | [`mail`]        | `MailItem`, `MAX_ITEM_WEIGHT`                         |
//! | [`building`]    | `Building` trait, `BuildingLayout`                    |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimConfig`                                           |
//! | [`rng`]         | `SimRng` (seeded, single-threaded)                    |
//! | [`error`]       | `AmError`, `AmResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `SimConfig` from JSON.                    |

pub mod building;
pub mod config;
pub mod error;
pub mod ids;
pub mod mail;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use building::{Building, BuildingLayout};
pub use config::SimConfig;
pub use error::{AmError, AmResult};
pub use ids::{MailId, RobotId, RobotKind};
pub use mail::{MAX_ITEM_WEIGHT, MailItem};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
