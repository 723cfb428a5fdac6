//! `am-robot` — the robot state machine and its carrying-capacity variants.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                          |
//! |---------------|-------------------------------------------------------------------|
//! | [`state`]     | `RobotState` enum                                                 |
//! | [`movement`]  | `move_towards`: bounded, overshoot-free floor stepping           |
//! | [`carrier`]   | `Carrier` trait, `Tube` (bounded LIFO), `VariantProfile`          |
//! | [`regular`]   | `RegularCarrier`: hand plus one-deep tube                        |
//! | [`fast`]      | `FastCarrier`: hand only, speed 3                                |
//! | [`bulk`]      | `BulkCarrier`: five-deep tube                                    |
//! | [`ledger`]    | `FleetLedger`: per-variant robot counts, ticks, fee adapters     |
//! | [`context`]   | `TickContext`, `MailSource`, `DeliverySink`                       |
//! | [`robot`]     | `Robot`: shared identity, dispatch protocol, `operate`           |
//! | [`error`]     | `RobotError`, `RobotResult<T>`                                    |
//!
//! # Design notes
//!
//! One state machine, three storage policies.  `Robot` owns everything the
//! variants share (position, state, dispatch flag, delivery counter) and
//! delegates every capacity question to a boxed [`Carrier`].  Anything shared
//! between robots of the same variant lives in the [`FleetLedger`], which the
//! driver lends to each robot for the duration of its tick through
//! [`TickContext`].  No globals, no interior mutability: the borrow checker
//! guarantees one robot is active at a time.

pub mod bulk;
pub mod carrier;
pub mod context;
pub mod error;
pub mod fast;
pub mod ledger;
pub mod movement;
pub mod regular;
pub mod robot;
pub mod state;


pub use bulk::BulkCarrier;
pub use carrier::{Carrier, Tube, VariantProfile};
pub use context::{DeliverySink, MailSource, TickContext};
pub use error::{RobotError, RobotResult};
pub use fast::FastCarrier;
pub use ledger::{FleetLedger, LookupFactory};
pub use movement::move_towards;
pub use regular::RegularCarrier;
pub use robot::Robot;
pub use state::RobotState;
