//! `am-sim` — builds the fleet and drives it one tick at a time.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 1..:
//!   ① Arrivals: mail generated for this tick enters the pool.
//!   ② Loading : the pool fills waiting robots and dispatches them.
//!   ③ Operate : every robot's `operate` runs once, in fleet order.
//!   ④ Report  : new deliveries go to the observer.
//! until every generated item is delivered or rejected.
//! ```
//!
//! A robot fault (`RobotError::ExcessiveDelivery`) or a duplicate delivery
//! stops the loop and is returned from [`Sim::run`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use am_core::SimConfig;
//! use am_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("{report}");
//! ```

pub mod builder;
pub mod delivery;
pub mod error;
pub mod fleet;
pub mod generator;
pub mod observer;
pub mod pool;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use delivery::{DeliveryLog, DeliveryRecord, SimReport};
pub use error::{SimError, SimResult};
pub use fleet::build_fleet;
pub use generator::MailGenerator;
pub use observer::{NoopObserver, SimObserver};
pub use pool::{FifoMailPool, MailPool};
pub use sim::Sim;
