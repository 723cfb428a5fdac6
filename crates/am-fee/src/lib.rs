//! `am-fee` — turns an unreliable per-floor price lookup into stable fees.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`lookup`]   | `PriceLookup` trait, `PriceQuote`                             |
//! | [`adapter`]  | `FeeAdapter`: fallback cache, fee arithmetic, summary string |
//! | [`modem`]    | `SimulatedModem`: seeded, flaky `PriceLookup`                |
//!
//! # Degraded mode
//!
//! The lookup may report [`PriceQuote::Unavailable`] on any call.  That is
//! data, not an error: the adapter answers with the last price it saw for
//! the floor (or zero) and nothing in this crate returns `Result`.

pub mod adapter;
pub mod lookup;
pub mod modem;


pub use adapter::FeeAdapter;
pub use lookup::{PriceLookup, PriceQuote};
pub use modem::SimulatedModem;
