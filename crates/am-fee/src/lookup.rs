//! The external pricing dependency, as the rest of the workspace sees it.

/// Result of one price lookup.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PriceQuote {
    /// Service fee for the floor, as reported by the service.
    Price(f64),
    /// The service did not answer this time.
    Unavailable,
}

impl PriceQuote {
    /// Sentinel the pricing service uses on the wire for "no answer".
    pub const UNAVAILABLE_SENTINEL: f64 = -1.0;

    /// Decode a raw wire value, mapping the sentinel to `Unavailable`.
    pub fn from_raw(raw: f64) -> Self {
        if raw == Self::UNAVAILABLE_SENTINEL {
            PriceQuote::Unavailable
        } else {
            PriceQuote::Price(raw)
        }
    }
}

/// A per-floor price source.
///
/// Implementations must never panic; failure is reported as
/// [`PriceQuote::Unavailable`].  Takes `&mut self` because real sources keep
/// connection state and test doubles keep a script cursor.
///
/// Any `FnMut(i32) -> PriceQuote` closure is a `PriceLookup`, which keeps
/// test doubles to one line.
pub trait PriceLookup {
    fn lookup_price(&mut self, floor: i32) -> PriceQuote;
}

impl<F> PriceLookup for F
where
    F: FnMut(i32) -> PriceQuote,
{
    #[inline]
    fn lookup_price(&mut self, floor: i32) -> PriceQuote {
        self(floor)
    }
}
