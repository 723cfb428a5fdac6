//! Strongly typed identifiers.
//!
//! Every id is `Copy + Ord + Hash`, usable directly as a map key.

use std::fmt;

/// Sequence number of a mail item, assigned by the generator in creation
/// order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MailId(pub u32);

impl fmt::Display for MailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{:03}", self.0)
    }
}

// ── RobotKind ─────────────────────────────────────────────────────────────────

/// The carrying-capacity variant of a robot.
///
/// Every per-variant constant (speed, capacity, fee rate, fault threshold)
/// is keyed off this tag, and the fleet ledger aggregates counters by it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RobotKind {
    /// Single-slot: one hand item plus a one-deep tube.
    Regular,
    /// Hand-only: one item, moves three floors per tick.
    Fast,
    /// Bulk-queue: five-deep tube, no hand.
    Bulk,
}

impl RobotKind {
    /// All variants, in fleet construction order.
    pub const ALL: [RobotKind; 3] = [RobotKind::Regular, RobotKind::Fast, RobotKind::Bulk];

    /// One-letter tag used in robot ids (`R0`, `F1`, `B2`).
    pub fn tag(self) -> &'static str {
        match self {
            RobotKind::Regular => "R",
            RobotKind::Fast    => "F",
            RobotKind::Bulk    => "B",
        }
    }
}

impl fmt::Display for RobotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RobotKind::Regular => "regular",
            RobotKind::Fast    => "fast",
            RobotKind::Bulk    => "bulk",
        };
        f.write_str(s)
    }
}

// ── RobotId ───────────────────────────────────────────────────────────────────

/// Identity of one robot: its variant plus a fleet-wide ordinal.
///
/// Ordinals are unique across the whole fleet, not per variant, so `R0`,
/// `R1`, `F2`, `B3` is a valid fleet of four.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotId {
    pub kind:   RobotKind,
    pub number: u32,
}

impl RobotId {
    #[inline]
    pub fn new(kind: RobotKind, number: u32) -> Self {
        Self { kind, number }
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.tag(), self.number)
    }
}
