//! Floor-to-floor movement.

/// One tick of movement from `current` toward `target` at `speed` floors per
/// tick.
///
/// Moves a full `speed` floors while the target is farther away than that,
/// then lands exactly on it.  Never overshoots and never reverses, so
/// repeated calls reach `target` after `ceil(|current - target| / speed)`
/// ticks, going up or down alike.  Already at `target` is a no-op.
#[inline]
pub fn move_towards(current: i32, target: i32, speed: u32) -> i32 {
    let remaining = target - current;
    let step = remaining.unsigned_abs().min(speed) as i32;
    current + step * remaining.signum()
}
