use std::fmt;

/// Where a robot is in its delivery cycle.
///
/// Every robot starts `Returning` and cycles
/// `Returning → Waiting → Delivering → Returning` for the life of the run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RobotState {
    /// Heading back to the mailroom floor.
    Returning,
    /// Parked at the mailroom, registered with the mail source.
    Waiting,
    /// Carrying mail to `destination_floor`.
    Delivering,
}

impl fmt::Display for RobotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RobotState::Returning  => "RETURNING",
            RobotState::Waiting    => "WAITING",
            RobotState::Delivering => "DELIVERING",
        };
        f.write_str(s)
    }
}
