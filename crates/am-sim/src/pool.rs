//! The mail pool: holds arrived mail and loads it onto waiting robots.

use std::collections::VecDeque;

use am_core::{MailItem, RobotId};
use am_robot::{MailSource, Robot, RobotError, RobotResult};
use tracing::{trace, warn};

/// The mail-sorting collaborator the robots register with.
///
/// The driver calls [`load_items_to_robots`](MailPool::load_items_to_robots)
/// once per tick, before any robot operates.  Implementations decide which
/// items go to which waiting robot, call `Robot::load_item` for each, and
/// `Robot::dispatch` once a robot's load is complete.
pub trait MailPool: MailSource {
    /// Accept a newly arrived item.
    fn add_to_pool(&mut self, item: MailItem);

    /// Load and dispatch waiting robots.  Returns how many were dispatched.
    ///
    /// # Errors
    ///
    /// Only robot faults; load rejections are handled by the pool.
    fn load_items_to_robots(&mut self, robots: &mut [Robot]) -> RobotResult<usize>;

    /// Items waiting for a robot.
    fn pending(&self) -> usize;

    /// Items no robot can ever carry.
    fn rejected(&self) -> &[MailItem];
}

/// First-come, first-served pool.
///
/// Waiting robots are served in registration order.  Each one is filled from
/// the oldest mail until it is full or the pool runs dry, then dispatched.
/// Overweight items are set aside permanently; a robot that runs out of room
/// mid-load keeps the item at the front of the pool.
#[derive(Debug, Default)]
pub struct FifoMailPool {
    mail:     VecDeque<MailItem>,
    waiting:  VecDeque<RobotId>,
    rejected: Vec<MailItem>,
}

impl FifoMailPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Robots registered and not yet dispatched, in service order.
    pub fn waiting(&self) -> impl Iterator<Item = RobotId> + '_ {
        self.waiting.iter().copied()
    }

    /// Fill one robot.  Returns `true` if anything was loaded.
    fn fill(&mut self, robot: &mut Robot) -> RobotResult<bool> {
        let mut loaded = false;
        while !robot.is_full() {
            let Some(item) = self.mail.pop_front() else { break };
            match robot.load_item(item) {
                Ok(()) => loaded = true,
                Err(RobotError::ItemTooHeavy { item }) => {
                    warn!(mail = %item.id, weight = item.weight, robot = %robot.id(), "rejecting overweight mail");
                    self.rejected.push(item);
                }
                Err(RobotError::StorageFull { item, .. }) => {
                    self.mail.push_front(item);
                    break;
                }
                Err(fault @ RobotError::ExcessiveDelivery { .. }) => return Err(fault),
            }
        }
        Ok(loaded)
    }
}

impl MailSource for FifoMailPool {
    fn register_waiting(&mut self, robot: RobotId) {
        if !self.waiting.contains(&robot) {
            self.waiting.push_back(robot);
        }
    }
}

impl MailPool for FifoMailPool {
    fn add_to_pool(&mut self, item: MailItem) {
        trace!(mail = %item.id, floor = item.destination_floor, "mail arrived");
        self.mail.push_back(item);
    }

    fn load_items_to_robots(&mut self, robots: &mut [Robot]) -> RobotResult<usize> {
        let mut dispatched = 0;
        let mut still_waiting = VecDeque::with_capacity(self.waiting.len());
        while let Some(id) = self.waiting.pop_front() {
            let Some(robot) = robots.iter_mut().find(|r| r.id() == id) else {
                warn!(robot = %id, "unknown robot registered as waiting");
                continue;
            };
            if self.fill(robot)? {
                robot.dispatch();
                dispatched += 1;
            } else {
                still_waiting.push_back(id);
            }
        }
        self.waiting = still_waiting;
        Ok(dispatched)
    }

    fn pending(&self) -> usize {
        self.mail.len()
    }

    fn rejected(&self) -> &[MailItem] {
        &self.rejected
    }
}
