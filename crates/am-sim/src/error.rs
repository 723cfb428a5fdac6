use am_core::{AmError, MailId, Tick};
use am_robot::RobotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] AmError),

    #[error("robot fault: {0}")]
    Robot(#[from] RobotError),

    #[error("mail item {0} was delivered twice")]
    DuplicateDelivery(MailId),

    #[error("mail still undelivered after {0}")]
    TickLimit(Tick),
}

pub type SimResult<T> = Result<T, SimError>;
