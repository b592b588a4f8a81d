mod alert;
mod config;
mod error;
mod gpio;
mod logic;
mod scheduler;
mod simulation;
mod vector;

pub use alert::{Alert, AlertLog, Severity};
pub use config::{GpioConfig, MsgId};
pub use error::Error;
pub use gpio::Gpio;
pub use logic::{Logic, MatchStrictness};
pub use simulation::{LineRef, Simulation};
pub use vector::{LogicPattern, LogicVector};
