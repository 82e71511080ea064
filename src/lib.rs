pub mod error;
pub mod motion;
pub mod parser;
pub mod rope;

pub use error::MotionError;
pub use motion::{parse_motions, Direction, Motion};
pub use rope::{count_tail_visits, Position, Rope, Simulation, Visits};
