use thiserror::Error;

#[derive(Debug, Error, Copy, Clone, PartialEq)]
pub enum Error {
    #[error("time of week {0} is outside [0, 604800) seconds")]
    TowOutOfRange(f64),
}
