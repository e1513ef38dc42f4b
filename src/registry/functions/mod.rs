//! The whitelisted elementary functions

mod cos;
mod exp;
mod log;
mod sin;

pub use cos::CosFunction;
pub use exp::ExpFunction;
pub use log::LogFunction;
pub use sin::SinFunction;
