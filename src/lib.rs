pub mod error;
pub mod packet;
pub mod queue;
pub mod report;
pub mod sched;
pub mod stream;

pub use error::{Error, Result};

#[cfg(test)]
mod test;
