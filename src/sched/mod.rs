//! 调度模块
//!
//! 公共的仿真驱动 [`Scheduler`] 与可插拔的完成时间策略（FQ / WFQ）。

mod scheduler;
mod strategy;

pub use scheduler::Scheduler;
pub use strategy::{FairQueuing, FinishTime, WeightedFairQueuing};
