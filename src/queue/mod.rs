//! 路由器队列
//!
//! 路由器内部的三个队列：
//! - `ReceiveQueue`：按到达时间分批保存待调度的包
//! - `RouterQueue`：按虚拟完成时间排序的待发送包
//! - `SendQueue`：已发送包及其传输区间

mod receive;
mod router;
mod send;

pub use receive::ReceiveQueue;
pub use router::RouterQueue;
pub use send::SendQueue;
