//! 数据包模块
//!
//! 包含仿真使用的值类型（时间、包长、流标识符、权重）以及轨迹解析。

// 子模块声明
mod id;
mod record;
mod size;
mod time;
mod trace;

// 重新导出公共接口
pub use id::{Priority, StreamId};
pub use record::Packet;
pub use size::{LinkSpeed, PacketSize};
pub use time::{Time, TimeInterval};
pub use trace::{parse_trace, read_trace};
