//! 数据包类型
//!
//! 定义从轨迹文件解析得到的不可变数据包。

use std::fmt;

use super::id::StreamId;
use super::size::{LinkSpeed, PacketSize};
use super::time::Time;
use crate::error::ValueError;

/// 数据包：解析后不再修改，队列只持有它的副本。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Packet {
    id: u64,
    stream: StreamId,
    size: PacketSize,
    arrival: Time,
}

impl Packet {
    pub fn new(id: u64, stream: StreamId, size: PacketSize, arrival: Time) -> Self {
        Self {
            id,
            stream,
            size,
            arrival,
        }
    }

    /// 输入中的序号（从 1 开始）
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn stream(&self) -> StreamId {
        self.stream
    }

    pub fn size(&self) -> PacketSize {
        self.size
    }

    pub fn arrival(&self) -> Time {
        self.arrival
    }

    /// 以给定速率发送该包所需的时间
    pub fn time_to_send(&self, speed: LinkSpeed) -> Result<Time, ValueError> {
        self.size.to_time(speed)
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
