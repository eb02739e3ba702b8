//! 接收队列
//!
//! 按到达时间分批保存尚未进入调度的包。同一到达时间的包组成一个批次，
//! 批次按到达时间递增排列。

use std::collections::{BTreeSet, VecDeque};

use tracing::debug;

use crate::error::QueueError;
use crate::packet::{Packet, StreamId, TimeInterval};

#[derive(Debug, Clone, Default)]
pub struct ReceiveQueue {
    batches: VecDeque<Vec<Packet>>,
}

impl ReceiveQueue {
    /// 稳定排序后按到达时间分组；同一批次内保持输入顺序。
    pub fn from_packets(packets: impl IntoIterator<Item = Packet>) -> Self {
        let mut sorted: Vec<Packet> = packets.into_iter().collect();
        sorted.sort_by_key(|p| p.arrival());

        let mut batches: VecDeque<Vec<Packet>> = VecDeque::new();
        for pkt in sorted {
            match batches.back_mut() {
                Some(batch) if batch[0].arrival() == pkt.arrival() => batch.push(pkt),
                _ => batches.push_back(vec![pkt]),
            }
        }
        Self { batches }
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// 剩余包数
    pub fn len(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }

    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// 取出到达时间最早的一批
    pub fn pop_earliest_batch(&mut self) -> Result<Vec<Packet>, QueueError> {
        self.batches.pop_front().ok_or(QueueError::ReceiveEmpty)
    }

    /// 取出所有到达时间落在 `[begin, end)` 内的批次，保持批次顺序。
    pub fn pop_arriving_within(&mut self, interval: &TimeInterval) -> Vec<Packet> {
        let mut arrived = Vec::new();
        self.batches.retain_mut(|batch| {
            let hit = batch
                .first()
                .is_some_and(|p| interval.contains(p.arrival()));
            if hit {
                arrived.append(batch);
            }
            !hit
        });
        if !arrived.is_empty() {
            debug!(%interval, count = arrived.len(), "接收队列：区间内到达");
        }
        arrived
    }

    /// 当前所有待处理包的副本（按批次顺序）
    pub fn snapshot(&self) -> Vec<Packet> {
        self.batches.iter().flatten().copied().collect()
    }

    /// 队列中出现过的流标识符集合
    pub fn stream_ids(&self) -> BTreeSet<StreamId> {
        self.batches.iter().flatten().map(Packet::stream).collect()
    }
}
