//! 调度器
//!
//! 离散事件仿真主循环：把接收队列中的包按完成时间排入路由队列，
//! 逐个发送并记录到发送队列。当前时间只随已提交的传输推进。

use tracing::{debug, info};

use super::strategy::FinishTime;
use crate::error::ScheduleError;
use crate::packet::{LinkSpeed, Time, TimeInterval};
use crate::queue::{ReceiveQueue, RouterQueue, SendQueue};

/// 由完成时间策略驱动的单链路调度器。
#[derive(Debug, Clone)]
pub struct Scheduler<S> {
    strategy: S,
    link_speed: LinkSpeed,
}

impl<S: FinishTime> Scheduler<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            link_speed: LinkSpeed::UNIT,
        }
    }

    pub fn with_link_speed(mut self, link_speed: LinkSpeed) -> Self {
        self.link_speed = link_speed;
        self
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn link_speed(&self) -> LinkSpeed {
        self.link_speed
    }

    /// 从 `initial` 开始运行一次完整仿真，直到接收队列与路由队列都为空。
    ///
    /// 路由队列为空时取出最早的一批包；若这批包晚于当前时间到达，
    /// 链路空闲到该到达时间再开始发送。
    #[tracing::instrument(skip_all, fields(algorithm = self.strategy.name(), initial = initial.as_secs()))]
    pub fn execute(
        &self,
        recv: &mut ReceiveQueue,
        initial: Time,
    ) -> Result<SendQueue, ScheduleError> {
        self.strategy.validate(recv)?;
        info!(packets = recv.len(), batches = recv.batch_count(), "▶️  开始调度");

        let mut router = RouterQueue::default();
        let mut send = SendQueue::default();
        let mut now = initial;

        while !recv.is_empty() || !router.is_empty() {
            if router.is_empty() {
                let batch = recv.pop_earliest_batch()?;
                if let Some(first) = batch.first() {
                    if first.arrival() > now {
                        debug!(idle_from = now.as_secs(), idle_to = first.arrival().as_secs(), "链路空闲");
                        now = first.arrival();
                    }
                }
                for pkt in batch {
                    let tag = self.strategy.finish_time(initial, &pkt)?;
                    router.insert(tag, pkt);
                }
            }

            let (prior, pkt) = router.extract_min()?;
            let end = now + pkt.time_to_send(self.link_speed)?;
            let interval = TimeInterval::new(now, end)?;
            send.record(pkt, interval);

            for arrived in recv.pop_arriving_within(&interval) {
                let tag = self.strategy.finish_time(prior, &arrived)?;
                router.insert(tag, arrived);
            }
            now = end;
        }

        info!(
            sent = send.len(),
            final_time = now.as_secs(),
            "✅ 调度完成"
        );
        Ok(send)
    }
}
