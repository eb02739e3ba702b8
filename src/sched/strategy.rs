//! 完成时间策略
//!
//! 调度算法之间唯一的差别是虚拟完成时间的计算方式。

use tracing::trace;

use crate::error::{ConfigError, ScheduleError};
use crate::packet::{LinkSpeed, Packet, Time};
use crate::queue::ReceiveQueue;
use crate::stream::StreamConfiguration;

/// Finish-tag strategy plugged into [`Scheduler`](super::Scheduler).
pub trait FinishTime {
    /// 算法名（用于日志与报告）
    fn name(&self) -> &'static str;

    /// 仿真开始前对输入做校验，默认不做任何检查。
    fn validate(&self, _recv: &ReceiveQueue) -> Result<(), ScheduleError> {
        Ok(())
    }

    /// 给定前一个完成时间 `prior`，估算 `packet` 的虚拟完成时间。
    fn finish_time(&self, prior: Time, packet: &Packet) -> Result<Time, ScheduleError>;
}

/// 公平排队：`max(prior, arrival) + size`
#[derive(Debug, Clone, Copy, Default)]
pub struct FairQueuing;

impl FinishTime for FairQueuing {
    fn name(&self) -> &'static str {
        "fq"
    }

    fn finish_time(&self, prior: Time, packet: &Packet) -> Result<Time, ScheduleError> {
        let size = packet.size().to_time(LinkSpeed::UNIT)?;
        let tag = prior.max(packet.arrival()) + size;
        trace!(pkt_id = packet.id(), prior = prior.as_secs(), tag = tag.as_secs(), "fq finish tag");
        Ok(tag)
    }
}

/// 加权公平排队：`max(prior, arrival) + size * 100 / weight`
#[derive(Debug, Clone)]
pub struct WeightedFairQueuing {
    config: StreamConfiguration,
}

impl WeightedFairQueuing {
    pub fn new(config: StreamConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StreamConfiguration {
        &self.config
    }
}

impl FinishTime for WeightedFairQueuing {
    fn name(&self) -> &'static str {
        "wfq"
    }

    /// 输入中的流集合必须与配置完全一致，且这些流的权重不能为 0。
    fn validate(&self, recv: &ReceiveQueue) -> Result<(), ScheduleError> {
        let observed = recv.stream_ids();
        let configured = self.config.stream_ids();
        if observed != configured {
            return Err(ScheduleError::StreamMismatch {
                observed,
                configured,
            });
        }
        if let Some((stream, _)) = self.config.iter().find(|(_, w)| w.get() == 0) {
            return Err(ConfigError::ZeroWeight(stream).into());
        }
        Ok(())
    }

    fn finish_time(&self, prior: Time, packet: &Packet) -> Result<Time, ScheduleError> {
        let weighted = self.config.apply_weight(packet)?;
        let tag = prior.max(packet.arrival()) + weighted.to_time(LinkSpeed::UNIT)?;
        trace!(
            pkt_id = packet.id(),
            stream = %packet.stream(),
            prior = prior.as_secs(),
            weighted = weighted.get(),
            tag = tag.as_secs(),
            "wfq finish tag"
        );
        Ok(tag)
    }
}
