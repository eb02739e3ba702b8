//! 流配置
//!
//! 流标识符到带宽权重（百分比）的映射，权重之和必须为 100。

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use crate::error::ConfigError;
use crate::packet::{Packet, PacketSize, Priority, StreamId};

#[derive(Debug, Clone, PartialEq)]
pub struct StreamConfiguration {
    weights: BTreeMap<StreamId, Priority>,
}

impl StreamConfiguration {
    pub fn new(weights: BTreeMap<StreamId, Priority>) -> Result<Self, ConfigError> {
        let total = weights
            .values()
            .try_fold(Priority::MIN, |acc, w| acc.checked_add(*w));
        if total != Some(Priority::MAX) {
            let sum = weights.values().map(|w| i64::from(w.get())).sum();
            return Err(ConfigError::WeightSum(sum));
        }
        Ok(Self { weights })
    }

    /// 解析逗号分隔的百分比列表，依次分配给流 `1..=N`。
    ///
    /// ```
    /// use wfq_sim::stream::StreamConfiguration;
    ///
    /// let cfg = StreamConfiguration::from_percentages("50,10,40").unwrap();
    /// assert_eq!(cfg.len(), 3);
    /// ```
    pub fn from_percentages(raw: &str) -> Result<Self, ConfigError> {
        let values = raw
            .split(',')
            .map(|v| v.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ConfigError::Parse(raw.to_string()))?;
        let priorities = values
            .into_iter()
            .map(Priority::new)
            .collect::<Result<Vec<_>, _>>()?;
        let n = u32::try_from(priorities.len()).map_err(|_| ConfigError::Parse(raw.to_string()))?;
        Self::new(StreamId::sequence(n).zip(priorities).collect())
    }

    pub fn weight(&self, stream: StreamId) -> Option<Priority> {
        self.weights.get(&stream).copied()
    }

    /// 加权包长：`size * 100 / weight`。权重越小，等效包长越大。
    pub fn apply_weight(&self, packet: &Packet) -> Result<PacketSize, ConfigError> {
        let stream = packet.stream();
        let weight = self
            .weight(stream)
            .ok_or(ConfigError::UnknownStream(stream))?;
        if weight == Priority::MIN {
            return Err(ConfigError::ZeroWeight(stream));
        }
        let weighted =
            packet.size().get() * f64::from(Priority::MAX.get()) / f64::from(weight.get());
        Ok(PacketSize::new(weighted)?)
    }

    pub fn stream_ids(&self) -> BTreeSet<StreamId> {
        self.weights.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StreamId, Priority)> + '_ {
        self.weights.iter().map(|(s, w)| (*s, *w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromStr for StreamConfiguration {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_percentages(s)
    }
}
