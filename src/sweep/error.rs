//! 扫描错误类型
//!
//! 扫描是全有或全无的：任何一步失败立即中止，已记录的早前各步
//! 保持有效，但不产出部分清单。

use crate::sim::{EngineError, LinkRate};
use crate::traffic::FlowId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// 扫描计划不合法，在任何运行开始之前拒绝
    #[error("invalid sweep spec: {reason}")]
    InvalidSpec { reason: String },

    /// 外部引擎在某一步失败；携带步下标与该步的容量配置
    #[error("simulation failed at sweep step {step} (capacity {capacity}): {source}")]
    Simulation {
        step: usize,
        capacity: LinkRate,
        #[source]
        source: EngineError,
    },

    /// 运行结果中出现非有限或负的吞吐量，按引擎故障对待，不做钳制
    #[error("malformed throughput for flow {flow:?} at sweep step {step}: {value}")]
    MalformedThroughput { step: usize, flow: FlowId, value: f64 },
}
