//! 仿真适配器 trait
//!
//! 外部离散事件仿真引擎的接入点。引擎内部如何建拓扑、跑报文
//! 不属于本 crate；本 crate 只依赖下述输入/输出契约。

use super::{LinkRate, RunResult};
use thiserror::Error;

/// 外部引擎无法完成一次运行时返回的错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct EngineError(pub String);

/// 一次调用对应一次完整的仿真运行：按固定拓扑与固定流量计划
/// 建网、跑满观测窗口、拆除，然后返回逐流吞吐量。
///
/// 实现必须保证：
/// - 恰好返回三个吞吐量值，顺序与 [`FlowId::ORDER`](crate::traffic::FlowId::ORDER) 一致；
/// - 从未完成任何测量的流上报 `0`，而不是缺项；
/// - 对相同输入结果确定（本 crate 失败后不做重试）。
pub trait SimulationAdapter {
    fn execute(&mut self, capacity: LinkRate) -> Result<RunResult, EngineError>;
}
