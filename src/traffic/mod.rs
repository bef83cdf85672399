//! 流量计划模块
//!
//! 定义实验的三条固定流及其顺序。整个扫描过程中流量计划不变，
//! 只有被扫描的有线链路容量逐步变化。

mod flow;

pub use flow::{traffic_plan, FlowId, NodeRole, TrafficFlow, OBSERVATION_WINDOW};
