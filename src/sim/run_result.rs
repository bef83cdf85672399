//! 单次运行结果
//!
//! 一次完整仿真运行得到的三个流吞吐量（Mbps），下标与
//! [`FlowId::ORDER`](crate::traffic::FlowId::ORDER) 一致。

use crate::traffic::{FlowId, OBSERVATION_WINDOW};

/// 单次运行的逐流吞吐量（Mbps）。每个扫描步新建一份，用完即弃。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunResult {
    mbps: [f64; 3],
}

impl RunResult {
    pub fn new(mbps: [f64; 3]) -> RunResult {
        RunResult { mbps }
    }

    /// 由各流目的端收到的字节数换算吞吐量。
    ///
    /// 分母固定为 [`OBSERVATION_WINDOW`]，与各流实际的启停时刻无关；
    /// 下游绘图消费方按此口径解读数值。
    pub fn from_rx_bytes(rx_bytes: [u64; 3]) -> RunResult {
        let window_s = OBSERVATION_WINDOW.as_secs_f64();
        RunResult {
            mbps: rx_bytes.map(|b| b as f64 * 8.0 / window_s / 1_000_000.0),
        }
    }

    pub fn throughput_mbps(&self, flow: FlowId) -> f64 {
        self.mbps[flow.index()]
    }

    pub fn throughputs(&self) -> [f64; 3] {
        self.mbps
    }
}
