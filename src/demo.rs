//! 演示和示例代码
//!
//! 提供一个替代外部离散事件引擎的封闭式参考模型，便于在未接入
//! 真实引擎时运行实验二进制与集成测试。

use crate::sim::{EngineError, LinkRate, RunResult, SimTime, SimulationAdapter};
use crate::topo::access_cell::AccessCellOpts;
use crate::traffic::{traffic_plan, TrafficFlow, OBSERVATION_WINDOW};

/// 接入链路参考模型。
///
/// 把被扫描的有线链路当作唯一瓶颈，在三条恒定需求之间做 max-min
/// 公平分配，再按固定观测窗口折算吞吐量。对相同输入结果确定。
/// 这不是离散事件仿真，只充当引擎缺席时的演示实现。
#[derive(Debug)]
pub struct AccessLinkModel {
    plan: [TrafficFlow; 3],
}

impl Default for AccessLinkModel {
    fn default() -> Self {
        Self {
            plan: traffic_plan(),
        }
    }
}

/// 经典注水法：需求从小到大依次领取公平份额，余量归还给后续需求。
fn max_min_allocation(capacity_kbps: f64, demands: [f64; 3]) -> [f64; 3] {
    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| demands[a].total_cmp(&demands[b]));

    let mut alloc = [0.0; 3];
    let mut remaining = capacity_kbps.max(0.0);
    for (k, &i) in order.iter().enumerate() {
        let fair = remaining / (demands.len() - k) as f64;
        let granted = demands[i].min(fair);
        alloc[i] = granted;
        remaining -= granted;
    }
    alloc
}

impl SimulationAdapter for AccessLinkModel {
    fn execute(&mut self, capacity: LinkRate) -> Result<RunResult, EngineError> {
        if !capacity.kbps().is_finite() || capacity.kbps() < 0.0 {
            return Err(EngineError(format!("invalid link capacity: {capacity}")));
        }
        let opts = AccessCellOpts::with_capacity(capacity);

        let demands = self.plan.map(|f| f.rate.kbps());
        let alloc = max_min_allocation(opts.wired_capacity.kbps(), demands);

        // 持续速率折算成观测窗口内收到的字节数，换算口径与引擎一致。
        let window_s = window_within(opts.run_until).as_secs_f64();
        let rx_bytes = alloc.map(|kbps| (kbps * 1_000.0 * window_s / 8.0).round() as u64);
        Ok(RunResult::from_rx_bytes(rx_bytes))
    }
}

/// 观测窗口不会超出运行时长。
fn window_within(run_until: SimTime) -> SimTime {
    OBSERVATION_WINDOW.min(run_until)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_min_respects_demands_when_capacity_is_ample() {
        let alloc = max_min_allocation(10_000.0, [1_000.0, 500.0, 1_000.0]);
        assert_eq!(alloc, [1_000.0, 500.0, 1_000.0]);
    }

    #[test]
    fn max_min_splits_scarce_capacity_evenly() {
        let alloc = max_min_allocation(300.0, [1_000.0, 500.0, 1_000.0]);
        assert_eq!(alloc, [100.0, 100.0, 100.0]);
    }

    #[test]
    fn max_min_satisfies_small_demand_first() {
        // 500 is satisfied below its fair share only once capacity allows it.
        let alloc = max_min_allocation(2_000.0, [1_000.0, 500.0, 1_000.0]);
        assert_eq!(alloc[1], 500.0);
        assert_eq!(alloc[0], alloc[2]);
        assert!((alloc[0] + alloc[1] + alloc[2] - 2_000.0).abs() < 1e-9);
    }

    #[test]
    fn model_rejects_non_finite_capacity() {
        let mut model = AccessLinkModel::default();
        assert!(model.execute(LinkRate::from_kbps(f64::NAN)).is_err());
        assert!(model.execute(LinkRate::from_kbps(-1.0)).is_err());
    }
}
