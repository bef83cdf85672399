//! 扫描控制器
//!
//! 持有扫描计划，逐步派生容量值、调用仿真适配器并把结果交给
//! 聚合器。步与步之间严格串行：第 i+1 步在第 i 步的结果记录完成
//! 之前不会开始，因此聚合器的各序列与扫描下标保持对齐。

use super::{SweepError, SweepSpec};
use crate::agg::ResultAggregator;
use crate::sim::{LinkRate, SimulationAdapter};
use tracing::{debug, info};

/// 按计划执行整个扫描。
///
/// 某一步引擎失败时立即中止并返回该步的下标与容量配置；不重试
/// （引擎对相同输入是确定的，重跑不会改变结果），也不合成任何
/// 插值点。
#[tracing::instrument(skip(spec, adapter, agg), fields(start = spec.start, step = spec.step, count = spec.count))]
pub fn run_sweep(
    spec: &SweepSpec,
    adapter: &mut dyn SimulationAdapter,
    agg: &mut ResultAggregator,
) -> Result<(), SweepError> {
    spec.validate()?;

    info!("▶️  开始容量扫描");
    for step in 0..spec.count {
        let value = spec.value_at(step);
        let capacity = LinkRate::from_kbps(value);
        info!(step, capacity = %capacity, "运行仿真");

        let result = adapter
            .execute(capacity)
            .map_err(|source| SweepError::Simulation {
                step,
                capacity,
                source,
            })?;

        debug!(step, throughputs = ?result.throughputs(), "记录运行结果");
        agg.record(value, &result)?;
    }

    info!(total_steps = spec.count, "✅ 扫描完成");
    Ok(())
}
