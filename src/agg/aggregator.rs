//! 结果聚合器
//!
//! 每个扫描步追加一个点到三条序列的同一下标上。聚合器只负责
//! 按记录顺序累积；扫描值单调递增是调用方（扫描控制器）的性质，
//! 这里不做强制，重复值也按到达顺序保留。

use super::SeriesPoint;
use crate::sim::RunResult;
use crate::sweep::SweepError;
use crate::traffic::FlowId;

/// 逐流点序列聚合器。一次实验构造一个，逐步追加，结束时读取。
#[derive(Debug, Default)]
pub struct ResultAggregator {
    points: [Vec<SeriesPoint>; 3],
}

impl ResultAggregator {
    /// 记录一个扫描步。三个吞吐量全部校验通过之前不追加任何点，
    /// 任何非有限或负值都按 [`SweepError::MalformedThroughput`] 拒绝。
    pub fn record(&mut self, value: f64, result: &RunResult) -> Result<(), SweepError> {
        let step = self.points[0].len();
        for flow in FlowId::ORDER {
            let y = result.throughput_mbps(flow);
            if !y.is_finite() || y < 0.0 {
                return Err(SweepError::MalformedThroughput {
                    step,
                    flow,
                    value: y,
                });
            }
        }
        for flow in FlowId::ORDER {
            self.points[flow.index()].push(SeriesPoint {
                x: value,
                y: result.throughput_mbps(flow),
            });
        }
        Ok(())
    }

    /// 已记录的扫描步数。
    pub fn len(&self) -> usize {
        self.points[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 按记录顺序返回三条点序列，下标与 [`FlowId::ORDER`] 对齐。
    pub fn snapshot(&self) -> [&[SeriesPoint]; 3] {
        [&self.points[0], &self.points[1], &self.points[2]]
    }
}
