//! 结果聚合模块
//!
//! 将每个扫描步的逐流吞吐量累积成三条按扫描顺序排列的点序列。

mod aggregator;
mod series;

pub use aggregator::ResultAggregator;
pub use series::{DataSeries, SeriesPoint};
