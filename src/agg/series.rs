//! 数据序列类型

use serde::{Deserialize, Serialize};

/// 一个数据点：x 为扫描值（kbps），y 为吞吐量（Mbps）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

/// 一条带标题的有序点序列。点按扫描顺序追加，不重排、不去重。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    pub label: String,
    pub points: Vec<SeriesPoint>,
}
