//! 绘图清单
//!
//! 三条带标题的有序点序列加全局坐标轴元数据，交给外部绘图工具
//! 消费的值类型。

use crate::agg::{DataSeries, SeriesPoint};
use crate::sweep::SweepSpec;
use crate::traffic::FlowId;
use serde::{Deserialize, Serialize};

/// 一次完整扫描的绘图清单。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotManifest {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// x 轴范围 (min, max)，取自扫描定义而非数据极值
    pub x_range: (f64, f64),
    /// 恰好三条序列，顺序与整个实验采用的流顺序一致
    pub series: Vec<DataSeries>,
}

/// 导出选项：序列标题与坐标轴文案。调用方给定的静态字符串，
/// 不做截断或本地化。
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOpts {
    pub labels: [String; 3],
    pub x_label: String,
    pub y_label: String,
    pub title: String,
}

impl Default for ExportOpts {
    fn default() -> Self {
        Self {
            labels: FlowId::ORDER.map(|f| f.label().to_string()),
            x_label: "Datarate (kbps)".to_string(),
            y_label: "Throughput (Mbps)".to_string(),
            title: "Throughput vs. datarate".to_string(),
        }
    }
}

/// 从聚合器快照构建绘图清单。
///
/// 序列按传入顺序（即 [`FlowId::ORDER`]）输出，x 轴范围按
/// [`SweepSpec::x_range`] 的开上界口径计算。
pub fn build_manifest(
    spec: &SweepSpec,
    snapshot: [&[SeriesPoint]; 3],
    opts: &ExportOpts,
) -> PlotManifest {
    let series = opts
        .labels
        .iter()
        .zip(snapshot)
        .map(|(label, points)| DataSeries {
            label: label.clone(),
            points: points.to_vec(),
        })
        .collect();

    PlotManifest {
        title: opts.title.clone(),
        x_label: opts.x_label.clone(),
        y_label: opts.y_label.clone(),
        x_range: spec.x_range(),
        series,
    }
}
