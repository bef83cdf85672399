//! 绘图数据导出
//!
//! 设计目标：
//! - **结构化**：清单是普通值类型，serde 可无损序列化
//! - **只读**：扫描结束时构建一次，之后不再修改
//! - **外部渲染**：图像文件由外部绘图工具（gnuplot）生成

mod gnuplot;
mod manifest;

pub use gnuplot::write_plt;
pub use manifest::{build_manifest, ExportOpts, PlotManifest};
