//! 参数扫描模块
//!
//! 此模块包含扫描计划、扫描控制器与错误类型。控制器是唯一发起
//! 仿真运行的组件。

// 子模块声明
mod controller;
mod error;
mod spec;

// 重新导出公共接口
pub use controller::run_sweep;
pub use error::SweepError;
pub use spec::SweepSpec;
