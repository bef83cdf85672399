//! 仿真边界模块
//!
//! 此模块定义本实验核心与外部离散事件仿真引擎之间的接口：
//! 时间与速率类型、单次运行结果，以及仿真适配器 trait。

// 子模块声明
mod adapter;
mod rate;
mod run_result;
mod time;

// 重新导出公共接口
pub use adapter::{EngineError, SimulationAdapter};
pub use rate::LinkRate;
pub use run_result::RunResult;
pub use time::SimTime;
