//! 链路速率类型
//!
//! 定义以 kbps 计的链路速率。`Display` 输出引擎侧约定的
//! `"<n>kbps"` 字符串（如 `"251kbps"`）。

use std::fmt;

/// 链路速率（kbps）。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct LinkRate(f64);

impl LinkRate {
    pub fn from_kbps(kbps: f64) -> LinkRate {
        LinkRate(kbps)
    }
    pub fn kbps(self) -> f64 {
        self.0
    }
    /// 换算为 Mbps。
    pub fn mbps(self) -> f64 {
        self.0 / 1_000.0
    }
}

impl fmt::Display for LinkRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}kbps", self.0)
    }
}
