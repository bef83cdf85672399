//! 接入蜂窝拓扑描述
//!
//! 拓扑结构：sta0/sta1/sta2 <-> 蜂窝路由器 <-> 远端路由器
//! 三个无线站点挂在蜂窝路由器上，蜂窝路由器经一条点对点有线
//! 链路连到远端路由器。有线链路容量是被扫描的参数，其余参数
//! 在整个实验中固定。实际建网由外部仿真引擎完成，这里只描述。

use crate::sim::{LinkRate, SimTime};

/// 接入蜂窝拓扑配置选项
#[derive(Debug, Clone, PartialEq)]
pub struct AccessCellOpts {
    pub stations: usize,
    pub wired_capacity: LinkRate,
    pub wired_delay: SimTime,
    pub run_until: SimTime,
    /// 流量目的端口（discard，RFC 863）
    pub port: u16,
}

impl Default for AccessCellOpts {
    fn default() -> Self {
        Self {
            stations: 3,
            wired_capacity: LinkRate::from_kbps(500.0),
            wired_delay: SimTime::from_millis(2),
            run_until: SimTime::from_secs(10),
            port: 9,
        }
    }
}

impl AccessCellOpts {
    /// 除有线链路容量外全部取固定默认值。
    pub fn with_capacity(capacity: LinkRate) -> AccessCellOpts {
        AccessCellOpts {
            wired_capacity: capacity,
            ..AccessCellOpts::default()
        }
    }
}
