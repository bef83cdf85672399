//! 固定三流流量计划
//!
//! 两条上行（1000kb/s、500kb/s）加一条下行（1000kb/s），
//! 全部在 1s 启动、10s 停止。吞吐量统一按 [`OBSERVATION_WINDOW`]
//! 的固定窗口换算。

use crate::sim::{LinkRate, SimTime};

/// 吞吐量换算用的固定观测窗口（9 秒），与各流实际活跃区间无关。
pub const OBSERVATION_WINDOW: SimTime = SimTime(9_000_000_000);

/// 流标识。三条流的集合与顺序在整个实验中固定不变。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowId {
    /// 1000kb/s 上行（站点 0 -> 远端路由器）
    UpHeavy,
    /// 500kb/s 上行（站点 1 -> 远端路由器）
    UpLight,
    /// 1000kb/s 下行（远端路由器 -> 站点 2）
    Down,
}

impl FlowId {
    /// 全局流顺序。RunResult 三元组与各数据序列的下标均按此排列。
    pub const ORDER: [FlowId; 3] = [FlowId::UpHeavy, FlowId::UpLight, FlowId::Down];

    pub fn index(self) -> usize {
        match self {
            FlowId::UpHeavy => 0,
            FlowId::UpLight => 1,
            FlowId::Down => 2,
        }
    }

    /// 图例中使用的默认序列标题。
    pub fn label(self) -> &'static str {
        match self {
            FlowId::UpHeavy => "1000kb/s up",
            FlowId::UpLight => "500kb/s up",
            FlowId::Down => "1000kb/s down",
        }
    }
}

/// 流端点角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// 无线蜂窝内的第 i 个站点
    Station(usize),
    /// 有线链路另一端的远端路由器
    RemoteRouter,
}

/// 一条恒定速率流的静态描述。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficFlow {
    pub id: FlowId,
    pub source: NodeRole,
    pub destination: NodeRole,
    pub rate: LinkRate,
    pub start: SimTime,
    pub stop: SimTime,
}

/// 固定流量计划，下标与 [`FlowId::ORDER`] 对齐。
pub fn traffic_plan() -> [TrafficFlow; 3] {
    let start = SimTime::from_secs(1);
    let stop = SimTime::from_secs(10);
    [
        TrafficFlow {
            id: FlowId::UpHeavy,
            source: NodeRole::Station(0),
            destination: NodeRole::RemoteRouter,
            rate: LinkRate::from_kbps(1_000.0),
            start,
            stop,
        },
        TrafficFlow {
            id: FlowId::UpLight,
            source: NodeRole::Station(1),
            destination: NodeRole::RemoteRouter,
            rate: LinkRate::from_kbps(500.0),
            start,
            stop,
        },
        TrafficFlow {
            id: FlowId::Down,
            source: NodeRole::RemoteRouter,
            destination: NodeRole::Station(2),
            rate: LinkRate::from_kbps(1_000.0),
            start,
            stop,
        },
    ]
}
