//! 拓扑描述模块

pub mod access_cell;
