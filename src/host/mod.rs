//! # 宿主程序模块
//!
//! 实际的导入/导出能力由外部 3D 宿主程序（Blender）提供，本工具
//! 只负责驱动它。`Host` trait 是这条边界：生产实现为
//! `BlenderHost`（子进程驱动），测试中可注入假实现。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 子模块: blender, payload

pub mod blender;
pub mod payload;

pub use blender::BlenderHost;

use crate::error::Result;
use crate::models::ConvertJob;

/// 宿主程序对单个文件转换的结果
///
/// 与整体错误类型区分：这里的每个变体都是"宿主正常运行完毕、
/// 该文件的转换有了结论"，宿主本身异常（启动失败、崩溃）才走 Err。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOutcome {
    /// 导入、校验、导出全部成功
    Converted,
    /// 导入算子报错
    ImportFailed(String),
    /// 导入后场景中没有任何对象
    EmptyScene,
    /// 导出算子报错
    ExportFailed(String),
}

/// 宿主程序抽象
pub trait Host {
    /// 探测宿主可用性，返回版本描述
    ///
    /// 批量开始前调用一次，宿主缺失时报一个明确的错误，
    /// 而不是每个文件重复失败一遍。
    fn version(&self) -> Result<String>;

    /// 在宿主中执行一次 清场 -> 导入 -> 校验 -> 导出 序列
    fn convert(&self, job: &ConvertJob) -> Result<HostOutcome>;
}
