//! # 格式识别模块
//!
//! 在调用宿主程序之前识别输入文件的实际格式。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: sniff

pub mod sniff;

pub use sniff::detect_format;
