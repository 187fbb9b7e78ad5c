//! # 转换任务数据模型
//!
//! 定义输入格式、导出选项、批量配置和单文件任务。
//!
//! 输出文件名规则：取输入文件主干名，转小写，空格和下划线统一
//! 替换为 `-`，加 `.glb` 后缀。该变换是幂等的，但有冲突风险：
//! 仅大小写或分隔符不同的两个输入会映射到同一个输出路径，
//! 后转换者覆盖前者。这是既定行为，不做去重。
//!
//! ## 依赖关系
//! - 被 `commands/`, `parsers/`, `host/` 使用

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 嗅探识别出的输入文件实际格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFormat {
    /// STEP (ISO-10303-21)，宿主程序无原生导入器
    Step,
    /// STL（ASCII 或二进制）
    Stl,
    /// Wavefront OBJ
    Obj,
}

impl InputFormat {
    /// 宿主程序中对应的导入算子标识，无导入器时返回 None
    pub fn import_operator(&self) -> Option<&'static str> {
        match self {
            InputFormat::Step => None,
            InputFormat::Stl => Some("bpy.ops.import_mesh.stl"),
            InputFormat::Obj => Some("bpy.ops.import_scene.obj"),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Step => write!(f, "STEP"),
            InputFormat::Stl => write!(f, "STL"),
            InputFormat::Obj => write!(f, "OBJ"),
        }
    }
}

/// glTF 导出特性开关
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExportOptions {
    /// 导出材质
    pub materials: bool,
    /// 导出顶点颜色
    pub vertex_colors: bool,
    /// 导出法线
    pub normals: bool,
    /// 导出纹理坐标
    pub texcoords: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            materials: true,
            vertex_colors: true,
            normals: true,
            texcoords: true,
        }
    }
}

/// 批量转换配置
///
/// 显式传入批量操作，而非散落的常量或全局状态。
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// 输入目录
    pub input_dir: PathBuf,
    /// 输出目录
    pub output_dir: PathBuf,
    /// 候选文件匹配模式（逗号分隔 glob）
    pub pattern: String,
    /// 是否递归搜索
    pub recursive: bool,
    /// 是否覆盖已存在的输出文件
    pub overwrite: bool,
    /// 导出特性开关
    pub export: ExportOptions,
}

/// 单文件转换任务
#[derive(Debug, Clone)]
pub struct ConvertJob {
    /// 源文件路径
    pub source: PathBuf,
    /// 目标文件路径
    pub dest: PathBuf,
    /// 嗅探出的实际格式
    pub format: InputFormat,
    /// 导出特性开关
    pub export: ExportOptions,
}

/// 规范化输出文件主干名：小写，空格/下划线 -> `-`
pub fn normalize_stem(stem: &str) -> String {
    stem.to_lowercase().replace([' ', '_'], "-")
}

/// 从输入路径计算输出路径
pub fn dest_path(source: &Path, output_dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("model");
    output_dir.join(format!("{}.glb", normalize_stem(stem)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_stem() {
        assert_eq!(normalize_stem("My Part_01"), "my-part-01");
        assert_eq!(normalize_stem("KLIMP 4"), "klimp-4");
        assert_eq!(normalize_stem("already-clean"), "already-clean");
    }

    #[test]
    fn test_normalize_stem_idempotent() {
        let once = normalize_stem("My Part_01");
        assert_eq!(normalize_stem(&once), once);
    }

    #[test]
    fn test_dest_path() {
        let dest = dest_path(Path::new("/in/My Part_01.stp"), Path::new("/out"));
        assert_eq!(dest, PathBuf::from("/out/my-part-01.glb"));
    }

    #[test]
    fn test_dest_path_collision() {
        // 仅分隔符/大小写不同的输入映射到同一输出，后者覆盖前者
        let a = dest_path(Path::new("/in/Part A.stp"), Path::new("/out"));
        let b = dest_path(Path::new("/in/part-a.step"), Path::new("/out"));
        assert_eq!(a, b);
        assert_eq!(a, PathBuf::from("/out/part-a.glb"));
    }
}
