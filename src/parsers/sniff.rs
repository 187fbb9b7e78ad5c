//! # 内容嗅探
//!
//! 读取文件头部并判定实际格式。嗅探结果决定唯一的导入算子，
//! 不做逐个导入器试错；无法识别时返回类型化的 `UnsupportedFormat`
//! 错误。
//!
//! 名义上带 STEP 扩展名的文件，内容可能实际是 STL 或 OBJ（CAD 软件
//! 导出时的常见错配）。这类文件按真实内容派发，才有转换成功的可能。
//!
//! ## 识别规则
//! - `ISO-10303-21` 文件头 -> STEP
//! - `solid` 开头的 ASCII，或 84 字节头 + 三角面计数与文件长度吻合的
//!   二进制 -> STL
//! - `v `/`f `/`mtllib ` 等语句行 -> OBJ
//! - 内容无法判定时回退到扩展名
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/scan.rs` 调用
//! - 使用 `models/job.rs` 的 InputFormat

use crate::error::{Result, Step2GlbError};
use crate::models::InputFormat;

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 嗅探读取的头部字节数
const SNIFF_LEN: usize = 8192;

/// 二进制 STL 的固定头部长度（80 字节注释 + 4 字节三角面计数）
const STL_BIN_HEADER: u64 = 84;

/// 每个二进制 STL 三角面的字节数
const STL_BIN_FACET: u64 = 50;

/// 识别文件格式
pub fn detect_format(path: &Path) -> Result<InputFormat> {
    let mut file = File::open(path).map_err(|e| Step2GlbError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let file_len = file
        .metadata()
        .map_err(|e| Step2GlbError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?
        .len();

    let mut prefix = vec![0u8; SNIFF_LEN];
    let n = file
        .read(&mut prefix)
        .map_err(|e| Step2GlbError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
    prefix.truncate(n);

    if let Some(format) = sniff_bytes(&prefix, file_len) {
        return Ok(format);
    }

    // 内容判定不出来时回退到扩展名
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "stl" => Ok(InputFormat::Stl),
        "obj" => Ok(InputFormat::Obj),
        "stp" | "step" => Ok(InputFormat::Step),
        _ => Err(Step2GlbError::UnsupportedFormat {
            path: path.display().to_string(),
            reason: "content matches no known format and extension is unrecognized".to_string(),
        }),
    }
}

/// 基于头部字节判定格式
pub fn sniff_bytes(prefix: &[u8], file_len: u64) -> Option<InputFormat> {
    let text = String::from_utf8_lossy(prefix);
    let trimmed = text.trim_start();

    // STEP 交换文件必须以 ISO-10303-21 头开始
    if trimmed.starts_with("ISO-10303-21") {
        return Some(InputFormat::Step);
    }

    // ASCII STL
    if trimmed.starts_with("solid") {
        return Some(InputFormat::Stl);
    }

    // 二进制 STL：三角面计数与文件长度吻合
    if prefix.len() >= STL_BIN_HEADER as usize {
        let count = u32::from_le_bytes([prefix[80], prefix[81], prefix[82], prefix[83]]) as u64;
        if file_len == STL_BIN_HEADER + count * STL_BIN_FACET {
            return Some(InputFormat::Stl);
        }
    }

    // OBJ：第一条非注释语句是 OBJ 关键字
    for line in text.lines() {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        const OBJ_KEYWORDS: &[&str] = &[
            "v ", "vn ", "vt ", "f ", "o ", "g ", "s ", "mtllib ", "usemtl ",
        ];
        if OBJ_KEYWORDS.iter().any(|k| line.starts_with(k)) {
            return Some(InputFormat::Obj);
        }
        break;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_step() {
        let data = b"ISO-10303-21;\nHEADER;\nFILE_DESCRIPTION(('part'),'2;1');\n";
        assert_eq!(sniff_bytes(data, data.len() as u64), Some(InputFormat::Step));
    }

    #[test]
    fn test_sniff_step_leading_whitespace() {
        let data = b"\n  ISO-10303-21;\nHEADER;\n";
        assert_eq!(sniff_bytes(data, data.len() as u64), Some(InputFormat::Step));
    }

    #[test]
    fn test_sniff_ascii_stl() {
        let data = b"solid cube\n  facet normal 0 0 1\n    outer loop\n";
        assert_eq!(sniff_bytes(data, data.len() as u64), Some(InputFormat::Stl));
    }

    #[test]
    fn test_sniff_binary_stl() {
        // 80 字节头 + 计数 1 + 一个 50 字节三角面
        let mut data = vec![0u8; 84 + 50];
        data[80..84].copy_from_slice(&1u32.to_le_bytes());
        assert_eq!(sniff_bytes(&data, data.len() as u64), Some(InputFormat::Stl));
    }

    #[test]
    fn test_sniff_binary_stl_length_mismatch() {
        // 计数声称 7 个三角面但长度对不上，不能判为 STL
        let mut data = vec![0u8; 84 + 50];
        data[80..84].copy_from_slice(&7u32.to_le_bytes());
        assert_eq!(sniff_bytes(&data, data.len() as u64), None);
    }

    #[test]
    fn test_sniff_obj() {
        let data = b"# exported\nmtllib part.mtl\nv 0.0 0.0 0.0\nv 1.0 0.0 0.0\n";
        assert_eq!(sniff_bytes(data, data.len() as u64), Some(InputFormat::Obj));
    }

    #[test]
    fn test_sniff_unknown() {
        let data = b"PK\x03\x04 definitely not a mesh";
        assert_eq!(sniff_bytes(data, data.len() as u64), None);
    }

    #[test]
    fn test_detect_format_extension_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weird.step");
        std::fs::write(&path, b"garbage that matches nothing").unwrap();
        // 扩展名声称 STEP，内容判不出来 -> 按 STEP 对待
        assert_eq!(detect_format(&path).unwrap(), InputFormat::Step);
    }

    #[test]
    fn test_detect_format_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        std::fs::write(&path, b"garbage that matches nothing").unwrap();
        assert!(matches!(
            detect_format(&path),
            Err(Step2GlbError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_detect_format_content_wins_over_extension() {
        // 名义上是 .stp，实际内容是 ASCII STL，按内容派发
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("KLIMP 4.stp");
        std::fs::write(&path, b"solid klimp\n  facet normal 0 0 1\n").unwrap();
        assert_eq!(detect_format(&path).unwrap(), InputFormat::Stl);
    }
}
