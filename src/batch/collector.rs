//! # 文件收集器
//!
//! 根据输入路径和模式收集待转换文件列表。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - 逗号分隔的多 glob 模式
//! - 可选递归搜索
//! - 结果排序，保证运行顺序确定
//!
//! ## 依赖关系
//! - 被 `commands/` 模块调用
//! - 使用 `walkdir` 遍历目录，`glob` 做模式匹配

use crate::error::{Result, Step2GlbError};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<glob::Pattern>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器，默认匹配所有文件
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: vec![glob::Pattern::new("*").unwrap()],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let mut patterns = Vec::new();
        for part in pattern.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            patterns.push(glob::Pattern::new(part).map_err(|e| {
                Step2GlbError::InvalidArgument(format!("Invalid pattern '{}': {}", part, e))
            })?);
        }
        if !patterns.is_empty() {
            self.patterns = patterns;
        }
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件，排序后返回
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.input.is_file() {
            return vec![self.input.clone()];
        }

        if !self.input.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_patterns(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 检查文件名是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_matches_patterns() {
        let collector = FileCollector::new(PathBuf::from("."))
            .with_pattern("*.stp,*.step")
            .unwrap();

        assert!(collector.matches_patterns(Path::new("My Part_01.stp")));
        assert!(collector.matches_patterns(Path::new("bracket.step")));
        assert!(!collector.matches_patterns(Path::new("bracket.stl")));
        assert!(!collector.matches_patterns(Path::new("readme.txt")));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = FileCollector::new(PathBuf::from(".")).with_pattern("[");
        assert!(matches!(result, Err(Step2GlbError::InvalidArgument(_))));
    }

    #[test]
    fn test_collect_sorted_non_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.stp"), b"x").unwrap();
        fs::write(dir.path().join("a.step"), b"x").unwrap();
        fs::write(dir.path().join("ignore.stl"), b"x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/c.stp"), b"x").unwrap();

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("*.stp,*.step")
            .unwrap()
            .collect();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.step", "b.stp"]);
    }

    #[test]
    fn test_collect_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.stp"), b"x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/c.stp"), b"x").unwrap();

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("*.stp")
            .unwrap()
            .recursive(true)
            .collect();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_collect_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let files = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("*.stp,*.step")
            .unwrap()
            .collect();
        assert!(files.is_empty());
    }
}
