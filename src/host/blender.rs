//! # Blender 宿主驱动
//!
//! 以子进程方式驱动 `blender --background`，每个文件一次独立调用：
//! 场景隔离由进程边界保证，单个文件卡死或崩溃不会污染后续文件。
//! 不对宿主调用施加超时。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `host/payload.rs` 生成脚本和解析输出

use crate::error::{Result, Step2GlbError};
use crate::host::{payload, Host, HostOutcome};
use crate::models::ConvertJob;

use std::path::PathBuf;
use std::process::Command;

/// 通过子进程驱动的 Blender 宿主
pub struct BlenderHost {
    /// Blender 可执行文件路径
    binary: PathBuf,
}

impl BlenderHost {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }

    fn command_name(&self) -> String {
        self.binary.display().to_string()
    }
}

impl Host for BlenderHost {
    fn version(&self) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg("--version")
            .output()
            .map_err(|_| Step2GlbError::CommandNotFound {
                command: self.command_name(),
            })?;

        if !output.status.success() {
            return Err(Step2GlbError::CommandFailed {
                command: format!("{} --version", self.command_name()),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().next().unwrap_or("unknown").to_string())
    }

    fn convert(&self, job: &ConvertJob) -> Result<HostOutcome> {
        let operator = job.format.import_operator().ok_or_else(|| {
            Step2GlbError::InvalidArgument(format!("no importer available for {} input", job.format))
        })?;

        let script = payload::build_payload(job, operator);

        let output = Command::new(&self.binary)
            .args(["--background", "--factory-startup", "--python-expr", &script])
            .output()
            .map_err(|_| Step2GlbError::CommandNotFound {
                command: self.command_name(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);

        // 状态标记优先于退出码：载荷里的失败分支都以退出码 0 结束
        if let Some(outcome) = payload::parse_host_output(&stdout) {
            return Ok(outcome);
        }

        Err(Step2GlbError::CommandFailed {
            command: self.command_name(),
            stderr: if output.status.success() {
                "host produced no status marker".to_string()
            } else {
                String::from_utf8_lossy(&output.stderr).to_string()
            },
        })
    }
}
