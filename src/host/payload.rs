//! # 宿主脚本载荷
//!
//! 生成交给 `blender --python-expr` 执行的 Python 脚本，并解析其
//! 标准输出中的状态标记。
//!
//! 载荷固定执行四步：清场（全选 + 删除，Blender 默认场景并不为空）、
//! 按嗅探结果调用唯一的导入算子、校验导入后选中对象非空、调用 glTF
//! 导出算子。每一步的结论以一条 `@@step2glb:<status>:<detail>` 标记
//! 打印，Rust 侧据此还原类型化结果。宿主的 stdout 充斥着自身日志，
//! 不带标记就无从区分失败类别。
//!
//! ## 依赖关系
//! - 被 `host/blender.rs` 调用
//! - 使用 `regex` 解析状态标记

use crate::host::HostOutcome;
use crate::models::ConvertJob;

use regex::Regex;
use std::path::Path;

/// 状态标记前缀
pub const MARKER_PREFIX: &str = "@@step2glb:";

/// 转义为 Python 单引号字符串字面量
fn py_str(path: &Path) -> String {
    let s = path.display().to_string();
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// 生成单文件转换载荷
///
/// `operator` 是嗅探结果选定的导入算子（如 `bpy.ops.import_mesh.stl`）。
pub fn build_payload(job: &ConvertJob, operator: &str) -> String {
    let source = py_str(&job.source);
    let dest = py_str(&job.dest);
    let materials = if job.export.materials {
        "'EXPORT'"
    } else {
        "'NONE'"
    };
    let colors = py_bool(job.export.vertex_colors);
    let normals = py_bool(job.export.normals);
    let texcoords = py_bool(job.export.texcoords);

    format!(
        r#"import bpy
import sys

bpy.ops.object.select_all(action='SELECT')
bpy.ops.object.delete()

try:
    {operator}(filepath={source})
except Exception as e:
    print('{prefix}import-failed:' + str(e).replace('\n', ' '))
    sys.exit(0)

bpy.ops.object.select_all(action='SELECT')
if not bpy.context.selected_objects:
    print('{prefix}empty-scene:')
    sys.exit(0)

try:
    bpy.ops.export_scene.gltf(
        filepath={dest},
        export_format='GLB',
        use_selection=True,
        export_materials={materials},
        export_colors={colors},
        export_normals={normals},
        export_texcoords={texcoords},
    )
except Exception as e:
    print('{prefix}export-failed:' + str(e).replace('\n', ' '))
    sys.exit(0)

print('{prefix}ok:')
"#,
        prefix = MARKER_PREFIX,
    )
}

fn py_bool(v: bool) -> &'static str {
    if v {
        "True"
    } else {
        "False"
    }
}

/// 从宿主 stdout 中解析状态标记
///
/// 没有任何标记（宿主崩溃、载荷没跑完）时返回 None。
pub fn parse_host_output(stdout: &str) -> Option<HostOutcome> {
    let marker =
        Regex::new(r"(?m)^@@step2glb:(ok|import-failed|empty-scene|export-failed):(.*)$").unwrap();

    let caps = marker.captures(stdout)?;
    let detail = caps[2].trim().to_string();

    match &caps[1] {
        "ok" => Some(HostOutcome::Converted),
        "import-failed" => Some(HostOutcome::ImportFailed(detail)),
        "empty-scene" => Some(HostOutcome::EmptyScene),
        "export-failed" => Some(HostOutcome::ExportFailed(detail)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExportOptions, InputFormat};
    use std::path::PathBuf;

    fn sample_job() -> ConvertJob {
        ConvertJob {
            source: PathBuf::from("/in/My Part_01.stp"),
            dest: PathBuf::from("/out/my-part-01.glb"),
            format: InputFormat::Stl,
            export: ExportOptions::default(),
        }
    }

    #[test]
    fn test_build_payload_contains_operator_and_paths() {
        let payload = build_payload(&sample_job(), "bpy.ops.import_mesh.stl");
        assert!(payload.contains("bpy.ops.import_mesh.stl(filepath='/in/My Part_01.stp')"));
        assert!(payload.contains("filepath='/out/my-part-01.glb'"));
        assert!(payload.contains("export_format='GLB'"));
        assert!(payload.contains("use_selection=True"));
    }

    #[test]
    fn test_build_payload_clears_scene_before_import() {
        let payload = build_payload(&sample_job(), "bpy.ops.import_mesh.stl");
        let clear = payload.find("bpy.ops.object.delete()").unwrap();
        let import = payload.find("import_mesh.stl").unwrap();
        assert!(clear < import);
    }

    #[test]
    fn test_build_payload_export_flags() {
        let mut job = sample_job();
        job.export.materials = false;
        job.export.vertex_colors = false;
        let payload = build_payload(&job, "bpy.ops.import_mesh.stl");
        assert!(payload.contains("export_materials='NONE'"));
        assert!(payload.contains("export_colors=False"));
        assert!(payload.contains("export_normals=True"));
    }

    #[test]
    fn test_py_str_escaping() {
        assert_eq!(
            py_str(Path::new("/in/it's here.stp")),
            r"'/in/it\'s here.stp'"
        );
    }

    #[test]
    fn test_parse_ok() {
        let stdout = "Blender 4.0.2\nRead blend: ...\n@@step2glb:ok:\nBlender quit\n";
        assert_eq!(parse_host_output(stdout), Some(HostOutcome::Converted));
    }

    #[test]
    fn test_parse_import_failed_with_detail() {
        let stdout = "@@step2glb:import-failed:No module named 'io_mesh_stl'\n";
        assert_eq!(
            parse_host_output(stdout),
            Some(HostOutcome::ImportFailed(
                "No module named 'io_mesh_stl'".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_empty_scene() {
        assert_eq!(
            parse_host_output("@@step2glb:empty-scene:\n"),
            Some(HostOutcome::EmptyScene)
        );
    }

    #[test]
    fn test_parse_export_failed() {
        assert_eq!(
            parse_host_output("noise\n@@step2glb:export-failed:Permission denied\n"),
            Some(HostOutcome::ExportFailed("Permission denied".to_string()))
        );
    }

    #[test]
    fn test_parse_no_marker() {
        assert_eq!(parse_host_output("Blender quit unexpectedly\n"), None);
    }
}
