//! DXF 导出
//!
//! 手写最小化 DXF 文本，仅 HEADER 与 ENTITIES 两个段。
//!
//! # 组码 (Group Code)
//!
//! 每个数据项由两行组成，第一行组码、第二行值。用到的组码：
//! - 0: 实体类型
//! - 8: 图层名（特征码）
//! - 10, 20, 30: X, Y, Z 坐标
//! - 66: 后随顶点标志
//! - 70: 实体标志位
//!
//! 点变体每点产生一个 POINT 实体；链变体每链产生一个置 3D 标志的
//! POLYLINE 实体，后随逐点 VERTEX，以 SEQEND 收尾。

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use lss_core::geometry::{Link, Point};
use lss_core::query::QueryResult;

use crate::error::FileError;
use crate::format::{normalize_extension, DXF_EXTENSION};

/// DXF 版本标识：AC1009 (R12)，POLYLINE/VERTEX/SEQEND 实体族所属的方言
const ACAD_VERSION: &str = "AC1009";

/// POLYLINE 的 3D 折线标志
const POLYLINE_3D: i32 = 8;

/// VERTEX 的 3D 折线顶点标志
const VERTEX_3D: i32 = 32;

/// DXF 写入器
pub struct DxfWriter {
    output: Vec<String>,
}

impl DxfWriter {
    pub fn new() -> Self {
        Self { output: Vec::new() }
    }

    /// 写入组码-值对
    pub fn write_pair(&mut self, code: i32, value: impl std::fmt::Display) {
        self.output.push(format!("{:>3}", code));
        self.output.push(value.to_string());
    }

    /// 写入 SECTION 开始
    pub fn begin_section(&mut self, name: &str) {
        self.write_pair(0, "SECTION");
        self.write_pair(2, name);
    }

    /// 写入 SECTION 结束
    pub fn end_section(&mut self) {
        self.write_pair(0, "ENDSEC");
    }

    /// 写入最小 HEADER 段
    fn write_header(&mut self) {
        self.begin_section("HEADER");
        self.write_pair(9, "$ACADVER");
        self.write_pair(1, ACAD_VERSION);
        self.end_section();
    }

    /// 写入 POINT 实体
    fn write_point(&mut self, point: &Point) {
        self.write_pair(0, "POINT");
        self.write_pair(8, &point.feature_code);
        self.write_pair(10, point.x);
        self.write_pair(20, point.y);
        self.write_pair(30, point.z);
    }

    /// 写入 POLYLINE 实体（含顶点与 SEQEND）
    fn write_polyline(&mut self, link: &Link) {
        self.write_pair(0, "POLYLINE");
        self.write_pair(8, &link.feature_code);
        self.write_pair(66, 1);
        self.write_pair(70, POLYLINE_3D);

        for point in &link.points {
            self.write_pair(0, "VERTEX");
            self.write_pair(8, &link.feature_code);
            self.write_pair(10, point.x);
            self.write_pair(20, point.y);
            self.write_pair(30, point.z);
            self.write_pair(70, VERTEX_3D);
        }

        self.write_pair(0, "SEQEND");
        self.write_pair(8, &link.feature_code);
    }

    /// 获取输出
    pub fn finish(mut self) -> String {
        self.write_pair(0, "EOF");
        self.output.join("\n")
    }
}

impl Default for DxfWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// 将查询结果渲染为 DXF 文本
pub fn render(result: &QueryResult<'_>) -> String {
    let mut writer = DxfWriter::new();
    writer.write_header();
    writer.begin_section("ENTITIES");

    match result {
        QueryResult::Points(points) => {
            for point in points {
                writer.write_point(point);
            }
        }
        QueryResult::Links(links) => {
            for link in links {
                writer.write_polyline(link);
            }
        }
    }

    writer.end_section();
    writer.finish()
}

/// 写出 DXF 文件，返回规范化后的输出路径
pub fn write_file(result: &QueryResult<'_>, out: &Path) -> Result<PathBuf, FileError> {
    let out = normalize_extension(out, DXF_EXTENSION);
    let content = render(result);

    let mut file = File::create(&out)?;
    file.write_all(content.as_bytes())?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lss_core::dataset::SurveyDataset;
    use lss_core::record::RecordPolicy;

    fn sample() -> SurveyDataset {
        let text = "21,1,10.0,20.0,5.0,.ROAD\n\
                    21,2,11.0,21.0,5.5,ROAD\n\
                    21,3,12.0,22.0,6.0,ROAD\n\
                    21,4,0.0,0.0,1.0,PBM\n";
        SurveyDataset::from_text(text, RecordPolicy::default()).unwrap()
    }

    fn count_lines(output: &str, value: &str) -> usize {
        output.lines().filter(|line| *line == value).count()
    }

    #[test]
    fn test_dxf_writer() {
        let mut writer = DxfWriter::new();
        writer.begin_section("HEADER");
        writer.write_pair(9, "$ACADVER");
        writer.write_pair(1, "AC1009");
        writer.end_section();

        let output = writer.finish();
        assert!(output.contains("SECTION"));
        assert!(output.contains("HEADER"));
        assert!(output.contains("AC1009"));
        assert!(output.contains("EOF"));
    }

    #[test]
    fn test_render_points() {
        let dataset = sample();
        let output = render(&dataset.query("PBM"));

        assert_eq!(count_lines(&output, "POINT"), 1);
        assert_eq!(count_lines(&output, "PBM"), 1); // 图层 = 特征码
        assert_eq!(count_lines(&output, "POLYLINE"), 0);
        assert!(output.contains("HEADER"));
        assert!(output.contains("ENTITIES"));
        assert!(output.ends_with("EOF"));
    }

    #[test]
    fn test_render_links() {
        let dataset = sample();
        let output = render(&dataset.query("road"));

        assert_eq!(count_lines(&output, "POLYLINE"), 1);
        assert_eq!(count_lines(&output, "VERTEX"), 3);
        assert_eq!(count_lines(&output, "SEQEND"), 1);
        // POLYLINE、3 个 VERTEX、SEQEND 各带图层码
        assert_eq!(count_lines(&output, "ROAD"), 5);
    }

    #[test]
    fn test_render_empty_result() {
        let dataset = sample();
        let output = render(&dataset.query("DITCH"));

        // 仅骨架：两个段、无实体
        assert_eq!(count_lines(&output, "SECTION"), 2);
        assert_eq!(count_lines(&output, "POLYLINE"), 0);
        assert_eq!(count_lines(&output, "POINT"), 0);
    }

    #[test]
    fn test_write_file() {
        let dataset = sample();
        let out = std::env::temp_dir().join("lss_dxf_export_test");

        let written = write_file(&dataset.query("ROAD"), &out).expect("Failed to write");
        assert_eq!(written.extension().unwrap(), "dxf");

        let content = std::fs::read_to_string(&written).expect("Failed to read back");
        assert!(content.contains("POLYLINE"));
        assert!(content.ends_with("EOF"));

        std::fs::remove_file(&written).ok();
    }
}
