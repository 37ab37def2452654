//! GeoJSON 导出
//!
//! 查询结果序列化为 FeatureCollection：
//! - 点变体：每点一个 Point 要素，2D 坐标，属性 `{elevation, feature_code}`
//! - 链变体：顶点数 ≥ 2 的链各产生一个 LineString 要素，
//!   属性中 `elevation` 为逐顶点高程列表；不足 2 点的链静默排除（非错误）
//!
//! 输出带稳定缩进，便于人工检查与版本对比。

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::Serialize;

use lss_core::geometry::{Link, Point};
use lss_core::query::QueryResult;

use crate::error::FileError;
use crate::format::{normalize_extension, GEOJSON_EXTENSION};

/// LineString 要素要求的最少顶点数
const MIN_LINE_VERTICES: usize = 2;

/// GeoJSON 要素集合
#[derive(Debug, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<Feature>,
}

impl FeatureCollection {
    /// 集合内要素数量
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[derive(Debug, Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: Geometry,
    properties: Properties,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
}

#[derive(Debug, Serialize)]
struct Properties {
    elevation: Elevation,
    feature_code: String,
}

/// 点要素的单一高程，或线要素的逐顶点高程列表
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Elevation {
    Single(f64),
    PerVertex(Vec<f64>),
}

fn point_feature(point: &Point) -> Feature {
    Feature {
        kind: "Feature",
        geometry: Geometry::Point {
            coordinates: [point.x, point.y],
        },
        properties: Properties {
            elevation: Elevation::Single(point.z),
            feature_code: point.feature_code.clone(),
        },
    }
}

fn line_feature(link: &Link) -> Feature {
    Feature {
        kind: "Feature",
        geometry: Geometry::LineString {
            coordinates: link.points.iter().map(|p| [p.x, p.y]).collect(),
        },
        properties: Properties {
            elevation: Elevation::PerVertex(link.points.iter().map(|p| p.z).collect()),
            feature_code: link.feature_code.clone(),
        },
    }
}

/// 将查询结果组装为要素集合
pub fn collection(result: &QueryResult<'_>) -> FeatureCollection {
    let features = match result {
        QueryResult::Points(points) => points.iter().map(|point| point_feature(point)).collect(),
        QueryResult::Links(links) => links
            .iter()
            .filter(|link| link.len() >= MIN_LINE_VERTICES)
            .map(|link| line_feature(link))
            .collect(),
    };

    FeatureCollection {
        kind: "FeatureCollection",
        features,
    }
}

/// 写出 GeoJSON 文件，返回规范化后的输出路径
pub fn write_file(result: &QueryResult<'_>, out: &Path) -> Result<PathBuf, FileError> {
    let out = normalize_extension(out, GEOJSON_EXTENSION);
    let file = File::create(&out)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &collection(result))?;

    Ok(out)
}
