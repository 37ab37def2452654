//! 测量几何定义
//!
//! 从坐标记录重建的两类几何：
//! - 独立点 (Point) — 特征码带点标记前缀的离散测点
//! - 链 (Link) — 连续同特征码记录构成的有序折线
//!
//! 特征码存储时保留原始大小写；所有比较（分组延续、查询匹配、
//! 独立点判定）均不区分大小写。

use serde::{Deserialize, Serialize};

/// 点标记前缀：特征码以 `p`/`P` 开头的记录永远是独立点，不参与链分组
pub const POINT_MARKER: char = 'p';

/// 链起始标记：特征码以 `.` 开头表示开启新链，入库前剥离
pub const LINK_MARKER: char = '.';

/// 测量点
///
/// 构造后不可变；坐标与特征码直接来自坐标记录的字段。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub feature_code: String,
}

impl Point {
    pub fn new(id: i64, x: f64, y: f64, z: f64, feature_code: impl Into<String>) -> Self {
        Self {
            id,
            x,
            y,
            z,
            feature_code: feature_code.into(),
        }
    }
}

/// 链：按文件顺序排列的同特征码折线
///
/// 链归包含它的数据集独占所有，成员点归链独占所有。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub feature_code: String,
    pub points: Vec<Point>,
}

impl Link {
    pub fn new(feature_code: impl Into<String>) -> Self {
        Self {
            feature_code: feature_code.into(),
            points: Vec::new(),
        }
    }

    /// 追加成员点（保持文件顺序）
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// 成员点数量
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// 判断特征码是否带点标记前缀（不区分大小写）
pub fn is_point_code(code: &str) -> bool {
    code.chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&POINT_MARKER))
}

/// 判断特征码是否带链起始标记
pub fn is_link_start(code: &str) -> bool {
    code.starts_with(LINK_MARKER)
}

/// 剥离链起始标记；不带标记时原样返回
pub fn strip_link_marker(code: &str) -> &str {
    code.strip_prefix(LINK_MARKER).unwrap_or(code)
}

/// 特征码相等比较：不区分大小写的精确匹配，非前缀、非子串
pub fn same_code(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
