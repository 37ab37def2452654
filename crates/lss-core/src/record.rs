//! 坐标记录解析
//!
//! 旧式交换格式每行一条记录，仅以 `21` 开头的行是坐标记录：
//!
//! ```text
//! 21,<id>,<x>,<y>,<z>,<feature_code>[,...]
//! ```
//!
//! 字段以逗号分隔，允许两侧任意空白，多余的尾部字段忽略。
//! 不足 6 个字段的行不具备记录形态，按非记录行跳过；
//! 具备记录形态但数值字段非法的行构成畸形记录，
//! 由 [`RecordPolicy`] 决定中止整个解析还是跳过该行。

use thiserror::Error;

use crate::geometry::Point;

/// 坐标记录行的类型标记
const RECORD_MARKER: &str = "21";

/// 一条坐标记录至少包含的字段数
const MIN_FIELDS: usize = 6;

/// 畸形记录错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Invalid record id: {0}")]
    InvalidId(String),

    #[error("Invalid {axis} coordinate: {value}")]
    InvalidCoordinate { axis: char, value: String },
}

/// 畸形记录处理策略
///
/// 仅约束具备记录形态但数值字段非法的行；
/// 字段不足的行在两种策略下都按非记录行跳过。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordPolicy {
    /// 首个畸形记录即中止整个解析，不产生部分数据集
    #[default]
    Abort,
    /// 跳过畸形记录并继续
    Skip,
}

/// 解析一行文本
///
/// - 非 `21` 开头或字段不足的行返回 `Ok(None)`（忽略，非错误）
/// - 数值字段转换失败返回 `Err`
pub fn parse_record(line: &str) -> Result<Option<Point>, RecordError> {
    if !line.starts_with(RECORD_MARKER) {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < MIN_FIELDS {
        return Ok(None);
    }

    let id = fields[1]
        .parse::<i64>()
        .map_err(|_| RecordError::InvalidId(fields[1].to_string()))?;
    let x = parse_coordinate('x', fields[2])?;
    let y = parse_coordinate('y', fields[3])?;
    let z = parse_coordinate('z', fields[4])?;

    Ok(Some(Point::new(id, x, y, z, fields[5])))
}

fn parse_coordinate(axis: char, value: &str) -> Result<f64, RecordError> {
    value
        .parse::<f64>()
        .map_err(|_| RecordError::InvalidCoordinate {
            axis,
            value: value.to_string(),
        })
}
