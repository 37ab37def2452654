//! 数据集摘要
//!
//! - 包围盒 `[min_x, min_y, max_x, max_y]`
//! - 高程统计（最小 / 最大 / 算术平均）
//! - 去重升序的特征码集合
//!
//! 包围盒与高程统计对零点数据集返回 [`EmptyDatasetError`]；
//! 特征码集合对空数据集返回空列表。

use std::collections::BTreeSet;

use thiserror::Error;

use crate::dataset::SurveyDataset;

/// 对零点数据集请求摘要
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no points to summarize")]
pub struct EmptyDatasetError;

/// 高程统计
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZInfo {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl SurveyDataset {
    /// 计算包围盒 `[min_x, min_y, max_x, max_y]`
    ///
    /// 单次扫描所有点（链成员与独立点）。
    pub fn bounding_box(&self) -> Result<[f64; 4], EmptyDatasetError> {
        let mut iter = self.iter_points();
        let first = iter.next().ok_or(EmptyDatasetError)?;

        let mut bbox = [first.x, first.y, first.x, first.y];
        for point in iter {
            bbox[0] = bbox[0].min(point.x);
            bbox[1] = bbox[1].min(point.y);
            bbox[2] = bbox[2].max(point.x);
            bbox[3] = bbox[3].max(point.y);
        }
        Ok(bbox)
    }

    /// 计算高程统计（最小值、最大值、算术平均）
    pub fn z_info(&self) -> Result<ZInfo, EmptyDatasetError> {
        let mut count = 0usize;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;

        for point in self.iter_points() {
            count += 1;
            min = min.min(point.z);
            max = max.max(point.z);
            sum += point.z;
        }

        if count == 0 {
            return Err(EmptyDatasetError);
        }

        Ok(ZInfo {
            min,
            max,
            average: sum / count as f64,
        })
    }

    /// 所有特征码的并集：链特征码 + 独立点特征码
    ///
    /// 升序（区分大小写的字典序）、无重复。
    pub fn feature_codes(&self) -> Vec<String> {
        let mut codes = BTreeSet::new();
        for link in &self.links {
            codes.insert(link.feature_code.clone());
        }
        for point in &self.points {
            codes.insert(point.feature_code.clone());
        }
        codes.into_iter().collect()
    }
}
