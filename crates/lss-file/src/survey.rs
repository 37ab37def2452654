//! 按路径的测量文件操作
//!
//! [`SurveyFile`] 只持有路径与解析策略。摘要、查询、导出各自独立
//! 校验扩展名、整体读入并完整解析源文件；调用之间不缓存任何解析
//! 结果，文件句柄在每条退出路径上都随作用域释放。

use std::fs;
use std::path::{Path, PathBuf};

use lss_core::dataset::SurveyDataset;
use lss_core::record::RecordPolicy;
use lss_core::summary::ZInfo;

use crate::error::FileError;
use crate::format::check_extension;
use crate::{dxf, geojson};

/// 一个测量源文件上的操作入口
#[derive(Debug, Clone)]
pub struct SurveyFile {
    path: PathBuf,
    policy: RecordPolicy,
}

impl SurveyFile {
    /// 以默认策略（首个畸形记录中止）创建
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_policy(path, RecordPolicy::default())
    }

    /// 指定畸形记录策略创建
    pub fn with_policy(path: impl Into<PathBuf>, policy: RecordPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 校验扩展名、整体读入并解析
    ///
    /// 每次调用产生全新的数据集。
    pub fn load(&self) -> Result<SurveyDataset, FileError> {
        check_extension(&self.path)?;
        let text = fs::read_to_string(&self.path)?;
        let dataset = SurveyDataset::from_text(&text, self.policy)?;

        tracing::info!(
            "Loaded {} links, {} standalone points from {}",
            dataset.links.len(),
            dataset.points.len(),
            self.path.display()
        );

        Ok(dataset)
    }

    /// 包围盒 `[min_x, min_y, max_x, max_y]`
    pub fn bounding_box(&self) -> Result<[f64; 4], FileError> {
        Ok(self.load()?.bounding_box()?)
    }

    /// 高程统计
    pub fn z_info(&self) -> Result<ZInfo, FileError> {
        Ok(self.load()?.z_info()?)
    }

    /// 去重升序的特征码集合
    pub fn feature_codes(&self) -> Result<Vec<String>, FileError> {
        Ok(self.load()?.feature_codes())
    }

    /// 指定特征码的匹配条目数
    pub fn count(&self, feature_code: &str) -> Result<usize, FileError> {
        let dataset = self.load()?;
        let count = dataset.count(feature_code);

        tracing::debug!(
            "{} entries match '{}' in {}",
            count,
            feature_code,
            self.path.display()
        );

        Ok(count)
    }

    /// 查询并导出 DXF，返回实际写出的路径
    pub fn export_dxf(&self, feature_code: &str, out: &Path) -> Result<PathBuf, FileError> {
        let dataset = self.load()?;
        let result = dataset.query(feature_code);
        let written = dxf::write_file(&result, out)?;

        tracing::info!(
            "Exported {} '{}' entries to {}",
            result.len(),
            feature_code,
            written.display()
        );

        Ok(written)
    }

    /// 查询并导出 GeoJSON，返回实际写出的路径
    pub fn export_geojson(&self, feature_code: &str, out: &Path) -> Result<PathBuf, FileError> {
        let dataset = self.load()?;
        let result = dataset.query(feature_code);
        let written = geojson::write_file(&result, out)?;

        tracing::info!(
            "Exported {} '{}' entries to {}",
            result.len(),
            feature_code,
            written.display()
        );

        Ok(written)
    }
}
