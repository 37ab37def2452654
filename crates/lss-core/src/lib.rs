//! LSS 核心数据模型
//!
//! 将旧式行式测量交换格式重建为类型化几何，并在其上提供摘要与检索：
//!
//! - `record`: 坐标记录解析（`21` 行 → 测量点）
//! - `segment`: 链分组状态机（记录流 → 独立点 + 有序链）
//! - `dataset`: 一次解析的结果集
//! - `summary`: 包围盒、高程统计、特征码集合
//! - `query`: 按特征码检索的互斥双变体结果
//!
//! # 示例
//!
//! ```rust
//! use lss_core::prelude::*;
//!
//! let text = "21,1,10.0,20.0,5.0,.ROAD\n21,2,11.0,21.0,5.5,ROAD";
//! let dataset = SurveyDataset::from_text(text, RecordPolicy::default()).unwrap();
//!
//! assert_eq!(dataset.links.len(), 1);
//! assert_eq!(dataset.links[0].feature_code, "ROAD");
//! ```

pub mod dataset;
pub mod geometry;
pub mod query;
pub mod record;
pub mod segment;
pub mod summary;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::dataset::SurveyDataset;
    pub use crate::geometry::{Link, Point};
    pub use crate::query::QueryResult;
    pub use crate::record::{RecordError, RecordPolicy};
    pub use crate::segment::LinkSegmenter;
    pub use crate::summary::{EmptyDatasetError, ZInfo};
}
