//! LSS 文件格式处理
//!
//! 支持：
//! - `.001`-`.009` 旧式测量交换格式载入
//! - DXF 导出（最小化两段文本）
//! - GeoJSON 导出（FeatureCollection）

pub mod dxf;
pub mod error;
pub mod format;
pub mod geojson;
pub mod survey;

pub use error::FileError;
pub use survey::SurveyFile;

pub use dxf::DxfWriter;
