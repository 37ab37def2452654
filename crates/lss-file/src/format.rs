//! 载入格式校验与输出路径规范化
//!
//! 旧式载入格式使用九个编号扩展名 `.001`-`.009`，对应顺序图层；
//! 扩展名不符时在读取文件之前报错。

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::FileError;

/// DXF 输出的规范扩展名
pub const DXF_EXTENSION: &str = "dxf";

/// GeoJSON 输出的规范扩展名
pub const GEOJSON_EXTENSION: &str = "geojson";

/// 校验载入文件扩展名（`.001`-`.009`）
///
/// 在任何读取发生之前调用。
pub fn check_extension(path: &Path) -> Result<(), FileError> {
    if has_load_extension(&path.to_string_lossy()) {
        Ok(())
    } else {
        Err(FileError::UnsupportedFormat(format!(
            "{} is not a recognised load file format",
            path.display()
        )))
    }
}

/// 路径是否以 `.001`-`.009` 结尾
fn has_load_extension(name: &str) -> bool {
    let bytes = name.as_bytes();
    let n = bytes.len();
    n >= 4
        && bytes[n - 4] == b'.'
        && bytes[n - 3] == b'0'
        && bytes[n - 2] == b'0'
        && (b'1'..=b'9').contains(&bytes[n - 1])
}

/// 规范化输出路径
///
/// 已带规范扩展名（任意大小写）时统一为小写形式；
/// 否则在整个路径之后追加 `.{canonical}`。
pub fn normalize_extension(path: &Path, canonical: &str) -> PathBuf {
    let has_canonical = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(canonical));

    if has_canonical {
        path.with_extension(canonical)
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(canonical);
        PathBuf::from(name)
    }
}
