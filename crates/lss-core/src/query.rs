//! 按特征码查询
//!
//! 查询结果是独立点或链两个互斥变体之一，绝不混合；
//! 导出器对其穷尽匹配，不存在需要运行时类型检查的"混合"分支。

use crate::dataset::SurveyDataset;
use crate::geometry::{is_point_code, same_code, Link, Point};

/// 查询结果：独立点列表或链列表
///
/// 几何归数据集独占所有，结果持有借用。
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult<'a> {
    Points(Vec<&'a Point>),
    Links(Vec<&'a Link>),
}

impl QueryResult<'_> {
    /// 结果条目数
    pub fn len(&self) -> usize {
        match self {
            QueryResult::Points(points) => points.len(),
            QueryResult::Links(links) => links.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SurveyDataset {
    /// 按特征码检索
    ///
    /// 点标记前缀的特征码检索独立点，其余检索链。
    /// 匹配为不区分大小写的精确相等（非前缀、非子串）；
    /// 无匹配返回空结果，不是错误。
    pub fn query(&self, feature_code: &str) -> QueryResult<'_> {
        if is_point_code(feature_code) {
            QueryResult::Points(
                self.points
                    .iter()
                    .filter(|point| same_code(&point.feature_code, feature_code))
                    .collect(),
            )
        } else {
            QueryResult::Links(
                self.links
                    .iter()
                    .filter(|link| same_code(&link.feature_code, feature_code))
                    .collect(),
            )
        }
    }

    /// 查询结果条目数
    pub fn count(&self, feature_code: &str) -> usize {
        self.query(feature_code).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordPolicy;

    fn sample() -> SurveyDataset {
        let text = "21,1,0.0,0.0,0.0,.ROAD\n\
                    21,2,1.0,1.0,0.0,ROAD\n\
                    21,3,2.0,2.0,0.0,.ROADSIDE\n\
                    21,4,3.0,3.0,0.0,ROADSIDE\n\
                    21,5,9.0,9.0,2.0,PBM\n";
        SurveyDataset::from_text(text, RecordPolicy::default()).unwrap()
    }

    #[test]
    fn test_query_links_case_insensitive_exact() {
        let dataset = sample();
        match dataset.query("road") {
            QueryResult::Links(links) => {
                // "road" 匹配 "ROAD"，不匹配 "ROADSIDE"
                assert_eq!(links.len(), 1);
                assert_eq!(links[0].feature_code, "ROAD");
            }
            QueryResult::Points(_) => panic!("expected links variant"),
        }
    }

    #[test]
    fn test_query_points_variant() {
        let dataset = sample();
        match dataset.query("pbm") {
            QueryResult::Points(points) => {
                assert_eq!(points.len(), 1);
                assert_eq!(points[0].id, 5);
            }
            QueryResult::Links(_) => panic!("expected points variant"),
        }
    }

    #[test]
    fn test_unmatched_query_is_empty() {
        let dataset = sample();
        let result = dataset.query("DITCH");
        assert!(result.is_empty());
        assert!(matches!(result, QueryResult::Links(_)));
    }

    #[test]
    fn test_count() {
        let dataset = sample();
        assert_eq!(dataset.count("ROAD"), 1);
        assert_eq!(dataset.count("roadside"), 1);
        assert_eq!(dataset.count("PBM"), 1);
        assert_eq!(dataset.count("DITCH"), 0);
    }
}
