//! 解析结果数据集

use serde::{Deserialize, Serialize};

use crate::geometry::{Link, Point};
use crate::record::{parse_record, RecordError, RecordPolicy};
use crate::segment::LinkSegmenter;

/// 一次解析得到的数据集
///
/// 每次解析产生全新的数据集；重复解析同一文件得到结构相等
/// 但彼此独立的值，调用之间不共享任何状态。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SurveyDataset {
    /// 已收尾的链，文件顺序
    pub links: Vec<Link>,
    /// 独立点，文件顺序
    pub points: Vec<Point>,
}

impl SurveyDataset {
    /// 从整段文本解析数据集
    ///
    /// 逐行经过记录解析器分类，再由链分组器重建几何。
    pub fn from_text(text: &str, policy: RecordPolicy) -> Result<Self, RecordError> {
        let mut segmenter = LinkSegmenter::new();

        for line in text.lines() {
            match parse_record(line) {
                Ok(Some(record)) => segmenter.push(record),
                Ok(None) => {}
                Err(err) => {
                    if policy == RecordPolicy::Abort {
                        return Err(err);
                    }
                }
            }
        }

        let (links, points) = segmenter.finish();
        Ok(Self { links, points })
    }

    /// 遍历所有点：先链成员（按链序），后独立点
    pub fn iter_points(&self) -> impl Iterator<Item = &Point> {
        self.links
            .iter()
            .flat_map(|link| link.points.iter())
            .chain(self.points.iter())
    }

    /// 点总数（链成员 + 独立点）
    pub fn point_count(&self) -> usize {
        self.links.iter().map(Link::len).sum::<usize>() + self.points.len()
    }

    /// 数据集是否不含任何点
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "21,1,10.0,20.0,5.0,.ROAD\n\
                          21,2,11.0,21.0,5.5,ROAD\n\
                          21,3,12.0,22.0,6.0,ROAD\n\
                          21,4,0.0,0.0,1.0,PBM\n";

    #[test]
    fn test_from_text() {
        let dataset = SurveyDataset::from_text(SAMPLE, RecordPolicy::default()).unwrap();

        assert_eq!(dataset.links.len(), 1);
        assert_eq!(dataset.links[0].feature_code, "ROAD");
        assert_eq!(dataset.links[0].len(), 3);
        assert_eq!(dataset.points.len(), 1);
        assert_eq!(dataset.points[0].feature_code, "PBM");
        assert_eq!(dataset.point_count(), 4);
    }

    #[test]
    fn test_non_record_lines_ignored() {
        let text = "header line\n21,1,0.0,0.0,0.0,PBM\n99,junk\n";
        let dataset = SurveyDataset::from_text(text, RecordPolicy::default()).unwrap();
        assert_eq!(dataset.point_count(), 1);
    }

    #[test]
    fn test_abort_policy_yields_no_partial_dataset() {
        let text = "21,1,0.0,0.0,0.0,PBM\n21,two,0.0,0.0,0.0,PBM\n";
        let result = SurveyDataset::from_text(text, RecordPolicy::Abort);
        assert!(result.is_err());
    }

    #[test]
    fn test_skip_policy_continues() {
        let text = "21,1,0.0,0.0,0.0,PBM\n21,two,0.0,0.0,0.0,PBM\n21,3,1.0,1.0,1.0,PBM\n";
        let dataset = SurveyDataset::from_text(text, RecordPolicy::Skip).unwrap();
        let ids: Vec<i64> = dataset.points.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_iter_points_order() {
        let dataset = SurveyDataset::from_text(SAMPLE, RecordPolicy::default()).unwrap();
        let ids: Vec<i64> = dataset.iter_points().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reparse_is_structurally_equal() {
        let a = SurveyDataset::from_text(SAMPLE, RecordPolicy::default()).unwrap();
        let b = SurveyDataset::from_text(SAMPLE, RecordPolicy::default()).unwrap();
        assert_eq!(a, b);
    }
}
