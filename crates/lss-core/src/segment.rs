//! 链分组状态机
//!
//! 将坐标记录流按文件顺序分组为独立点与有序链。
//! 每条记录按以下优先级处理：
//!
//! 1. 点标记前缀 → 独立点，当前链状态不受影响
//! 2. 链起始标记 → 收尾当前链，以剥离后的特征码开启新链
//! 3. 特征码与当前链不同（或尚无当前链）→ 收尾当前链，隐式开启新链
//! 4. 特征码与当前链相同 → 追加到当前链
//!
//! 分组状态显式封装在 [`LinkSegmenter`] 中，可逐条记录驱动并单独测试，
//! 不需要经过文件解析。

use crate::geometry::{is_link_start, is_point_code, same_code, strip_link_marker, Link, Point};

/// 链分组器
#[derive(Debug, Default)]
pub struct LinkSegmenter {
    /// 累积中的当前链
    current: Option<Link>,
    /// 已收尾的链，文件顺序
    links: Vec<Link>,
    /// 独立点，文件顺序
    points: Vec<Point>,
}

impl LinkSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一条记录
    pub fn push(&mut self, record: Point) {
        if is_point_code(&record.feature_code) {
            self.points.push(record);
            return;
        }

        if is_link_start(&record.feature_code) {
            self.finalize_current();
            let code = strip_link_marker(&record.feature_code).to_string();
            let mut link = Link::new(code.clone());
            // 开链记录本身以剥离后的特征码作为首个成员点
            link.push(Point {
                feature_code: code,
                ..record
            });
            self.current = Some(link);
            return;
        }

        let continues = match &self.current {
            Some(link) => same_code(&record.feature_code, &link.feature_code),
            None => false,
        };

        if continues {
            if let Some(link) = self.current.as_mut() {
                link.push(record);
            }
        } else {
            // 特征码变化，或流中首条无标记记录：隐式开启新链
            self.finalize_current();
            let mut link = Link::new(record.feature_code.clone());
            link.push(record);
            self.current = Some(link);
        }
    }

    /// 结束记录流，收尾仍然打开的链
    pub fn finish(mut self) -> (Vec<Link>, Vec<Point>) {
        self.finalize_current();
        (self.links, self.points)
    }

    /// 收尾当前链；零点链不进入输出序列
    fn finalize_current(&mut self) {
        if let Some(link) = self.current.take() {
            if !link.is_empty() {
                self.links.push(link);
            }
        }
    }
}
