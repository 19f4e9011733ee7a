use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 招聘公告编号（纯数字字符串）
///
/// 按数值排序：先比较去掉前导零后的长度，再比较字面值，
/// 最后用原始字符串区分 `"7"` 和 `"007"` 这类写法。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn significant(&self) -> &str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() && !self.0.is_empty() {
            "0"
        } else {
            trimmed
        }
    }
}

impl Ord for PostId {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant(), other.significant());
        a.len()
            .cmp(&b.len())
            .then_with(|| a.cmp(b))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for PostId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRef {
    pub id: PostId,
    pub url: String,
}

/// 一次运行的结果
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    /// 本轮实际打开过详情页的公告数量
    pub checked: usize,
    pub matches: Vec<PostRef>,
    /// 详情页抓取失败、留待下次重试的公告
    pub failed: Vec<PostId>,
    pub report_written: bool,
}

impl RunOutcome {
    pub fn found(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn marker(&self) -> &'static str {
        if self.found() {
            "FOUND=1"
        } else {
            "FOUND=0"
        }
    }
}
