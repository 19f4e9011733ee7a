use crate::error::{MonitorError, Result};
use log::debug;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_LISTING_URL: &str =
    "https://job.koica.go.kr/application/applicationListPage.do?menuId=MENU0098";
pub const DEFAULT_DETAIL_URL_TEMPLATE: &str = "https://job.koica.go.kr/application/applicationDetailPage.do?empmnPblancSn={id}&entrpsSn=&menuId=MENU0098&pageIndex=1";
pub const DEFAULT_ID_PATTERN: &str = r"empmnPblancSn=(\d+)";
pub const DEFAULT_KEYWORDS: &[&str] = &["모집", "자동차", "전문가", "스리랑카", "직업훈련원"];
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
pub const DEFAULT_REPORT_TITLE: &str = "KOICA 채용 공고에서 키워드 매칭된 새 항목이 발견됨";

/// 详情页模板中的编号占位符
pub const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub listing_url: String,
    pub detail_url_template: String,
    /// 第一个捕获组即公告编号
    pub id_pattern: String,
    pub keywords: Vec<String>,
    pub max_candidates: usize,
    pub max_checked_per_run: usize,
    pub request_timeout: Duration,
    pub user_agent: String,
    /// 跳过 TLS 证书校验，仅在目标站点证书配置有误时手动开启
    pub accept_invalid_certs: bool,
    pub seen_path: PathBuf,
    pub report_path: PathBuf,
    pub report_title: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            detail_url_template: DEFAULT_DETAIL_URL_TEMPLATE.to_string(),
            id_pattern: DEFAULT_ID_PATTERN.to_string(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            max_candidates: 80,
            max_checked_per_run: 30,
            request_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: false,
            seen_path: PathBuf::from("seen.json"),
            report_path: PathBuf::from("issue_body.md"),
            report_title: DEFAULT_REPORT_TITLE.to_string(),
        }
    }
}

impl MonitorConfig {
    /// 从环境变量读取配置，未设置的项使用默认值
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 与 `from_env` 相同，但变量来源可替换（便于测试）
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("LISTING_URL") {
            config.listing_url = v;
        }
        if let Some(v) = lookup("DETAIL_URL_TEMPLATE") {
            config.detail_url_template = v;
        }
        if let Some(v) = lookup("ID_PATTERN") {
            config.id_pattern = v;
        }
        if let Some(v) = lookup("KEYWORDS") {
            config.keywords = parse_keywords(&v);
        }
        if let Some(v) = lookup("MAX_CANDIDATES") {
            config.max_candidates = parse_number("MAX_CANDIDATES", &v)?;
        }
        if let Some(v) = lookup("MAX_CHECKED_PER_RUN") {
            config.max_checked_per_run = parse_number("MAX_CHECKED_PER_RUN", &v)?;
        }
        if let Some(v) = lookup("REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(parse_number("REQUEST_TIMEOUT_SECS", &v)?);
        }
        if let Some(v) = lookup("USER_AGENT") {
            config.user_agent = v;
        }
        if let Some(v) = lookup("ACCEPT_INVALID_CERTS") {
            config.accept_invalid_certs = parse_bool("ACCEPT_INVALID_CERTS", &v)?;
        }
        if let Some(v) = lookup("SEEN_PATH") {
            config.seen_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("REPORT_PATH") {
            config.report_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("REPORT_TITLE") {
            config.report_title = v;
        }

        config.validate()?;
        debug!("配置加载完成: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.keywords.is_empty() {
            return Err(MonitorError::Config("关键词列表不能为空".to_string()));
        }
        if !self.detail_url_template.contains(ID_PLACEHOLDER) {
            return Err(MonitorError::Config(format!(
                "详情页模板缺少占位符 {}: {}",
                ID_PLACEHOLDER, self.detail_url_template
            )));
        }
        if self.max_candidates == 0 || self.max_checked_per_run == 0 {
            return Err(MonitorError::Config(
                "MAX_CANDIDATES 和 MAX_CHECKED_PER_RUN 必须大于 0".to_string(),
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(MonitorError::Config("请求超时必须大于 0".to_string()));
        }
        Ok(())
    }
}

fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| MonitorError::Config(format!("{} 不是有效的数字: {}", key, raw)))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(MonitorError::Config(format!("{} 不是有效的布尔值: {}", key, raw))),
    }
}
