use crate::config::MonitorConfig;
use crate::error::Result;
use crate::extractor::PostExtractor;
use crate::fetcher::PageFetcher;
use crate::matcher::KeywordMatcher;
use crate::report;
use crate::storage::SeenStore;
use crate::types::RunOutcome;
use log::{debug, info, warn};

/// 单次运行的扫描流程：抓取列表 → 提取编号 → 逐个检查详情页 → 保存已检查集合 → 输出报告
pub struct JobScanner {
    config: MonitorConfig,
    fetcher: PageFetcher,
    extractor: PostExtractor,
    matcher: KeywordMatcher,
    store: Box<dyn SeenStore>,
}

impl JobScanner {
    pub fn new(config: MonitorConfig, store: Box<dyn SeenStore>) -> Result<Self> {
        config.validate()?;

        let fetcher = PageFetcher::new(&config)?;
        let extractor = PostExtractor::from_config(&config)?;
        let matcher = KeywordMatcher::new(&config.keywords);

        Ok(Self {
            config,
            fetcher,
            extractor,
            matcher,
            store,
        })
    }

    pub fn run(&self) -> Result<RunOutcome> {
        info!("抓取列表页: {}", self.config.listing_url);
        // 列表页失败直接中止，已检查集合保持不变
        let html = self.fetcher.fetch_html(&self.config.listing_url)?;

        let posts = self.extractor.extract(&html);
        if posts.is_empty() {
            warn!("列表页未找到任何公告编号，页面结构可能已变化");
        } else {
            info!("提取到 {} 个候选公告", posts.len());
        }

        let mut seen = self.store.load()?;
        let mut outcome = RunOutcome::default();

        for post in posts.iter().take(self.config.max_checked_per_run) {
            if seen.contains(&post.id) {
                continue;
            }

            let detail = match self.fetcher.fetch_html(&post.url) {
                Ok(detail) => detail,
                Err(e) => {
                    // 不标记为已检查，下次运行时重试
                    warn!("详情页抓取失败 [{}]: {}", post.id, e);
                    outcome.failed.push(post.id.clone());
                    continue;
                }
            };
            outcome.checked += 1;

            let hits = self.matcher.matched_keywords(&detail);
            if hits.is_empty() {
                debug!("未命中关键词 [{}]", post.id);
            } else {
                info!("命中关键词 [{}] {:?}: {}", post.id, hits, post.url);
                outcome.matches.push(post.clone());
            }

            seen.insert(post.id.clone());
        }

        self.store.save(&seen)?;
        info!(
            "本轮检查 {} 个公告，新匹配 {} 个，失败 {} 个，累计已检查 {} 个",
            outcome.checked,
            outcome.matches.len(),
            outcome.failed.len(),
            seen.len()
        );

        if outcome.found() {
            report::write_report(
                &self.config.report_path,
                &self.config.report_title,
                &outcome.matches,
            )?;
            outcome.report_written = true;
        }

        Ok(outcome)
    }
}
