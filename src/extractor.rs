//! Listing-page identifier extraction.
//!
//! The listing page is treated as an opaque text stream: every match of the
//! identifier pattern counts, wherever it sits in the markup. This survives
//! layout changes that would break a selector-based parser, at the cost of
//! picking up ids from unrelated links if the site ever reuses the parameter.

use crate::config::{MonitorConfig, ID_PLACEHOLDER};
use crate::error::{MonitorError, Result};
use crate::types::{PostId, PostRef};
use log::debug;
use regex::Regex;
use std::collections::BTreeSet;

pub struct PostExtractor {
    pattern: Regex,
    detail_url_template: String,
    max_candidates: usize,
}

impl PostExtractor {
    pub fn new(
        id_pattern: &str,
        detail_url_template: impl Into<String>,
        max_candidates: usize,
    ) -> Result<Self> {
        let pattern = Regex::new(id_pattern)
            .map_err(|e| MonitorError::Config(format!("无效的编号正则 {}: {}", id_pattern, e)))?;
        if pattern.captures_len() < 2 {
            return Err(MonitorError::Config(format!(
                "编号正则缺少捕获组: {}",
                id_pattern
            )));
        }

        Ok(Self {
            pattern,
            detail_url_template: detail_url_template.into(),
            max_candidates,
        })
    }

    pub fn from_config(config: &MonitorConfig) -> Result<Self> {
        Self::new(
            &config.id_pattern,
            config.detail_url_template.clone(),
            config.max_candidates,
        )
    }

    /// Unique ids, newest (largest) first, capped at `max_candidates`.
    ///
    /// A page with no ids yields an empty list rather than an error.
    pub fn extract(&self, html: &str) -> Vec<PostRef> {
        let ids: BTreeSet<PostId> = self
            .pattern
            .captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .map(|m| PostId::new(m.as_str()))
            .collect();

        debug!("列表页共提取到 {} 个不重复编号", ids.len());

        ids.into_iter()
            .rev()
            .take(self.max_candidates)
            .map(|id| PostRef {
                url: self.detail_url(&id),
                id,
            })
            .collect()
    }

    pub fn detail_url(&self, id: &PostId) -> String {
        self.detail_url_template.replace(ID_PLACEHOLDER, id.as_str())
    }
}
