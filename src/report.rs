use crate::error::{MonitorError, Result};
use crate::types::PostRef;
use log::info;
use std::fs;
use std::path::Path;

/// 生成 issue 正文：标题行、空行、每个匹配一条 markdown 列表项
pub fn render(title: &str, matches: &[PostRef]) -> String {
    let mut body = String::new();
    body.push_str(title.trim());
    body.push_str("\n\n");
    for post in matches {
        body.push_str("- ");
        body.push_str(&post.url);
        body.push('\n');
    }
    body
}

pub fn write_report(path: &Path, title: &str, matches: &[PostRef]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| MonitorError::io(parent, e))?;
        }
    }

    fs::write(path, render(title, matches)).map_err(|e| MonitorError::io(path, e))?;
    info!("已写入报告 {} ({} 条匹配)", path.display(), matches.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PostId;
    use tempfile::TempDir;

    fn post(id: &str) -> PostRef {
        PostRef {
            id: PostId::from(id),
            url: format!("https://job.example/detail?sn={}", id),
        }
    }

    #[test]
    fn renders_header_and_bullets() {
        let body = render("새 공고", &[post("9"), post("5")]);
        assert_eq!(
            body,
            "새 공고\n\n- https://job.example/detail?sn=9\n- https://job.example/detail?sn=5\n"
        );
    }

    #[test]
    fn writes_utf8_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("issue_body.md");

        write_report(&path, "KOICA 채용 공고", &[post("1")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("KOICA 채용 공고\n"));
        assert!(content.contains("- https://job.example/detail?sn=1"));
    }
}
