use anyhow::Result;
use koica_monitor::{JobScanner, JsonSeenStore, MonitorConfig, RunOutcome};
use log::info;

fn run() -> Result<RunOutcome> {
    // 加载环境变量
    dotenv::dotenv().ok();

    let config = MonitorConfig::from_env()?;
    let store = JsonSeenStore::new(&config.seen_path);
    info!("已检查记录文件: {}", store.path().display());

    let scanner = JobScanner::new(config, Box::new(store))?;
    Ok(scanner.run()?)
}

fn main() {
    // 初始化日志（stdout 只留给 FOUND 标记）
    env_logger::init();

    match run() {
        Ok(outcome) => println!("{}", outcome.marker()),
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            std::process::exit(1);
        }
    }
}
