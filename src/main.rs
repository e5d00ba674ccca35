use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error, warn};

// 从 lib.rs 导入模块
use rust_peer_eval::config::AppConfig;
use rust_peer_eval::models::{AppStartTime, EvaluationId};
use rust_peer_eval::runtime::lifetime;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();

    // 记录程序启动时间
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    // 初始化配置
    setup_panic!();
    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        return std::process::ExitCode::FAILURE;
    }
    let config = AppConfig::get();

    // 初始化日志
    let _guard = lifetime::startup::init_tracing(config);

    warn!(
        "Starting {}...
        Project: {}
        Version: {}
        Authors: {}",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let Some(raw_id) = std::env::args().nth(1) else {
        eprintln!("Usage: {} <evaluation-id>", env!("CARGO_PKG_NAME"));
        return std::process::ExitCode::FAILURE;
    };

    let id = match EvaluationId::parse(&raw_id) {
        Ok(id) => id,
        Err(e) => {
            error!("{}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    let startup = match lifetime::startup::prepare_startup().await {
        Ok(startup) => startup,
        Err(e) => {
            error!("Startup failed: {}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    // 输出预处理时间
    debug!(
        "Startup completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time.start_datetime)
            .num_milliseconds()
    );

    match startup.evaluations.activate_if_ready(id).await {
        Ok(outcome) => {
            warn!("Evaluation {}: {:?}", id, outcome);
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Evaluation {}: {}", id, e);
            std::process::ExitCode::FAILURE
        }
    }
}
