//! # Storedesk Library
//!
//! Session layer for the Storedesk order and product lists.
//! The `storedesk` binary is a thin CLI over [`run`].
//!
//! ## Module Organization
//! ```text
//! storedesk_lib/
//! ├── lib.rs          ◄─── You are here (tracing setup & run)
//! ├── session.rs      ◄─── ListSession, SessionState, ListView
//! ├── config.rs       ◄─── DeskConfig (TOML + env overrides)
//! ├── download.rs     ◄─── DownloadSink: directory / memory
//! ├── notice.rs       ◄─── User-facing toast messages
//! ├── cli.rs          ◄─── Argument parsing for the binary
//! └── error.rs        ◄─── AppError for session and config failures
//! ```
//!
//! ## State Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Session per List View                            │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────┐         │
//! │  │  ListSession<Order>      │      │  ListSession<Product>    │         │
//! │  │                          │      │                          │         │
//! │  │  • Collection + version  │      │  • Collection + version  │         │
//! │  │  • Filter, page (6)      │      │  • Filter, page (7)      │         │
//! │  │  • Selection, columns    │      │  • Selection, columns    │         │
//! │  │  • Notices               │      │  • Notices               │         │
//! │  └──────────────────────────┘      └──────────────────────────┘         │
//! │                                                                         │
//! │  Sessions share nothing. SessionState wraps one in Arc<Mutex<_>> when   │
//! │  several tasks drive the same view.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod notice;
pub mod session;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use storedesk_core::Record;
use storedesk_data::{generate_orders, MockProvider, RecordProvider};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use cli::{parse_args, CliArgs, ListChoice};
pub use config::DeskConfig;
pub use download::{DirectorySink, DownloadSink, MemorySink};
pub use error::{AppError, AppResult, ErrorCode};
pub use notice::{Notice, NoticeVariant};
pub use session::{ExportScope, ListSession, ListView, LoadState, RequestOutcome, SessionState};

/// Directives used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_LOG_DIRECTIVES: &str = "info,storedesk=debug";

/// Builds the log filter from a `RUST_LOG` value.
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVES))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storedesk=trace` - Show trace for storedesk crates only
/// - Default: INFO, DEBUG for storedesk
///
/// Logs go to stderr so the JSON view on stdout stays clean.
pub fn init_tracing() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one CLI invocation.
///
/// ## Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load DeskConfig ─── file (if any) + STOREDESK_* env overrides        │
/// │  2. Mount session ───── MockProvider sleeps timing.load_ms               │
/// │  3. Apply filter, page and column arguments                             │
/// │  4. Export (optional) ─ DirectorySink at export.directory               │
/// │  5. Refresh (optional) ─ sleeps timing.refresh_ms, resets the view      │
/// │  6. Print the ListView as JSON on stdout                                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = DeskConfig::load(args.config.clone())?;
    let today = Local::now().date_naive();

    info!(list = ?args.list, "Starting storedesk");

    match args.list {
        ListChoice::Orders => {
            let provider = match args.count {
                Some(count) => MockProvider::new(generate_orders(count), config.timing.load()),
                None => MockProvider::orders(config.timing.load()),
            };
            drive(ListSession::orders(&config), &provider, &args, &config, today).await
        }
        ListChoice::Products => {
            let provider = MockProvider::products(config.timing.load());
            drive(ListSession::products(&config), &provider, &args, &config, today).await
        }
    }
}

async fn drive<R, P>(
    mut session: ListSession<R>,
    provider: &P,
    args: &CliArgs,
    config: &DeskConfig,
    today: NaiveDate,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: Record + Serialize,
    P: RecordProvider<R>,
{
    session.mount(provider).await;
    session.set_filter_state(args.filter_state(today));
    session.set_page(args.page);
    for (column, visible) in &args.columns {
        session.set_column(column, *visible);
    }

    if let Some(scope) = args.export {
        let sink = DirectorySink::new(config.export_dir());
        let dialect = args.dialect.unwrap_or(config.export.dialect);
        let outcome = session
            .export_request(scope, dialect, &sink, today, config.timing.export())
            .await?;
        debug!(?outcome, dir = ?sink.dir(), "Export request finished");
    }

    if args.refresh {
        let outcome = session.refresh(config.timing.refresh()).await;
        debug!(?outcome, "Refresh request finished");
    }

    for notice in session.take_notices() {
        info!(title = %notice.title, "{}", notice.description);
    }

    let view = session.view();
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
