// src/logging.rs
use std::sync::OnceLock;
use std::time::Instant;

/// Log target used by the crate's `log*!` macros.
pub const TARGET: &str = "physdata";

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Install a stderr logger with `[elapsed][LEVEL] msg` lines.
///
/// Defaults to `warn` so catalog join warnings are visible; `RUST_LOG`
/// overrides. Safe to call more than once.
#[cfg(feature = "cli")]
pub fn init() {
    use std::io::Write;

    start();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        })
        .try_init();
}

/// Milliseconds since the first log-related call in this process.
pub fn elapsed_ms() -> u128 {
    start().elapsed().as_millis()
}
