use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Install the global logger
///
/// Records go to stderr as `<timestamp> <host> <LEVEL> [<target>] <message>`.
/// The default level is `warn`; `verbose` raises this crate to `debug`.
/// `RUST_LOG` is applied last and wins over both.
pub fn init(verbose: bool) {
    let host = hostname();
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .parse_env(Env::default())
        .format(move |buf, record| {
            writeln!(
                buf,
                "{} {} {} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                host,
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Name of the machine as reported by the OS, `localhost` if it has none
fn hostname() -> String {
    let name = gethostname::gethostname();
    let name = name.to_string_lossy();
    if name.trim().is_empty() {
        "localhost".to_string()
    } else {
        name.into_owned()
    }
}
