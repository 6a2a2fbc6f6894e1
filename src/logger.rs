use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Installs the global logger. `RUST_LOG` overrides the default Info level.
pub fn start_log() {
    let mut builder = Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{}: {}: {}: {}",
                buf.timestamp(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .parse_default_env();

    // A second call (e.g. from tests) must not panic
    let _ = builder.try_init();
}
