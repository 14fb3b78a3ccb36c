use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use log::{Level, LevelFilter};
use pretty_env_logger::env_logger;

pub const LOG_DIR: &str = "logs";

/// Installs the global logger. `RUST_LOG` overrides the default `info` level.
///
/// With `log_file` set, records are appended to `logs/<log_file>` without
/// colors instead of going to stderr. Returns the path written to, if any.
pub fn init(log_file: Option<&str>) -> io::Result<Option<PathBuf>> {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(LevelFilter::Info);
    builder.parse_default_env();

    let target = match log_file {
        Some(name) => {
            let path = open_target(Path::new(LOG_DIR), name)?;
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder.write_style(env_logger::WriteStyle::Never);
            Some(path)
        }
        None => None,
    };

    builder.format(|buf, record| {
        let mut level_style = buf.style();
        level_style.set_color(match record.level() {
            Level::Error => env_logger::fmt::Color::Red,
            Level::Warn => env_logger::fmt::Color::Yellow,
            Level::Info => env_logger::fmt::Color::Green,
            Level::Debug => env_logger::fmt::Color::Blue,
            Level::Trace => env_logger::fmt::Color::Magenta,
        });
        level_style.set_bold(true);

        writeln!(
            buf,
            "{} {} {} > {}",
            buf.timestamp(),
            level_style.value(format!("{:<5}", record.level())),
            record.target(),
            record.args()
        )
    });

    builder.try_init().map_err(io::Error::other)?;
    Ok(target)
}

fn open_target(dir: &Path, name: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    Ok(dir.join(name))
}
