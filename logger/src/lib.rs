//! Default logging setup for the ordsets tools
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(missing_docs)]

use std::{fmt, time::Duration};

const TIMESTAMP_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::BrightBlack)));

const TARGET_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Magenta)));

/// Environment variable holding the `env_logger` filter directives.
pub const FILTER_ENV: &str = "ORDSETS_LOG";

/// Environment variable selecting when to use colors (`auto`, `always` or `never`).
pub const STYLE_ENV: &str = "ORDSETS_LOG_STYLE";

struct Elapsed(Duration);

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs_f64();
        if secs < 10.0 {
            write!(f, "{:>8.3}s", secs)
        } else if secs < 600.0 {
            write!(f, "{:>8.1}s", secs)
        } else {
            write!(f, "{:>5}m{:02}s", self.0.as_secs() / 60, self.0.as_secs() % 60)
        }
    }
}

fn builder(default_filter: &str) -> env_logger::Builder {
    let start_time = std::time::Instant::now();

    let last_target = std::sync::Mutex::new(String::new());

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or(FILTER_ENV, default_filter)
            .write_style(STYLE_ENV),
    );
    builder.format(move |buf, record| {
        use std::io::Write;

        let timestamp = Elapsed(start_time.elapsed());
        let level = record.level();
        let target = record.target();

        let mut last_target = last_target.lock().unwrap_or_else(|err| err.into_inner());

        if target != *last_target {
            last_target.clear();
            last_target.push_str(target);

            writeln!(
                buf,
                "{} {}",
                format_args!("{style}{timestamp}{style:#}", style = TIMESTAMP_STYLE),
                format_args!("{style}{target}{style:#}", style = TARGET_STYLE)
            )?;
        }
        writeln!(
            buf,
            "{} {} {}",
            format_args!("{style}{timestamp}{style:#}", style = TIMESTAMP_STYLE),
            format_args!(
                "{style}{level:<5}{style:#}",
                style = buf.default_level_style(level),
            ),
            record.args(),
        )
    });
    builder
}

/// Perform the default logging setup used by the ordsets tools.
///
/// Records at `info` and above are shown unless [`FILTER_ENV`] says otherwise.
pub fn setup() {
    setup_with_default("info")
}

/// Like [`setup`], but uses `default_filter` when [`FILTER_ENV`] is not set.
///
/// Does nothing if a logger was installed before.
pub fn setup_with_default(default_filter: &str) {
    if builder(default_filter).try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
