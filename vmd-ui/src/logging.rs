//! Forward `tracing` events to the browser console

use std::io;

use tracing_subscriber::EnvFilter;
use vmd_common::UiConfig;

/// Install the global subscriber; later calls keep the first one
pub fn init_logging(config: &UiConfig) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|e| {
        leptos::logging::warn!("Invalid log level {:?}: {}", config.log_level, e);
        EnvFilter::new("info")
    });

    let result = tracing_subscriber::fmt()
        .without_time()
        .with_ansi(false)
        .with_env_filter(filter)
        .with_writer(ConsoleWriter::default)
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}

/// Buffers formatted events and writes each line to the console
#[derive(Default)]
struct ConsoleWriter {
    buffer: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleLevel {
    Log,
    Warn,
    Error,
}

impl ConsoleLevel {
    fn of(line: &str) -> Self {
        let line = line.trim_start();
        if line.starts_with("ERROR") {
            ConsoleLevel::Error
        } else if line.starts_with("WARN") {
            ConsoleLevel::Warn
        } else {
            ConsoleLevel::Log
        }
    }
}

impl ConsoleWriter {
    fn take_lines(&mut self) -> Vec<String> {
        let text = String::from_utf8_lossy(&self.buffer).into_owned();
        self.buffer.clear();
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for line in self.take_lines() {
            match ConsoleLevel::of(&line) {
                ConsoleLevel::Error => leptos::logging::error!("{}", line),
                ConsoleLevel::Warn => leptos::logging::warn!("{}", line),
                ConsoleLevel::Log => leptos::logging::log!("{}", line),
            }
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_writer_splits_lines() {
        let mut writer = ConsoleWriter::default();
        writer.write_all(b" INFO vmd_common::booking: classified\n").unwrap();
        writer.write_all(b" WARN vmd_ui: second\n\n").unwrap();

        let lines = writer.take_lines();
        assert_eq!(lines, vec![" INFO vmd_common::booking: classified", " WARN vmd_ui: second"]);
        assert!(writer.take_lines().is_empty());
    }

    #[test]
    fn test_console_level_follows_event_level() {
        assert_eq!(ConsoleLevel::of("ERROR vmd_ui: boom"), ConsoleLevel::Error);
        assert_eq!(ConsoleLevel::of(" WARN vmd_ui: careful"), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::of("DEBUG vmd_common::booking: classified"), ConsoleLevel::Log);
    }

    #[test]
    fn test_configured_filter_is_accepted() {
        let config = UiConfig::from_json(r#"{"log_level": "vmd_common=debug,warn"}"#).unwrap();
        assert!(EnvFilter::try_new(&config.log_level).is_ok());
    }
}
