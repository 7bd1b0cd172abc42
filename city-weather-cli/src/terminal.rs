use std::io::{self, Stderr, Stdout, Write};

use city_weather_core::{
    WeatherReport, WeatherView,
    view::{report_fields, report_heading},
};
use tracing::warn;

/// Renders weather to `out` and errors/loading to `err`.
#[derive(Debug)]
pub struct TerminalView<O: Write, E: Write> {
    out: O,
    err: E,
}

impl TerminalView<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

fn report_write_failure(result: io::Result<()>) {
    if let Err(err) = result {
        warn!(error = %err, "failed to write to terminal");
    }
}

impl<O: Write, E: Write> WeatherView for TerminalView<O, E> {
    fn display_weather(&mut self, report: &WeatherReport) {
        let mut text = report_heading(report);
        text.push('\n');
        for (label, value) in report_fields(report) {
            text.push_str(&format!("  {label}: {value}\n"));
        }
        report_write_failure(self.out.write_all(text.as_bytes()));
    }

    fn display_error(&mut self, message: &str) {
        report_write_failure(writeln!(self.err, "{message}"));
    }

    fn show_loading(&mut self, loading: bool) {
        if loading {
            report_write_failure(writeln!(self.err, "Loading..."));
        }
    }
}
