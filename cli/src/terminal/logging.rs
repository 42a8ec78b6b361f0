use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

const STAGES: [&str; 4] = ["validation", "compute", "display", "config"];

/// Pipeline stage an event was emitted from, read off its module path.
/// Events from the binary itself are tagged `cli`.
fn stage(target: &str) -> &'static str {
    STAGES
        .into_iter()
        .find(|stage| target.split("::").any(|segment| segment == *stage))
        .unwrap_or("cli")
}

/// `<symbol> <stage> <fields>`, one line per event.
pub struct StageFormatter;

impl<S, N> FormatEvent<S, N> for StageFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let symbol = match *meta.level() {
            Level::TRACE => "[ ]".dimmed(),
            Level::DEBUG => "[?]".blue(),
            Level::INFO => "[=]".green().bold(),
            Level::WARN => "[!]".yellow().bold(),
            Level::ERROR => "[x]".red().bold(),
        };
        let stage = format!("{:<10}", stage(meta.target()));

        write!(writer, "{} {} ", symbol, stage.dimmed())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Logs go to stderr so JSON on stdout stays machine-readable.
/// `RUST_LOG` wins over the verbosity flag.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(StageFormatter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_from_module_path() {
        assert_eq!(stage("breakeven_core::validation::validator"), "validation");
        assert_eq!(stage("breakeven_core::compute::engine"), "compute");
        assert_eq!(stage("breakeven_core::display::chart"), "display");
        assert_eq!(stage("breakeven_core::config"), "config");
        assert_eq!(stage("breakeven"), "cli");
    }
}
