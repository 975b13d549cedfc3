//! Colorful console output for draw simulation runs.
//!
//! Provides a custom `tracing` layer that formats run events with colors,
//! and a [`ConsoleTableEmitter`] for the final percentage table.
//!
//! ## Log Levels
//!
//! - **INFO**: Run start/end, milestones, cache load/save
//! - **WARN**: Cache fallback
//! - **DEBUG**: Feasibility check
//! - **TRACE**: Individual pairings

mod table;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub use table::ConsoleTableEmitter;

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static RUN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. `RUST_LOG` overrides the
/// default `info` level of the simulator.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(DrawConsoleLayer)
            .try_init();
    });
}

// Marks the start of a run for elapsed time tracking.
fn mark_run_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    RUN_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since run start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = RUN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
                 _       _         _
 _ __ ___   __ _| |_ ___| |__   __| |_ __ __ ___      __
| '_ ` _ \ / _` | __/ __| '_ \ / _` | '__/ _` \ \ /\ / /
| | | | | | (_| | || (__| | | | (_| | | | (_| |\ V  V /
|_| |_| |_|\__,_|\__\___|_| |_|\__,_|_|  \__,_| \_/\_/
"#;

    let version_line = format!(
        "          v{} - Feasibility-Pruned Draw Simulator\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats run events with colors.
pub struct DrawConsoleLayer;

impl<S: Subscriber> Layer<S> for DrawConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !accepts(metadata.target()) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

// Solver events plus those of the `matchdraw` binary.
fn accepts(target: &str) -> bool {
    target.starts_with("matchdraw_solver")
        || target == "matchdraw"
        || target.starts_with("matchdraw::")
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    item: Option<String>,
    partner: Option<String>,
    location: Option<String>,
    error: Option<String>,
    items: Option<u64>,
    trials: Option<u64>,
    percent: Option<u64>,
    completed: Option<u64>,
    total: Option<u64>,
    options: Option<u64>,
    duration_ms: Option<u64>,
    speed: Option<u64>,
    entries: Option<u64>,
    cached_entries: Option<u64>,
    cache_hits: Option<u64>,
    cache_misses: Option<u64>,
    cache_entries: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "message" => self.message = Some(s),
            "item" => self.item = Some(s),
            "partner" => self.partner = Some(s),
            "location" => self.location = Some(s),
            "error" => self.error = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "items" => self.items = Some(value),
            "trials" => self.trials = Some(value),
            "percent" => self.percent = Some(value),
            "completed" => self.completed = Some(value),
            "total" => self.total = Some(value),
            "options" => self.options = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "speed" => self.speed = Some(value),
            "entries" => self.entries = Some(value),
            "cached_entries" => self.cached_entries = Some(value),
            "cache_hits" => self.cache_hits = Some(value),
            "cache_misses" => self.cache_misses = Some(value),
            "cache_entries" => self.cache_entries = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "message" => self.message = value,
            "item" => self.item = value,
            "partner" => self.partner = value,
            "location" => self.location = value,
            "error" => self.error = value,
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "run_start" => format_run_start(v),
        "milestone" => format_milestone(v),
        "run_end" => format_run_end(v),
        "cache_load" => format_cache(v, "Loaded", "from"),
        "cache_save" => format_cache(v, "Saved", "to"),
        "cache_fallback" => format_cache_fallback(v),
        "feasibility_check" => format_feasibility_check(v),
        "pick" => format_pick(v, level),
        "" => format_message(v, level),
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_run_start(v: &EventVisitor) -> String {
    mark_run_start();
    let mut output = format!(
        "{} {} Simulating │ {} items per side │ {} trials",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.items).bright_yellow(),
        count(v.trials).bright_yellow(),
    );

    if let Some(cached) = v.cached_entries.filter(|&c| c > 0) {
        output.push_str(&format!(
            " │ {} cached paths",
            cached.to_formatted_string(&Locale::en).bright_yellow()
        ));
    }

    output
}

fn format_milestone(v: &EventVisitor) -> String {
    format!(
        "{} {} {:>3}% complete │ {:>12} / {} trials",
        format_elapsed(),
        "⚡".bright_cyan(),
        v.percent.unwrap_or(0).bright_white().bold(),
        count(v.completed).white(),
        count(v.total).white(),
    )
}

fn format_run_end(v: &EventVisitor) -> String {
    let duration = v.duration_ms.unwrap_or(0);
    let hits = v.cache_hits.unwrap_or(0);
    let misses = v.cache_misses.unwrap_or(0);
    let lookups = hits + misses;
    let hit_rate = if lookups == 0 {
        0.0
    } else {
        100.0 * hits as f64 / lookups as f64
    };

    let mut output = format!(
        "{} {} 100% complete │ {} │ {} trials/s",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        count(v.speed).bright_magenta().bold(),
    );

    output.push_str("\n\n");
    output.push_str(
        &"╔══════════════════════════════════════════════════════════╗"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');
    for (label, value) in [
        ("Trials:", count(v.trials)),
        ("Duration:", format_duration_ms(duration)),
        ("Paths found in cache:", count(v.cache_hits)),
        ("Paths newly computed:", count(v.cache_misses)),
        ("Cache hit rate:", format!("{hit_rate:.1}%")),
        ("Cache entries:", count(v.cache_entries)),
    ] {
        output.push_str(&format!(
            "{}  {:<24}{:>30}  {}",
            "║".bright_cyan(),
            label,
            value,
            "║".bright_cyan()
        ));
        output.push('\n');
    }
    output.push_str(
        &"╚══════════════════════════════════════════════════════════╝"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    output
}

fn format_cache(v: &EventVisitor, verb: &str, preposition: &str) -> String {
    format!(
        "{} {} {} {} cached paths {} {}",
        format_elapsed(),
        "◆".bright_blue(),
        verb,
        count(v.entries).bright_yellow(),
        preposition,
        v.location.as_deref().unwrap_or("?").white().bold(),
    )
}

fn format_cache_fallback(v: &EventVisitor) -> String {
    format!(
        "{} {} No usable cache at {} ({}), starting cold",
        format_elapsed(),
        "!".bright_yellow().bold(),
        v.location.as_deref().unwrap_or("?").white().bold(),
        v.error.as_deref().unwrap_or("unknown error").bright_black(),
    )
}

fn format_feasibility_check(v: &EventVisitor) -> String {
    format!(
        "{} {} {} has {} feasible partners",
        format_elapsed(),
        "✓".bright_green(),
        v.item.as_deref().unwrap_or("?").white().bold(),
        count(v.options).bright_yellow(),
    )
}

fn format_pick(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} {} → {} │ {} options",
        format_elapsed(),
        "·".bright_black(),
        v.item.as_deref().unwrap_or("?").bright_black(),
        v.partner.as_deref().unwrap_or("?").bright_black(),
        count(v.options).bright_black(),
    )
}

fn format_message(v: &EventVisitor, level: Level) -> String {
    let Some(message) = v.message.as_deref() else {
        return String::new();
    };
    match level {
        Level::ERROR => format!(
            "{} {} {}",
            format_elapsed(),
            "✗".bright_red(),
            message.bright_red()
        ),
        Level::WARN => format!(
            "{} {} {}",
            format_elapsed(),
            "!".bright_yellow(),
            message.yellow()
        ),
        _ => format!("{} {}", format_elapsed(), message),
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
