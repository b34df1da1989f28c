use std::path::Path;

use crossterm::style::Stylize;
use gia::config::{ConfigWarning, EnvWarning, SkippedConfig};

use crate::ui::context::UiContext;
use crate::ui::theme;

pub fn print_config_warnings(ui: &UiContext, path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", path.display(), line),
            None => path.display().to_string(),
        };
        warn(
            ui,
            &format!(
                "{} Unknown config key '{}' in {}",
                ui.warning_icon(),
                w.key,
                location
            ),
        );

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Report discovered config files that failed to load
pub fn print_skipped_configs(ui: &UiContext, skipped: &[SkippedConfig]) {
    for s in skipped {
        warn(
            ui,
            &format!(
                "{} Ignoring config {}: {}",
                ui.warning_icon(),
                s.path.display(),
                s.message
            ),
        );
    }
}

pub fn print_env_warnings(ui: &UiContext, warnings: &[EnvWarning]) {
    for w in warnings {
        warn(
            ui,
            &format!(
                "{} Ignoring {}='{}' (expected one of: {})",
                ui.warning_icon(),
                w.variable,
                w.value,
                w.expected
            ),
        );
    }
}

/// Warn about service keys that a later entity overwrote
pub fn print_collision_warnings(ui: &UiContext, overwritten: &[String]) {
    for key in overwritten {
        warn(
            ui,
            &format!(
                "{} Service '{}' is defined more than once; the last definition wins",
                ui.warning_icon(),
                key
            ),
        );
    }
    if !overwritten.is_empty() {
        eprintln!("   Give environments, apps and databases distinct names to keep them all.\n");
    }
}

pub fn print_written(ui: &UiContext, path: &Path, services: usize) {
    let line = format!(
        "{} Wrote {} ({} service{})",
        ui.success_icon(),
        path.display(),
        services,
        if services == 1 { "" } else { "s" }
    );
    if ui.color {
        eprintln!("{}", line.with(theme::colors::SUCCESS));
    } else {
        eprintln!("{}", line);
    }
}

fn warn(ui: &UiContext, line: &str) {
    if ui.color {
        eprintln!("{}", line.with(theme::colors::WARNING));
    } else {
        eprintln!("{}", line);
    }
}
