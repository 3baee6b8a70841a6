//! Rendering for the five output modes.
//!
//! Handlers hand over their data plus two projections: a `Tabled` row
//! for table mode and an id string for plain mode. The structured modes
//! (json, json-compact, yaml) serialize the original records via serde,
//! so scripts see the full wire shape, not the trimmed table columns.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};

/// Whether escape codes should be emitted under the given color mode.
///
/// `auto` colors only an interactive stdout and honors `NO_COLOR`.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Confirmation line after a successful mutation.
///
/// Goes to stderr so piped stdout stays machine-readable; `-q` drops it.
pub fn status_line(message: &str, color: &ColorMode, quiet: bool) {
    if quiet {
        return;
    }
    if should_color(color) {
        eprintln!("{}", message.green());
    } else {
        eprintln!("{message}");
    }
}

/// Render a collection of records in the selected format.
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    if let Some(out) = serialized(format, data) {
        return out;
    }
    match format {
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
        _ => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Table::new(&rows).with(Style::rounded()).to_string()
        }
    }
}

/// Render one record in the selected format.
///
/// There is no single-record table; `detail_fn` supplies the multi-line
/// human view instead.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    if let Some(out) = serialized(format, data) {
        return out;
    }
    match format {
        OutputFormat::Plain => id_fn(data),
        _ => detail_fn(data),
    }
}

/// Write a rendered block to stdout unless quiet or empty.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Serde-backed formats share one path; table and plain need the
/// caller's projections and return `None` here.
fn serialized<T: serde::Serialize + ?Sized>(format: &OutputFormat, data: &T) -> Option<String> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data),
        OutputFormat::JsonCompact => serde_json::to_string(data),
        OutputFormat::Yaml => return Some(yaml(data)),
        OutputFormat::Table | OutputFormat::Plain => return None,
    };
    Some(out.expect("serialization should not fail"))
}

fn yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Tabled)]
    struct Row {
        id: i64,
        name: String,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 1,
                name: "Anvil".into(),
            },
            Row {
                id: 2,
                name: "Bolt".into(),
            },
        ]
    }

    fn clone_row(r: &Row) -> Row {
        Row {
            id: r.id,
            name: r.name.clone(),
        }
    }

    #[test]
    fn plain_mode_emits_one_id_per_line() {
        let out = render_list(&OutputFormat::Plain, &rows(), clone_row, |r| {
            r.id.to_string()
        });
        assert_eq!(out, "1\n2");
    }

    #[test]
    fn compact_json_stays_on_one_line() {
        let out = render_list(&OutputFormat::JsonCompact, &rows(), clone_row, |r| {
            r.id.to_string()
        });
        assert!(!out.contains('\n'));
        assert!(out.starts_with('['));
    }

    #[test]
    fn single_table_mode_uses_the_detail_view() {
        let row = Row {
            id: 7,
            name: "Clamp".into(),
        };
        let out = render_single(
            &OutputFormat::Table,
            &row,
            |r| format!("#{} {}", r.id, r.name),
            |r| r.id.to_string(),
        );
        assert_eq!(out, "#7 Clamp");
    }

    #[test]
    fn color_modes_resolve() {
        assert!(should_color(&ColorMode::Always));
        assert!(!should_color(&ColorMode::Never));
    }
}
