//! Number-line rendering of how a single octet (0 to 255) divides into blocks of a magic number.

use std::env;

use tracing::{debug, warn};

use crate::console::terminal_width;


const MAX_VALUE: u32 = 255;
const FALLBACK_WIDTH: usize = 80;
const WIDTH_MARGIN: usize = 10;
// room for the widest label, "255"
const MIN_USABLE_WIDTH: usize = 3;
const MAX_TABLE_ROWS: usize = 16;
const CELL_WIDTH: usize = 20;


/// Controls how wide the number line is drawn.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LineConfig {
    /// The narrowest the number line may become, even on narrow terminals.
    pub min_width: usize,

    /// The widest the number line may become, even on wide terminals.
    pub max_width: usize,

    /// The width of the terminal, if known.
    pub width: Option<usize>,
}
impl Default for LineConfig {
    fn default() -> Self {
        LineConfig {
            min_width: 128,
            max_width: 256,
            width: None,
        }
    }
}
impl LineConfig {
    /// Obtains the configuration from the `SUBNETCALC_MIN_WIDTH`, `SUBNETCALC_MAX_WIDTH` and
    /// `SUBNETCALC_WIDTH` environment variables, falling back to the defaults and the width of the
    /// terminal.
    pub fn from_env() -> LineConfig {
        LineConfig::from_lookup(|name| env::var(name).ok(), terminal_width)
    }

    /// Obtains the configuration from variables returned by `lookup`, asking `terminal` for the
    /// width only if no width variable is set.
    pub fn from_lookup<L, T>(lookup: L, terminal: T) -> LineConfig
        where
            L: Fn(&str) -> Option<String>,
            T: FnOnce() -> Option<usize>,
    {
        let defaults = LineConfig::default();
        LineConfig {
            min_width: parse_width(&lookup, "SUBNETCALC_MIN_WIDTH").unwrap_or(defaults.min_width),
            max_width: parse_width(&lookup, "SUBNETCALC_MAX_WIDTH").unwrap_or(defaults.max_width),
            width: parse_width(&lookup, "SUBNETCALC_WIDTH").or_else(terminal),
        }
    }

    /// The number of columns the number line occupies.
    pub fn usable_width(&self) -> usize {
        let width = self.width.unwrap_or(FALLBACK_WIDTH);
        width.saturating_sub(WIDTH_MARGIN)
            .min(self.max_width)
            .max(self.min_width)
            .max(MIN_USABLE_WIDTH)
    }
}

fn parse_width<L: Fn(&str) -> Option<String>>(lookup: &L, name: &str) -> Option<usize> {
    let value = lookup(name)?;
    match value.trim().parse() {
        Ok(w) => Some(w),
        Err(e) => {
            warn!(variable = name, value = %value, error = %e, "ignoring invalid width");
            None
        },
    }
}


/// Returns the labels along the number line: every multiple of the magic number up to 255, and
/// 255 itself.
pub fn boundaries(magic: u32) -> Vec<u32> {
    let mut labels: Vec<u32> = (0..=MAX_VALUE)
        .step_by(magic as usize)
        .collect();
    if labels.last() != Some(&MAX_VALUE) {
        labels.push(MAX_VALUE);
    }
    labels
}

/// Returns the blocks an octet is divided into by the magic number. The last block is cut short at
/// 255 if the magic number does not divide 256.
pub fn blocks(magic: u32) -> Vec<(u32, u32)> {
    (0..=MAX_VALUE)
        .step_by(magic as usize)
        .map(|start| (start, (start + magic - 1).min(MAX_VALUE)))
        .collect()
}

fn position(label: u32, usable: usize) -> usize {
    let length = (usable - 1) as f64;
    (f64::from(label) / f64::from(MAX_VALUE) * length).round() as usize
}

fn place_labels(labels: &[u32], usable: usize) -> String {
    let mut line = vec![' '; usable];
    for &label in labels {
        let text = label.to_string();
        let start = position(label, usable)
            .saturating_sub(text.len() / 2)
            .min(usable - text.len());
        for (i, c) in text.chars().enumerate() {
            line[start + i] = c;
        }
    }
    line.into_iter().collect()
}

fn place_marks(labels: &[u32], usable: usize, background: char, mark: char) -> String {
    let mut line = vec![background; usable];
    for &label in labels {
        line[position(label, usable)] = mark;
    }
    line.into_iter().collect()
}

fn ranges_table(magic: u32, highlight: Option<(u32, u32)>) -> Vec<String> {
    let cells: Vec<String> = blocks(magic)
        .into_iter()
        .enumerate()
        .map(|(i, (start, end))| {
            let range = format!("[{:>3} - {:<3}]", start, end);
            if highlight == Some((start, end)) {
                format!("{:>3}: -> {} <-", i + 1, range)
            } else {
                format!("{:>3}: {}", i + 1, range)
            }
        })
        .collect();

    let cols = (cells.len() + MAX_TABLE_ROWS - 1) / MAX_TABLE_ROWS;
    let rows = (cells.len() + cols - 1) / cols;

    let mut table = Vec::with_capacity(rows);
    for row in 0..rows {
        let row_cells: Vec<String> = (0..cols)
            .map(|col| row + col * rows)
            .filter_map(|idx| cells.get(idx))
            .map(|cell| format!("{:<width$}", cell, width = CELL_WIDTH))
            .collect();
        table.push(String::from(row_cells.join(" ").trim_end()));
    }
    table
}

/// Renders the number line for the given magic number followed by a table of all blocks. If
/// `highlight` matches one of the blocks, that block is marked in the table.
///
/// Small magic numbers would crowd the labels, so below 8 only multiples of 8 are labelled,
/// alternating above and below the line.
///
/// Panics if `magic` is not between 1 and 255.
pub fn render(magic: u32, highlight: Option<(u32, u32)>, config: &LineConfig) -> String {
    assert!(magic >= 1 && magic <= MAX_VALUE, "magic number {} out of range", magic);

    let usable = config.usable_width();
    let labels = boundaries(magic);
    debug!(magic, usable, labels = labels.len(), ?highlight, "rendering number line");

    let mut lines = Vec::new();
    if magic < 8 {
        let shown: Vec<u32> = labels.iter()
            .copied()
            .filter(|l| l % 8 == 0 || *l == MAX_VALUE)
            .collect();
        let top: Vec<u32> = shown.iter().copied().step_by(2).collect();
        let bottom: Vec<u32> = shown.iter().copied().skip(1).step_by(2).collect();

        lines.push(place_labels(&top, usable));
        lines.push(place_marks(&top, usable, ' ', '|'));
        lines.push(place_marks(&labels, usable, '-', '+'));
        lines.push(place_marks(&bottom, usable, ' ', '|'));
        lines.push(place_labels(&bottom, usable));
    } else {
        lines.push(place_labels(&labels, usable));
        lines.push(place_marks(&labels, usable, ' ', '|'));
        lines.push(place_marks(&labels, usable, '-', '+'));
    }

    lines.push(String::new());
    lines.push(String::from("Ranges:"));
    lines.extend(ranges_table(magic, highlight));

    lines.join("\n")
}
