//! Plain-text table rendering for `--format table`.

/// A titled block of rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub title: Option<String>,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            title: None,
            headers,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Two-column `field | value` table.
    #[must_use]
    pub fn fields(pairs: Vec<(&'static str, String)>) -> Self {
        let mut table = Self::new(vec!["field", "value"]);
        for (field, value) in pairs {
            table.push(vec![field.to_string(), value]);
        }
        table
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const PROGRESS_BAR_CELLS: usize = 10;

/// Render one table, shrinking the widest columns to fit `max_width`.
#[must_use]
pub fn render_table(table: &Table, options: TableOptions) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 3);
    if let Some(title) = &table.title {
        lines.push(format!("{title}:"));
    }
    if table.rows.is_empty() {
        lines.push(String::from("(no rows)"));
        return lines.join("\n");
    }

    let mut widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();
    shrink_to_fit(&mut widths, options.max_width);

    let header = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(header.trim_end().to_string());
    lines.push("-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2));

    for row in &table.rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(column, width)| {
                let cell = row.get(column).map_or("-", String::as_str);
                let clipped = clip(cell, *width);
                let padded = pad(&clipped, *width, is_numeric(&clipped));
                if options.color {
                    colorize(&clipped, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// `[#####-----]  50%` style bar for a fraction in `[0.0, 1.0]`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn progress_bar(progress: f32) -> String {
    let fraction = progress.clamp(0.0, 1.0);
    let filled = (fraction * PROGRESS_BAR_CELLS as f32).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_CELLS - filled),
        percent(fraction)
    )
}

/// Whole percent of a fraction in `[0.0, 1.0]`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent(progress: f32) -> u8 {
    (progress.clamp(0.0, 1.0) * 100.0).round() as u8
}

fn shrink_to_fit(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

fn colorize(plain: &str, padded: String) -> String {
    let code = match plain {
        "done" | "yes" => "32",
        "open" => "33",
        "no" => "31",
        _ if plain.ends_with("100%") => "32",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}
