use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
pub mod views;

pub use table::Table;

/// A response that knows how to lay itself out as one or more tables.
pub trait Tabular {
    fn tables(&self) -> Vec<Table>;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(render_tables(value)),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_tables<T: Tabular>(value: &T) -> String {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };
    value
        .tables()
        .iter()
        .map(|t| table::render_table(t, options))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{Table, Tabular, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: i64,
        name: &'static str,
    }

    impl Tabular for Example {
        fn tables(&self) -> Vec<Table> {
            vec![
                Table::fields(vec![("id", self.id.to_string()), ("name", self.name.into())]),
                Table::new(vec!["item"]).titled("checklist"),
            ]
        }
    }

    const EXAMPLE: Example = Example { id: 7, name: "Gym" };

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&EXAMPLE, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 7);
        assert_eq!(parsed["name"], "Gym");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&EXAMPLE, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.contains("\"name\":\"Gym\""));
    }

    #[test]
    fn table_render_separates_blocks() {
        let out = render(&EXAMPLE, OutputFormat::Table).expect("table render should work");
        assert!(out.starts_with("field"));
        assert!(out.contains("\n\nchecklist:\n(no rows)"));
    }
}
