use itertools::Itertools;
use rocket::serde::Serialize;
use scraper::{ElementRef, Html, Node};

use crate::resolver::value::{parse_date, TableRow, TypedValue};

/// shown for a tag that has no value
pub const EMPTY_DISPLAY: &str = "No value";
/// rich text previews are cut to this many characters
pub const RICH_TEXT_PREVIEW_CHARS: usize = 50;
/// appended to a rich text preview that was cut short
pub const ELLIPSIS: &str = "...";
const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
/// elements that start a new line of text, so their content is kept apart from their neighbours
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];
/// elements whose content is never shown
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

/// what the presentation layer should render for a tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(crate = "rocket::serde", tag = "kind", rename_all = "camelCase")]
pub enum DisplayValue {
    /// the tag has no value
    Empty,
    Text { text: String },
    /// rows projected onto `columns`, in the same order
    Table {
        columns: Vec<String>,
        rows: Vec<TableRow>,
    },
}

impl DisplayValue {
    /// a single line of text for places that can't render a grid
    pub fn summary(&self) -> String {
        match self {
            DisplayValue::Empty => EMPTY_DISPLAY.to_string(),
            DisplayValue::Text { text } => text.clone(),
            DisplayValue::Table { rows, .. } if rows.len() == 1 => "1 row".to_string(),
            DisplayValue::Table { rows, .. } => format!("{} rows", rows.len()),
        }
    }
}

/// Turns a typed value into what gets displayed. `columns` are the declared columns of a table tag.
///
/// This is total: a date that doesn't parse is shown as stored, and markup that strips down to nothing is shown as empty
pub fn display_value(value: &TypedValue, columns: &[String]) -> DisplayValue {
    match value {
        TypedValue::Table(rows) => {
            let columns = table_columns(columns, rows);
            let rows = rows.iter().map(|row| project_row(row, &columns)).collect();
            DisplayValue::Table { columns, rows }
        }
        _ if value.is_empty() => DisplayValue::Empty,
        TypedValue::Text(text) => DisplayValue::Text { text: text.clone() },
        TypedValue::Date(raw) => DisplayValue::Text {
            text: format_date(raw),
        },
        TypedValue::RichText(markup) => {
            let preview = rich_text_preview(markup);
            if preview.is_empty() {
                DisplayValue::Empty
            } else {
                DisplayValue::Text { text: preview }
            }
        }
    }
}

/// reformats an ISO date as `DD/MM/YYYY`. Anything that isn't a date comes back unchanged
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// the plain text of some markup, cut to [`RICH_TEXT_PREVIEW_CHARS`] characters
pub fn rich_text_preview(markup: &str) -> String {
    let text = strip_markup(markup);
    if text.chars().count() > RICH_TEXT_PREVIEW_CHARS {
        let mut truncated: String = text.chars().take(RICH_TEXT_PREVIEW_CHARS).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        text
    }
}

/// Removes every tag from the markup and decodes entities, collapsing runs of whitespace into single spaces.
/// Block elements are separated by a space, and scripts and styles are dropped
pub fn strip_markup(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    let mut text = String::new();
    collect_text(fragment.root_element(), &mut text);
    text.split_whitespace().join(" ")
}

fn collect_text(element: ElementRef, text: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(fragment) => text.push_str(fragment),
            Node::Element(_) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                let name = child.value().name();
                if HIDDEN_ELEMENTS.contains(&name) {
                    continue;
                }
                let block = BLOCK_ELEMENTS.contains(&name);
                if block {
                    text.push(' ');
                }
                collect_text(child, text);
                if block {
                    text.push(' ');
                }
            }
            _ => {}
        }
    }
}

/// declared columns win. A table tag without declared columns uses the keys of its rows, in the order they first show up
fn table_columns(declared: &[String], rows: &[TableRow]) -> Vec<String> {
    if !declared.is_empty() {
        return declared.to_vec();
    }
    rows.iter()
        .flat_map(|row| row.keys())
        .unique()
        .cloned()
        .collect()
}

fn project_row(row: &TableRow, columns: &[String]) -> TableRow {
    columns
        .iter()
        .map(|column| {
            let cell = row.get(column).cloned().unwrap_or_default();
            (column.clone(), cell)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::value::parse_table;

    fn text(value: &str) -> DisplayValue {
        DisplayValue::Text {
            text: value.to_string(),
        }
    }

    #[test]
    fn date_is_reformatted() {
        assert_eq!(
            text("05/03/2024"),
            display_value(&TypedValue::Date("2024-03-05".to_string()), &[])
        );
    }

    #[test]
    fn unparseable_date_is_shown_as_stored() {
        assert_eq!(
            text("not-a-date"),
            display_value(&TypedValue::Date("not-a-date".to_string()), &[])
        );
    }

    #[test]
    fn text_is_verbatim() {
        assert_eq!(
            text("  <b>as is</b> "),
            display_value(&TypedValue::Text("  <b>as is</b> ".to_string()), &[])
        );
    }

    #[test]
    fn rich_text_is_stripped_and_truncated() {
        let markup = format!("<p>{}</p>", "a".repeat(80));
        let expected = format!("{}...", "a".repeat(50));
        assert_eq!(
            text(&expected),
            display_value(&TypedValue::RichText(markup), &[])
        );
    }

    #[test]
    fn short_rich_text_is_not_truncated() {
        assert_eq!(
            "Hello world & friends",
            rich_text_preview("<h1>Hello</h1>\n<p><em>world</em> &amp; friends</p>")
        );
    }

    #[test]
    fn paragraphs_are_kept_apart() {
        assert_eq!("one two", rich_text_preview("<p>one</p><p>two</p>"));
        assert_eq!(
            "Title body",
            rich_text_preview("<div><h2>Title</h2><div>body</div></div>")
        );
    }

    #[test]
    fn list_items_and_line_breaks_are_kept_apart() {
        assert_eq!(
            "a b line break",
            rich_text_preview("<ul><li>a</li><li>b</li></ul>line<br>break")
        );
    }

    #[test]
    fn inline_elements_do_not_split_words() {
        assert_eq!("bold words", rich_text_preview("<b>bo</b>ld <i>words</i>"));
    }

    #[test]
    fn scripts_and_styles_are_dropped() {
        assert_eq!(
            "ok",
            rich_text_preview("<script>alert(1)</script><style>p{}</style>ok")
        );
        assert_eq!(
            DisplayValue::Empty,
            display_value(
                &TypedValue::RichText("<script>alert(1)</script>".to_string()),
                &[]
            )
        );
    }

    #[test]
    fn table_cells_are_kept_apart() {
        assert_eq!(
            "Step Expected open opens",
            rich_text_preview(
                "<table><tr><th>Step</th><th>Expected</th></tr><tr><td>open</td><td>opens</td></tr></table>"
            )
        );
    }

    #[test]
    fn rich_text_truncates_on_characters_not_bytes() {
        let preview = rich_text_preview(&format!("<p>{}</p>", "é".repeat(60)));
        assert_eq!(format!("{}...", "é".repeat(50)), preview);
    }

    #[test]
    fn empty_rich_text_document_is_empty() {
        assert_eq!(
            DisplayValue::Empty,
            display_value(&TypedValue::RichText("<p></p>".to_string()), &[])
        );
    }

    #[test]
    fn table_rows_are_projected_onto_declared_columns() {
        let columns = vec!["Step".to_string(), "Expected".to_string()];
        let rows = parse_table(r#"[{"Expected":"works","Step":"1"},{"Step":"2"}]"#).unwrap();
        let displayed = display_value(&TypedValue::Table(rows), &columns);
        let expected_rows =
            parse_table(r#"[{"Step":"1","Expected":"works"},{"Step":"2","Expected":""}]"#)
                .unwrap();
        assert_eq!(
            DisplayValue::Table {
                columns,
                rows: expected_rows
            },
            displayed
        );
    }

    #[test]
    fn undeclared_table_columns_come_from_rows() {
        let rows = parse_table(r#"[{"a":"1"},{"b":"2","a":"3"}]"#).unwrap();
        match display_value(&TypedValue::Table(rows), &[]) {
            DisplayValue::Table { columns, .. } => assert_eq!(vec!["a", "b"], columns),
            other => panic!("expected a table, got {other:?}"),
        }
    }

    #[test]
    fn summaries() {
        assert_eq!(EMPTY_DISPLAY, DisplayValue::Empty.summary());
        assert_eq!("hi", text("hi").summary());
        let table = DisplayValue::Table {
            columns: Vec::new(),
            rows: vec![TableRow::new(), TableRow::new()],
        };
        assert_eq!("2 rows", table.summary());
    }
}
