//! HTML rendering of the index, input forms and result tables.
//!
//! Pages are assembled from the static operation metadata; every value that
//! reaches the markup goes through [`escape`].

use std::collections::HashMap;
use std::fmt::Write;

use cinequery_core::operation::{Column, FieldKind, Operation};
use serde_json::Value;

use crate::dispatch::QueryOutcome;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <nav><a href=\"/\">All queries</a></nav>\n\
         <h1>{title}</h1>\n\
         {body}\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

/// Landing page linking every operation.
pub fn index_page() -> String {
    let mut body = String::from("<ol>\n");
    for op in Operation::ALL {
        let _ = writeln!(
            body,
            "<li><a href=\"/{}\">{}</a></li>",
            op.as_str(),
            escape(op.title())
        );
    }
    body.push_str("</ol>\n");
    layout("Movie database queries", &body)
}

/// Page for one operation: its input form (if it takes parameters) followed
/// by the result, if one was computed.
///
/// `submitted` pre-fills the form with the values the user sent.
pub fn operation_page(
    op: Operation,
    submitted: Option<&HashMap<String, String>>,
    outcome: Option<&QueryOutcome>,
) -> String {
    let mut body = String::new();

    if op.takes_parameters() {
        body.push_str(&form(op, submitted));
    }

    match outcome {
        Some(QueryOutcome::Rows(rows)) => body.push_str(&table(op.columns(), rows)),
        Some(QueryOutcome::AgeExtremes(groups)) if groups.is_empty() => {
            body.push_str(&table(op.columns(), &[]));
        }
        Some(QueryOutcome::AgeExtremes(groups)) => {
            body.push_str("<h2>Youngest</h2>\n");
            body.push_str(&table(op.columns(), &groups.youngest));
            body.push_str("<h2>Oldest</h2>\n");
            body.push_str(&table(op.columns(), &groups.oldest));
        }
        None => {}
    }

    layout(op.title(), &body)
}

fn form(op: Operation, submitted: Option<&HashMap<String, String>>) -> String {
    let mut html = format!("<form method=\"post\" action=\"/{}\">\n", op.as_str());
    for field in op.fields() {
        let value = submitted
            .and_then(|values| values.get(field.name))
            .map(String::as_str)
            .unwrap_or("");
        let input = match field.kind {
            FieldKind::Text => "type=\"text\"",
            FieldKind::Integer => "type=\"number\" step=\"1\"",
            FieldKind::Float => "type=\"number\" step=\"any\"",
        };
        let _ = writeln!(
            html,
            "<label>{label} <input name=\"{name}\" {input} value=\"{value}\" required></label><br>",
            label = escape(field.label),
            name = field.name,
            value = escape(value),
        );
    }
    html.push_str("<button type=\"submit\">Search</button>\n</form>\n");
    html
}

fn table(columns: &[Column], rows: &[Value]) -> String {
    if rows.is_empty() {
        return "<p>No results found.</p>\n".to_string();
    }

    let mut html = String::from("<table>\n<thead><tr>");
    for column in columns {
        let _ = write!(html, "<th>{}</th>", escape(column.header));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        html.push_str("<tr>");
        for column in columns {
            let _ = write!(html, "<td>{}</td>", escape(&cell_text(row.get(column.key))));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use cinequery_core::shaping::AgeExtremes;
    use serde_json::json;

    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn index_links_every_operation() {
        let html = index_page();
        for op in Operation::ALL {
            assert!(html.contains(&format!("href=\"/{}\"", op.as_str())));
        }
    }

    #[test]
    fn parameterized_page_has_form_fields() {
        let html = operation_page(Operation::SearchProducers, None, None);
        assert!(html.contains("action=\"/search_producers\""));
        assert!(html.contains("name=\"box_office_min\""));
        assert!(html.contains("name=\"budget_max\""));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn parameterless_page_has_no_form() {
        let outcome = QueryOutcome::Rows(vec![json!({"table_name": "movie"})]);
        let html = operation_page(Operation::ListTables, None, Some(&outcome));
        assert!(!html.contains("<form"));
        assert!(html.contains("<td>movie</td>"));
    }

    #[test]
    fn submitted_values_are_echoed_escaped() {
        let submitted = HashMap::from([("movie_name".to_string(), "<script>".to_string())]);
        let html = operation_page(Operation::SearchMovie, Some(&submitted), None);
        assert!(html.contains("value=\"&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn cells_follow_column_order_and_blank_nulls() {
        let outcome = QueryOutcome::Rows(vec![json!({
            "budget": 100.0,
            "name": "Alpha",
            "production": null,
            "rating": 7.5,
        })]);
        let html = operation_page(Operation::SearchMovie, None, Some(&outcome));
        assert!(html.contains("<tr><td>Alpha</td><td>7.5</td><td></td><td>100.0</td></tr>"));
    }

    #[test]
    fn empty_result_says_so() {
        let outcome = QueryOutcome::Rows(vec![]);
        let html = operation_page(Operation::SearchLocation, None, Some(&outcome));
        assert!(html.contains("No results found."));
    }

    #[test]
    fn age_extremes_render_two_sections() {
        let outcome = QueryOutcome::AgeExtremes(AgeExtremes {
            youngest: vec![json!({"name": "Kid", "age": 20, "award_name": "Rising Star"})],
            oldest: vec![json!({"name": "Elder", "age": 80, "award_name": "Lifetime"})],
        });
        let html = operation_page(Operation::YoungestOldestActors, None, Some(&outcome));
        let youngest = html.find("<h2>Youngest</h2>").unwrap();
        let oldest = html.find("<h2>Oldest</h2>").unwrap();
        let kid = html.find("Kid").unwrap();
        let elder = html.find("Elder").unwrap();
        assert!(youngest < kid && kid < oldest && oldest < elder);
    }

    #[test]
    fn no_award_winners_renders_a_single_notice() {
        let outcome = QueryOutcome::AgeExtremes(AgeExtremes::empty());
        let html = operation_page(Operation::YoungestOldestActors, None, Some(&outcome));
        assert!(!html.contains("<h2>Youngest</h2>"));
        assert_eq!(html.matches("No results found.").count(), 1);
    }
}
