use std::io;

use serde_json::Value;

use super::format::{Align, Column, key_value_rows, render_table};
use super::stats_text::{field_f64, field_i64, field_rows, field_str, range_line, scope_line};

pub fn render_health(data: &Value) -> io::Result<String> {
    let mut lines = vec!["Budget health".to_string(), String::new()];
    lines.extend(key_value_rows(
        &[
            ("Scope:", scope_line(data)),
            ("Range:", range_line(data)),
            ("As of:", field_str(data, "as_of").to_string()),
        ],
        2,
    ));

    lines.push(String::new());
    lines.push("Active budgets:".to_string());
    lines.extend(period_rows(data, "active"));

    lines.push(String::new());
    lines.push("Past budgets:".to_string());
    lines.extend(period_rows(data, "past"));

    Ok(lines.join("\n"))
}

fn period_rows(data: &Value, key: &str) -> Vec<String> {
    let rows: Vec<Vec<String>> = field_rows(data, key)
        .iter()
        .map(|budget| {
            vec![
                field_str(budget, "budget_id").to_string(),
                field_str(budget, "name").to_string(),
                field_i64(budget, "limit").to_string(),
                format!(
                    "{} to {}",
                    field_str(budget, "period_start"),
                    field_str(budget, "period_end")
                ),
                field_str(budget, "status").to_string(),
            ]
        })
        .collect();

    if rows.is_empty() {
        return vec!["  (none)".to_string()];
    }

    render_table(
        &[
            Column {
                name: "Budget",
                align: Align::Left,
            },
            Column {
                name: "Name",
                align: Align::Left,
            },
            Column {
                name: "Limit",
                align: Align::Right,
            },
            Column {
                name: "Period",
                align: Align::Left,
            },
            Column {
                name: "Status",
                align: Align::Left,
            },
        ],
        &rows,
    )
}

pub fn render_utilization(data: &Value) -> io::Result<String> {
    let mut lines = vec!["Budget utilization".to_string(), String::new()];
    lines.extend(key_value_rows(
        &[
            ("Scope:", scope_line(data)),
            ("Range:", range_line(data)),
        ],
        2,
    ));

    let rows: Vec<Vec<String>> = field_rows(data, "budgets")
        .iter()
        .map(|budget| {
            vec![
                field_str(budget, "budget_id").to_string(),
                field_str(budget, "name").to_string(),
                field_i64(budget, "limit").to_string(),
                field_i64(budget, "spent").to_string(),
                format!("{:.1}%", field_f64(budget, "utilization") * 100.0),
            ]
        })
        .collect();

    lines.push(String::new());
    if rows.is_empty() {
        lines.push("  No applicable budgets in range.".to_string());
    } else {
        lines.extend(render_table(
            &[
                Column {
                    name: "Budget",
                    align: Align::Left,
                },
                Column {
                    name: "Name",
                    align: Align::Left,
                },
                Column {
                    name: "Limit",
                    align: Align::Right,
                },
                Column {
                    name: "Spent",
                    align: Align::Right,
                },
                Column {
                    name: "Used",
                    align: Align::Right,
                },
            ],
            &rows,
        ));
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_health, render_utilization};

    #[test]
    fn health_text_lists_both_groups() {
        let data = json!({
            "scope": {"kind": "category", "id": "groceries"},
            "from": "2026-01-01T00:00:00Z",
            "to": "2026-01-31T23:59:59Z",
            "as_of": "2026-01-15T12:00:00Z",
            "active": [
                {"budget_id": "b-1", "name": "January groceries", "limit": 10000,
                 "period_start": "2026-01-01T00:00:00Z", "period_end": "2026-01-31T23:59:59Z",
                 "status": "active"},
            ],
            "past": [],
        });

        let rendered = render_health(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("Active budgets:"));
            assert!(text.contains("January groceries"));
            assert!(text.contains("Past budgets:"));
            assert!(text.contains("(none)"));
        }
    }

    #[test]
    fn utilization_text_shows_percent_used() {
        let data = json!({
            "scope": {"kind": "category", "id": "groceries"},
            "from": "2026-01-01T00:00:00Z",
            "to": "2026-01-31T23:59:59Z",
            "budgets": [
                {"budget_id": "b-1", "name": "January groceries", "limit": 10000,
                 "spent": 15000, "utilization": 1.5},
            ],
        });

        let rendered = render_utilization(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("150.0%"));
            assert!(text.contains("15000"));
        }
    }
}
