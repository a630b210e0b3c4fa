use std::io;

use serde_json::Value;

use super::format::{Align, Column, key_value_rows, render_table};

pub(crate) fn field_str<'a>(data: &'a Value, key: &str) -> &'a str {
    data.get(key).and_then(Value::as_str).unwrap_or("")
}

pub(crate) fn field_i64(data: &Value, key: &str) -> i64 {
    data.get(key).and_then(Value::as_i64).unwrap_or(0)
}

pub(crate) fn field_f64(data: &Value, key: &str) -> f64 {
    data.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

pub(crate) fn field_rows<'a>(data: &'a Value, key: &str) -> Vec<&'a Value> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|rows| rows.iter().collect())
        .unwrap_or_default()
}

pub(crate) fn scope_line(data: &Value) -> String {
    let scope = data.get("scope").cloned().unwrap_or(Value::Null);
    format!("{} {}", field_str(&scope, "kind"), field_str(&scope, "id"))
}

pub(crate) fn range_line(data: &Value) -> String {
    format!("{} to {}", field_str(data, "from"), field_str(data, "to"))
}

fn header_rows(title: &str, data: &Value) -> Vec<String> {
    let mut lines = vec![title.to_string(), String::new()];
    lines.extend(key_value_rows(
        &[
            ("Scope:", scope_line(data)),
            ("Range:", range_line(data)),
        ],
        2,
    ));
    lines
}

pub fn render_heatmap(data: &Value) -> io::Result<String> {
    let mut lines = header_rows("Category heatmap", data);
    lines.extend(key_value_rows(
        &[
            ("Total spending:", field_i64(data, "total_spending").to_string()),
            ("Categories:", field_i64(data, "category_count").to_string()),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

pub fn render_frequency(data: &Value) -> io::Result<String> {
    let mut lines = header_rows("Time-of-day frequency", data);
    lines.extend(key_value_rows(
        &[(
            "Total transactions:",
            field_i64(data, "total_transactions").to_string(),
        )],
        2,
    ));

    let active: Vec<Vec<String>> = field_rows(data, "buckets")
        .iter()
        .filter(|bucket| field_i64(bucket, "transaction_count") > 0)
        .map(|bucket| {
            vec![
                format!("{:02}:00", field_i64(bucket, "hour")),
                field_i64(bucket, "transaction_count").to_string(),
            ]
        })
        .collect();

    lines.push(String::new());
    if active.is_empty() {
        lines.push("  No transactions in range.".to_string());
    } else {
        lines.extend(render_table(
            &[
                Column {
                    name: "Hour",
                    align: Align::Left,
                },
                Column {
                    name: "Transactions",
                    align: Align::Right,
                },
            ],
            &active,
        ));
    }

    Ok(lines.join("\n"))
}

pub fn render_weekday(data: &Value) -> io::Result<String> {
    let mut lines = header_rows("Day-of-week pattern", data);

    let rows: Vec<Vec<String>> = field_rows(data, "days")
        .iter()
        .map(|day| {
            vec![
                field_str(day, "day_of_week").to_string(),
                field_i64(day, "total_amount").to_string(),
                field_i64(day, "transaction_count").to_string(),
                field_i64(day, "average_amount").to_string(),
            ]
        })
        .collect();

    lines.push(String::new());
    lines.extend(render_table(
        &[
            Column {
                name: "Day",
                align: Align::Left,
            },
            Column {
                name: "Total",
                align: Align::Right,
            },
            Column {
                name: "Count",
                align: Align::Right,
            },
            Column {
                name: "Average",
                align: Align::Right,
            },
        ],
        &rows,
    ));

    Ok(lines.join("\n"))
}

pub fn render_burn(data: &Value) -> io::Result<String> {
    let mut lines = header_rows("Burn rate", data);
    lines.extend(key_value_rows(
        &[
            ("Total spending:", field_i64(data, "total_spending").to_string()),
            (
                "Daily average:",
                format!("{:.2}", field_f64(data, "daily_average_spend")),
            ),
            (
                "Weekly average:",
                format!("{:.2}", field_f64(data, "weekly_average_spend")),
            ),
            (
                "Monthly average:",
                format!("{:.2}", field_f64(data, "monthly_average_spend")),
            ),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

pub fn render_cashflow(data: &Value) -> io::Result<String> {
    let mut lines = header_rows("Cash-flow pulse", data);
    lines.extend(key_value_rows(
        &[
            (
                "Starting balance:",
                field_i64(data, "starting_balance").to_string(),
            ),
            (
                "Ending balance:",
                field_i64(data, "ending_balance").to_string(),
            ),
        ],
        2,
    ));

    let rows: Vec<Vec<String>> = field_rows(data, "days")
        .iter()
        .map(|day| {
            vec![
                field_str(day, "date").to_string(),
                field_i64(day, "balance").to_string(),
            ]
        })
        .collect();

    lines.push(String::new());
    if rows.is_empty() {
        lines.push("  No activity in range.".to_string());
    } else {
        lines.extend(render_table(
            &[
                Column {
                    name: "Date",
                    align: Align::Left,
                },
                Column {
                    name: "Balance",
                    align: Align::Right,
                },
            ],
            &rows,
        ));
    }

    Ok(lines.join("\n"))
}

pub fn render_velocity(data: &Value) -> io::Result<String> {
    let mut lines = header_rows("Monthly velocity", data);

    let rows: Vec<Vec<String>> = field_rows(data, "months")
        .iter()
        .map(|month| {
            vec![
                field_str(month, "month").to_string(),
                field_i64(month, "amount").to_string(),
            ]
        })
        .collect();

    lines.push(String::new());
    lines.extend(render_table(
        &[
            Column {
                name: "Month",
                align: Align::Left,
            },
            Column {
                name: "Amount",
                align: Align::Right,
            },
        ],
        &rows,
    ));

    Ok(lines.join("\n"))
}

pub fn render_distribution(data: &Value) -> io::Result<String> {
    let mut lines = header_rows("Account distribution", data);
    lines.extend(key_value_rows(
        &[(
            "Total spending:",
            field_i64(data, "total_spending").to_string(),
        )],
        2,
    ));

    let rows: Vec<Vec<String>> = field_rows(data, "accounts")
        .iter()
        .map(|account| {
            vec![
                field_str(account, "account_id").to_string(),
                field_str(account, "account_name").to_string(),
                field_i64(account, "amount").to_string(),
                format!("{}%", field_i64(account, "percentage")),
            ]
        })
        .collect();

    lines.push(String::new());
    if rows.is_empty() {
        lines.push("  No expense spending in range.".to_string());
    } else {
        lines.extend(render_table(
            &[
                Column {
                    name: "Account",
                    align: Align::Left,
                },
                Column {
                    name: "Name",
                    align: Align::Left,
                },
                Column {
                    name: "Amount",
                    align: Align::Right,
                },
                Column {
                    name: "Share",
                    align: Align::Right,
                },
            ],
            &rows,
        ));
    }

    Ok(lines.join("\n"))
}

pub fn render_sizes(data: &Value) -> io::Result<String> {
    let mut lines = header_rows("Transaction sizes", data);
    lines.extend(key_value_rows(
        &[
            (
                "Transactions:",
                field_i64(data, "transaction_count").to_string(),
            ),
            ("Average:", field_i64(data, "average_amount").to_string()),
            ("Median:", field_i64(data, "median_amount").to_string()),
            ("Smallest:", field_i64(data, "min_amount").to_string()),
            ("Largest:", field_i64(data, "max_amount").to_string()),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

pub fn render_overview(data: &Value) -> io::Result<String> {
    let null = Value::Null;
    let section = |key: &str| data.get(key).unwrap_or(&null).clone();

    let sections = [
        render_heatmap(&section("category_heatmap"))?,
        render_frequency(&section("time_frequency"))?,
        render_weekday(&section("day_of_week"))?,
        render_burn(&section("burn_rate"))?,
        render_cashflow(&section("cash_flow"))?,
        render_velocity(&section("monthly_velocity"))?,
        render_distribution(&section("account_distribution"))?,
        render_sizes(&section("transaction_sizes"))?,
        super::budget_text::render_utilization(&section("budget_utilization"))?,
    ];

    let mut lines = header_rows("Statistics overview", data);
    for rendered in sections {
        lines.push(String::new());
        lines.push(rendered);
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_distribution, render_frequency, render_heatmap, render_weekday};

    fn scoped(extra: serde_json::Value) -> serde_json::Value {
        let mut data = json!({
            "scope": {"kind": "account", "id": "acct-1"},
            "from": "2026-01-01T00:00:00Z",
            "to": "2026-01-31T23:59:59Z",
        });
        if let (Some(object), Some(extra_object)) = (data.as_object_mut(), extra.as_object()) {
            for (key, value) in extra_object {
                object.insert(key.clone(), value.clone());
            }
        }
        data
    }

    #[test]
    fn heatmap_text_lists_totals() {
        let data = scoped(json!({"total_spending": 50000, "category_count": 3}));
        let rendered = render_heatmap(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Category heatmap"));
            assert!(text.contains("account acct-1"));
            assert!(text.contains("50000"));
        }
    }

    #[test]
    fn frequency_text_hides_empty_hours() {
        let data = scoped(json!({
            "total_transactions": 2,
            "buckets": [
                {"hour": 0, "transaction_count": 0},
                {"hour": 9, "transaction_count": 2},
            ],
        }));
        let rendered = render_frequency(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("09:00"));
            assert!(!text.contains("00:00"));
        }
    }

    #[test]
    fn weekday_text_renders_all_rows() {
        let data = scoped(json!({
            "days": [
                {"day_of_week": "Sunday", "total_amount": 100, "transaction_count": 1, "average_amount": 100},
                {"day_of_week": "Monday", "total_amount": 0, "transaction_count": 0, "average_amount": 0},
            ],
        }));
        let rendered = render_weekday(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("Sunday"));
            assert!(text.contains("Monday"));
        }
    }

    #[test]
    fn distribution_text_shows_percent_shares() {
        let data = scoped(json!({
            "total_spending": 10000,
            "accounts": [
                {"account_id": "acct-a", "account_name": "Checking", "amount": 7500, "percentage": 75},
                {"account_id": "acct-b", "account_name": "Savings", "amount": 2500, "percentage": 25},
            ],
        }));
        let rendered = render_distribution(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("75%"));
            assert!(text.contains("25%"));
            assert!(text.contains("Checking"));
        }
    }
}
