use crate::error::ValidationError;
use core_types::SalaryPayload;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// A free-form submission as typed by the user. Every field is a raw string;
/// blank optional fields map to absent band edges.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub role: String,
    pub year: String,
    pub salary: String,
    pub range_min: String,
    pub range_mid: String,
    pub range_max: String,
}

fn role_message() -> String {
    "Role is required (minimum 2 characters)".to_string()
}

fn year_range_message() -> String {
    format!("Year must be between {MIN_YEAR} and {MAX_YEAR}")
}

fn must_be_number(field: &str) -> String {
    format!("{field} must be a number")
}

fn must_be_positive(field: &str) -> String {
    format!("{field} must be positive")
}

fn check_role(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    // Characters, not bytes: a single multibyte character is still one
    // character short of the minimum.
    if trimmed.chars().count() < 2 {
        return Err(role_message());
    }
    Ok(trimmed.to_string())
}

fn check_year(year: i32) -> Result<i32, String> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(year_range_message());
    }
    Ok(year)
}

fn parse_year(raw: &str) -> Result<i32, String> {
    let year: i32 = raw
        .trim()
        .parse()
        .map_err(|_| "Year must be a whole number".to_string())?;
    check_year(year)
}

fn parse_positive(raw: &str, field: &str) -> Result<Decimal, String> {
    let value: Decimal = raw.trim().parse().map_err(|_| must_be_number(field))?;
    if value <= Decimal::ZERO {
        return Err(must_be_positive(field));
    }
    Ok(value)
}

fn parse_optional_positive(raw: &str, field: &str) -> Result<Option<Decimal>, String> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_positive(raw, field).map(Some)
}

/// Validates an interactive submission, aborting at the first failing rule.
pub fn validate_form(input: &FormInput) -> Result<SalaryPayload, ValidationError> {
    let role = check_role(&input.role).map_err(ValidationError::new)?;
    let year = parse_year(&input.year).map_err(ValidationError::new)?;
    let salary = parse_positive(&input.salary, "Salary").map_err(ValidationError::new)?;
    let range_mid =
        parse_positive(&input.range_mid, "Band midpoint").map_err(ValidationError::new)?;
    let range_min =
        parse_optional_positive(&input.range_min, "Band minimum").map_err(ValidationError::new)?;
    let range_max =
        parse_optional_positive(&input.range_max, "Band maximum").map_err(ValidationError::new)?;

    Ok(SalaryPayload {
        role,
        year,
        salary,
        range_min,
        range_mid,
        range_max,
    })
}

fn json_role(body: &Value) -> Result<String, String> {
    match body.get("role").and_then(Value::as_str) {
        Some(raw) => check_role(raw),
        None => Err(role_message()),
    }
}

fn json_year(body: &Value) -> Result<i32, String> {
    match body.get("year") {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(year) => check_year(year.try_into().map_err(|_| year_range_message())?),
            None => Err("Year must be a whole number".to_string()),
        },
        _ => Err("Year must be a whole number".to_string()),
    }
}

fn json_number(value: &Value, field: &str) -> Result<Decimal, String> {
    let parsed = value
        .as_f64()
        .and_then(Decimal::from_f64)
        .ok_or_else(|| must_be_number(field))?;
    if parsed <= Decimal::ZERO {
        return Err(must_be_positive(field));
    }
    Ok(parsed)
}

fn json_positive(body: &Value, key: &str, field: &str) -> Result<Decimal, String> {
    match body.get(key) {
        Some(value @ Value::Number(_)) => json_number(value, field),
        _ => Err(must_be_number(field)),
    }
}

fn json_optional_positive(
    body: &Value,
    key: &str,
    field: &str,
) -> Result<Option<Decimal>, String> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value @ Value::Number(_)) => json_number(value, field).map(Some),
        Some(_) => Err(must_be_number(field)),
    }
}

/// Validates a programmatic submission, aggregating every failing rule into
/// one comma-joined message.
pub fn validate_api(body: &Value) -> Result<SalaryPayload, ValidationError> {
    let mut issues = Vec::new();

    let role = json_role(body).map_err(|e| issues.push(e)).ok();
    let year = json_year(body).map_err(|e| issues.push(e)).ok();
    let salary = json_positive(body, "salary", "Salary")
        .map_err(|e| issues.push(e))
        .ok();
    let range_mid = json_positive(body, "range_mid", "Band midpoint")
        .map_err(|e| issues.push(e))
        .ok();
    let range_min = json_optional_positive(body, "range_min", "Band minimum")
        .map_err(|e| issues.push(e))
        .ok();
    let range_max = json_optional_positive(body, "range_max", "Band maximum")
        .map_err(|e| issues.push(e))
        .ok();

    if !issues.is_empty() {
        return Err(ValidationError::from_issues(issues));
    }

    // All six extractions succeeded if no issue was recorded.
    Ok(SalaryPayload {
        role: role.unwrap(),
        year: year.unwrap(),
        salary: salary.unwrap(),
        range_min: range_min.unwrap(),
        range_mid: range_mid.unwrap(),
        range_max: range_max.unwrap(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn valid_form() -> FormInput {
        FormInput {
            role: "Senior Engineer".to_string(),
            year: "2023".to_string(),
            salary: "120000".to_string(),
            range_min: "100000".to_string(),
            range_mid: "115000".to_string(),
            range_max: "130000".to_string(),
        }
    }

    #[test]
    fn form_accepts_a_complete_submission() {
        let payload = validate_form(&valid_form()).unwrap();
        assert_eq!(payload.role, "Senior Engineer");
        assert_eq!(payload.year, 2023);
        assert_eq!(payload.salary, dec!(120000));
        assert_eq!(payload.range_min, Some(dec!(100000)));
        assert_eq!(payload.range_mid, dec!(115000));
        assert_eq!(payload.range_max, Some(dec!(130000)));
    }

    #[test]
    fn form_maps_blank_band_edges_to_none() {
        let mut input = valid_form();
        input.range_min = "  ".to_string();
        input.range_max = String::new();

        let payload = validate_form(&input).unwrap();
        assert_eq!(payload.range_min, None);
        assert_eq!(payload.range_max, None);
    }

    #[test]
    fn form_surfaces_only_the_first_failure() {
        let mut input = valid_form();
        input.role = "A".to_string();
        input.salary = "lots".to_string();

        let err = validate_form(&input).unwrap_err();
        assert_eq!(err.message, "Role is required (minimum 2 characters)");
    }

    #[test]
    fn role_minimum_counts_characters_not_bytes() {
        let mut input = valid_form();
        input.role = "é".to_string();
        let err = validate_form(&input).unwrap_err();
        assert_eq!(err.message, "Role is required (minimum 2 characters)");

        input.role = "éé".to_string();
        assert!(validate_form(&input).is_ok());

        let body = serde_json::json!({
            "role": "é",
            "year": 2024,
            "salary": 150000,
            "range_mid": 145000
        });
        let err = validate_api(&body).unwrap_err();
        assert_eq!(err.message, "Role is required (minimum 2 characters)");
    }

    #[test]
    fn form_rejects_year_outside_bounds() {
        let mut input = valid_form();
        input.year = "1899".to_string();
        let err = validate_form(&input).unwrap_err();
        assert_eq!(err.message, "Year must be between 1900 and 2100");

        input.year = "twenty".to_string();
        let err = validate_form(&input).unwrap_err();
        assert_eq!(err.message, "Year must be a whole number");
    }

    #[test]
    fn form_rejects_non_positive_amounts() {
        let mut input = valid_form();
        input.salary = "-5".to_string();
        let err = validate_form(&input).unwrap_err();
        assert_eq!(err.message, "Salary must be positive");

        let mut input = valid_form();
        input.range_mid = "0".to_string();
        let err = validate_form(&input).unwrap_err();
        assert_eq!(err.message, "Band midpoint must be positive");
    }

    #[test]
    fn api_accepts_a_valid_body_and_tolerates_absent_edges() {
        let body = json!({
            "role": "Staff Engineer",
            "year": 2024,
            "salary": 150000,
            "range_mid": 145000
        });

        let payload = validate_api(&body).unwrap();
        assert_eq!(payload.role, "Staff Engineer");
        assert_eq!(payload.range_min, None);
        assert_eq!(payload.range_max, None);
        assert_eq!(payload.range_mid, dec!(145000));
    }

    #[test]
    fn api_aggregates_every_issue_comma_joined() {
        let body = json!({
            "role": "A",
            "year": "2024",
            "salary": "lots",
            "range_mid": -1
        });

        let err = validate_api(&body).unwrap_err();
        assert_eq!(
            err.message,
            "Role is required (minimum 2 characters), Year must be a whole number, \
             Salary must be a number, Band midpoint must be positive"
        );
    }

    #[test]
    fn api_rejects_a_short_role_only() {
        let body = json!({
            "role": "A",
            "year": 2024,
            "salary": 150000,
            "range_mid": 145000
        });

        let err = validate_api(&body).unwrap_err();
        assert_eq!(err.message, "Role is required (minimum 2 characters)");
    }

    #[test]
    fn api_rejects_fractional_years_and_non_numeric_edges() {
        let body = json!({
            "role": "Engineer",
            "year": 2024.5,
            "salary": 150000,
            "range_mid": 145000,
            "range_max": "high"
        });

        let err = validate_api(&body).unwrap_err();
        assert_eq!(
            err.message,
            "Year must be a whole number, Band maximum must be a number"
        );
    }
}
