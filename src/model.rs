//! Wire model for employee records and payload normalization.
//!
//! The API is loose about shapes: the list endpoint returns an array, the
//! lookup endpoint returns either a single object or an array, and `null`
//! stands in for "nothing". [`Payload`] captures the three shapes and
//! [`normalize`] folds them into a uniform row sequence. Every record field
//! defaults independently so partial objects decode instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An identifier field that arrives as either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Ident {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ident::Number(n) => write!(f, "{n}"),
            Ident::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One employee as returned by the service.
///
/// All fields are optional on the wire. `salary` keeps the exact digits the
/// server sent (the backend serializes decimals).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRecord {
    pub employee_id: Option<Ident>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub salary: Option<serde_json::Number>,
    pub department_id: Option<Ident>,
    pub job_id: Option<String>,
}

impl EmployeeRecord {
    /// Table cells in display order. Missing fields become empty strings,
    /// never the literal "null".
    pub fn row_cells(&self) -> [String; 7] {
        [
            display_or_empty(self.employee_id.as_ref()),
            self.first_name.clone().unwrap_or_default(),
            self.last_name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.phone_number.clone().unwrap_or_default(),
            display_or_empty(self.salary.as_ref()),
            display_or_empty(self.department_id.as_ref()),
        ]
    }
}

fn display_or_empty<T: fmt::Display>(value: Option<&T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Successful response body of the list or lookup endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Many(Vec<EmployeeRecord>),
    One(EmployeeRecord),
    /// A literal `null` body.
    Empty,
}

/// Fold a heterogeneous payload into a uniform row sequence.
///
/// Sequences pass through unchanged, a single record becomes a one-element
/// sequence, `null` becomes the empty sequence.
pub fn normalize(payload: Payload) -> Vec<EmployeeRecord> {
    match payload {
        Payload::Many(records) => records,
        Payload::One(record) => vec![record],
        Payload::Empty => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> Payload {
        serde_json::from_str(body).expect("payload decodes")
    }

    #[test]
    fn record_decodes_numeric_and_string_ids() {
        let numeric: EmployeeRecord =
            serde_json::from_str(r#"{"employeeId": 7, "departmentId": 30}"#).unwrap();
        assert_eq!(numeric.row_cells()[0], "7");
        assert_eq!(numeric.row_cells()[6], "30");

        let text: EmployeeRecord =
            serde_json::from_str(r#"{"employeeId": "E-7"}"#).unwrap();
        assert_eq!(text.row_cells()[0], "E-7");
    }

    #[test]
    fn missing_and_null_fields_render_empty() {
        let record: EmployeeRecord =
            serde_json::from_str(r#"{"firstName": null, "salary": 1234.5}"#).unwrap();
        let cells = record.row_cells();
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[1], "");
        assert_eq!(cells[2], "");
        assert_eq!(cells[5], "1234.5");
        assert!(cells.iter().all(|c| c != "null" && c != "undefined"));
    }

    #[test]
    fn row_cells_follow_column_order() {
        let record: EmployeeRecord = serde_json::from_str(
            r#"{
                "employeeId": 1,
                "firstName": "Ann",
                "lastName": "Ito",
                "email": "ann@example.com",
                "phoneNumber": "555-0100",
                "salary": 50000,
                "departmentId": 10,
                "jobId": "IT_PROG"
            }"#,
        )
        .unwrap();
        assert_eq!(
            record.row_cells(),
            [
                "1".to_string(),
                "Ann".to_string(),
                "Ito".to_string(),
                "ann@example.com".to_string(),
                "555-0100".to_string(),
                "50000".to_string(),
                "10".to_string(),
            ]
        );
        // jobId never gets a table column; it only shows in the details pane.
        assert_eq!(record.job_id.as_deref(), Some("IT_PROG"));
    }

    #[test]
    fn payload_shapes_decode() {
        assert!(matches!(decode("[]"), Payload::Many(v) if v.is_empty()));
        assert!(matches!(decode(r#"[{"employeeId": 1}]"#), Payload::Many(v) if v.len() == 1));
        assert!(matches!(decode(r#"{"employeeId": 1}"#), Payload::One(_)));
        assert!(matches!(decode("null"), Payload::Empty));
        assert!(serde_json::from_str::<Payload>("42").is_err());
    }

    #[test]
    fn normalize_is_idempotent() {
        let record: EmployeeRecord = serde_json::from_str(r#"{"employeeId": 1}"#).unwrap();

        let once = normalize(Payload::One(record.clone()));
        assert_eq!(once, vec![record.clone()]);
        let twice = normalize(Payload::Many(once.clone()));
        assert_eq!(twice, once);

        assert!(normalize(Payload::Empty).is_empty());
        assert!(normalize(Payload::Many(Vec::new())).is_empty());
    }
}
