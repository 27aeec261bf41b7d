//! JSON envelope returned to API callers.

use serde::Serialize;

use db::{LeadFetch, LeadRow};

/// Message attached to the envelope when the store holds no leads.
pub const NO_RECORDS_MESSAGE: &str = "No records registered";

/// `{"data": [...]}`, with a `message` alongside an empty `data` array.
///
/// `data` is always present so callers only ever deal with one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadsResponse {
    pub data: Vec<LeadRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<LeadFetch> for LeadsResponse {
    fn from(fetch: LeadFetch) -> Self {
        match fetch {
            LeadFetch::Found(data) => Self { data, message: None },
            LeadFetch::Empty => Self {
                data: Vec::new(),
                message: Some(NO_RECORDS_MESSAGE.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn populated_envelope_has_no_message() {
        let rows = vec![LeadRow {
            id: 1,
            created: Some("2024-01-01".into()),
            customer: Some("Acme".into()),
            cluster: None,
        }];
        let body = serde_json::to_value(LeadsResponse::from(LeadFetch::Found(rows))).unwrap();

        assert_eq!(
            body,
            json!({ "data": [{ "id": 1, "created": "2024-01-01", "customer": "Acme", "cluster": null }] })
        );
    }

    #[test]
    fn empty_envelope_keeps_data_and_adds_message() {
        let body = serde_json::to_value(LeadsResponse::from(LeadFetch::Empty)).unwrap();
        assert_eq!(body, json!({ "data": [], "message": "No records registered" }));
    }
}
