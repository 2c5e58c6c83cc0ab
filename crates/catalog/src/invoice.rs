use serde::{Deserialize, Serialize};

use playbill_core::PlayId;

/// One staging of a play for a given audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's bill. Performance order only drives statement line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse a JSON array of invoices (batch file).
    pub fn list_from_json_str(json: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_invoice_with_play_id_field() {
        let invoice = Invoice::from_json_str(
            r#"{"customer": "BigCo", "performances": [{"playID": "hamlet", "audience": 55}]}"#,
        )
        .unwrap();

        assert_eq!(invoice.customer, "BigCo");
        assert_eq!(invoice.performances, vec![Performance::new("hamlet", 55)]);
    }

    #[test]
    fn parses_invoice_batch_in_order() {
        let invoices = Invoice::list_from_json_str(
            r#"[
                {"customer": "BigCo", "performances": []},
                {"customer": "SmallCo", "performances": [{"playID": "as-like", "audience": 12}]}
            ]"#,
        )
        .unwrap();

        let customers: Vec<_> = invoices.iter().map(|i| i.customer.as_str()).collect();
        assert_eq!(customers, ["BigCo", "SmallCo"]);
    }

    #[test]
    fn blank_play_id_is_rejected() {
        let err = Invoice::from_json_str(
            r#"{"customer": "BigCo", "performances": [{"playID": "", "audience": 10}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("PlayId: must not be empty"));
    }

    #[test]
    fn negative_audience_is_rejected() {
        let res = Invoice::from_json_str(
            r#"{"customer": "BigCo", "performances": [{"playID": "hamlet", "audience": -1}]}"#,
        );
        assert!(res.is_err());
    }
}
