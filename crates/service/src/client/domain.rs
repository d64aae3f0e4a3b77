use chrono::NaiveDate;
use models::client;
use serde::{Deserialize, Serialize};

/// Fields shared by every client shape. Request and response DTOs embed
/// this rather than extending one another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientFields {
    pub name: String,
    pub email: String,
    #[serde(alias = "eventType")]
    pub event_type: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub date: NaiveDate,
}

/// Create input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClientInput {
    #[serde(flatten)]
    pub fields: ClientFields,
}

/// Full-replacement update input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateClientInput {
    #[serde(flatten)]
    pub fields: ClientFields,
}

/// Stored client as returned to API callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientResponse {
    pub id: i32,
    #[serde(flatten)]
    pub fields: ClientFields,
}

impl From<client::Model> for ClientResponse {
    fn from(m: client::Model) -> Self {
        Self {
            id: m.id,
            fields: ClientFields {
                name: m.name,
                email: m.email,
                event_type: m.event_type,
                address: m.address,
                city: m.city,
                state: m.state,
                date: m.date,
            },
        }
    }
}

/// Event date ordering for the sorted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_input_accepts_both_event_type_spellings() {
        let snake: CreateClientInput = serde_json::from_value(json!({
            "name": "A", "email": "a@example.com", "event_type": "gala",
            "address": "1 Main", "city": "Dover", "state": "de", "date": "2025-05-01"
        }))
        .unwrap();
        let camel: CreateClientInput = serde_json::from_value(json!({
            "name": "A", "email": "a@example.com", "eventType": "gala",
            "address": "1 Main", "city": "Dover", "state": "de", "date": "2025-05-01"
        }))
        .unwrap();
        assert_eq!(snake.fields, camel.fields);
        assert_eq!(snake.fields.date, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
    }

    #[test]
    fn missing_event_type_is_rejected() {
        let res = serde_json::from_value::<CreateClientInput>(json!({
            "name": "A", "email": "a@example.com",
            "address": "1 Main", "city": "Dover", "state": "de", "date": "2025-05-01"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn response_is_flat_json() {
        let r = ClientResponse {
            id: 7,
            fields: ClientFields {
                name: "B".into(),
                email: "b@example.com".into(),
                event_type: "party".into(),
                address: "2 Oak".into(),
                city: "Trenton".into(),
                state: "NJ".into(),
                date: NaiveDate::from_ymd_opt(2025, 8, 9).unwrap(),
            },
        };
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["id"], 7);
        assert_eq!(v["state"], "NJ");
        assert_eq!(v["date"], "2025-08-09");
        assert!(v.get("fields").is_none());
    }

    #[test]
    fn sort_direction_is_lowercase_on_the_wire() {
        let d: SortDirection = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(d, SortDirection::Desc);
        assert!(serde_json::from_str::<SortDirection>("\"up\"").is_err());
    }
}
