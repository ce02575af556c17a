use crate::dtos::NextInjectionDTO;
use serde::{Deserialize, Serialize};

pub mod send_injection_notifications {
    use super::*;

    #[derive(Deserialize, Serialize, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub notifications_sent: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub error: Option<String>,
    }

    impl APIResponse {
        pub fn sent(notifications_sent: usize) -> Self {
            Self {
                success: true,
                notifications_sent: Some(notifications_sent),
                error: None,
            }
        }

        pub fn failed(error: String) -> Self {
            Self {
                success: false,
                notifications_sent: None,
                error: Some(error),
            }
        }
    }
}

pub mod get_next_injections {
    use super::*;

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub injections: Vec<NextInjectionDTO>,
    }

    impl APIResponse {
        pub fn new(injections: Vec<NextInjectionDTO>) -> Self {
            Self { injections }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_run_omits_error() {
        let body = serde_json::to_value(send_injection_notifications::APIResponse::sent(2)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "success": true, "notificationsSent": 2 })
        );
    }

    #[test]
    fn failed_run_omits_count() {
        let body = serde_json::to_value(send_injection_notifications::APIResponse::failed(
            "Missing environment variables: EMAIL_HOST".into(),
        ))
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "error": "Missing environment variables: EMAIL_HOST"
            })
        );
    }
}
