use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    pub id: String,
}

/// Request body sent to the master node: `{"task":{"id":"<string>"}}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TaskSubmission {
    pub task: Task,
}

impl TaskSubmission {
    pub fn new(id: String) -> Self {
        Self { task: Task { id } }
    }
}

/// The slice of the master node's response we consume.
#[derive(Debug, Deserialize, Clone)]
pub struct SubmitResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn submission_body_shape() {
        let body = serde_json::to_value(TaskSubmission::new("T001".to_string())).unwrap();
        assert_eq!(body, json!({"task": {"id": "T001"}}));
    }

    #[test]
    fn submission_body_empty_id() {
        let body = serde_json::to_value(TaskSubmission::new(String::new())).unwrap();
        assert_eq!(body, json!({"task": {"id": ""}}));
    }

    #[test]
    fn submission_body_escapes_special_characters() {
        let id = "a\"b\\c\n\t{}";
        let body = serde_json::to_string(&TaskSubmission::new(id.to_string())).unwrap();
        let parsed: TaskSubmission = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.task.id, id);
    }

    #[test]
    fn response_parses_message() {
        let resp: SubmitResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert_eq!(resp.message, "ok");
    }

    #[test]
    fn response_ignores_extra_fields() {
        let resp: SubmitResponse =
            serde_json::from_str(r#"{"message":"queued","worker":"w1"}"#).unwrap();
        assert_eq!(resp.message, "queued");
    }

    #[test]
    fn response_without_message_is_an_error() {
        assert!(serde_json::from_str::<SubmitResponse>(r#"{"error":"boom"}"#).is_err());
    }
}
