use serde::Deserialize;

use crate::error::PollError;

/// One homework entry from the status API. Fields stay optional until
/// `parse_status` checks them, so a partial entry surfaces as a parsing
/// error rather than a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeworkRecord {
    #[serde(alias = "homework_name")]
    pub name: Option<String>,
    pub status: Option<String>,
}

/// The closed set of review states the API reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Renders the notification text for a homework entry.
pub fn parse_status(homework: &HomeworkRecord) -> Result<String, PollError> {
    let name = homework
        .name
        .as_deref()
        .ok_or_else(|| PollError::Parsing("homework entry has no name".into()))?;
    let status = homework
        .status
        .as_deref()
        .ok_or_else(|| PollError::Parsing(format!("homework \"{name}\" has no status")))?;
    let verdict = HomeworkStatus::parse(status)
        .ok_or_else(|| PollError::Parsing(format!("unknown homework status `{status}`")))?
        .verdict();
    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: Option<&str>, status: Option<&str>) -> HomeworkRecord {
        HomeworkRecord {
            name: name.map(Into::into),
            status: status.map(Into::into),
        }
    }

    #[test]
    fn approved_message() {
        let message = parse_status(&record(Some("hw1"), Some("approved"))).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn reviewing_and_rejected_verdicts() {
        let reviewing = parse_status(&record(Some("hw2"), Some("reviewing"))).unwrap();
        assert!(reviewing.ends_with("Работа взята на проверку ревьюером."));

        let rejected = parse_status(&record(Some("hw2"), Some("rejected"))).unwrap();
        assert!(rejected.ends_with("Работа проверена: у ревьюера есть замечания."));
    }

    #[test]
    fn unknown_status_is_a_parsing_error() {
        let err = parse_status(&record(Some("hw1"), Some("lost"))).unwrap_err();
        assert!(matches!(err, PollError::Parsing(_)));
        assert!(err.to_string().contains("lost"));
    }

    #[test]
    fn missing_status_is_a_parsing_error() {
        let err = parse_status(&record(Some("hw1"), None)).unwrap_err();
        assert!(matches!(err, PollError::Parsing(_)));
    }

    #[test]
    fn missing_name_is_a_parsing_error() {
        let err = parse_status(&record(None, Some("approved"))).unwrap_err();
        assert!(matches!(err, PollError::Parsing(_)));
    }

    #[test]
    fn accepts_the_long_server_field_name() {
        let record: HomeworkRecord =
            serde_json::from_value(json!({"homework_name": "hw1", "status": "reviewing"}))
                .unwrap();
        assert_eq!(record.name.as_deref(), Some("hw1"));
    }
}
