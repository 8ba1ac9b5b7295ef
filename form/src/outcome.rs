use errors::FailurePayload;
use serde_json::Value;

/// What a submit left on display.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The backend's response body, verbatim.
    Success(Value),
    /// Any failure, folded into the generic placeholder.
    Failure(FailurePayload)
}

impl SubmitOutcome {
    #[must_use]
    pub fn failure() -> Self {
        Self::Failure(FailurePayload::default())
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The JSON shown to the user.
    #[must_use]
    pub fn display_value(&self) -> Value {
        match self {
            Self::Success(value) => value.clone(),
            Self::Failure(payload) => payload.to_value()
        }
    }

    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        let value = self.display_value();
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display_value() {
        assert_eq!(
            SubmitOutcome::failure().display_value(),
            serde_json::json!({ "error": "Network Error or API issue" })
        );
        assert!(!SubmitOutcome::failure().is_success());
    }

    #[test]
    fn test_success_pretty_json() {
        let outcome = SubmitOutcome::Success(serde_json::json!({ "a": [1, 2] }));
        assert!(outcome.is_success());
        assert_eq!(outcome.to_pretty_json(), "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }
}
