/// Outcome of evaluating a value against a set of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every rule passed.
    #[default]
    Valid,
    /// One or more rules failed, with their messages in rule order.
    Invalid(Vec<String>),
}

impl ValidationOutcome {
    /// Build an outcome from collected failure messages.
    pub fn from_messages(messages: Vec<String>) -> Self {
        if messages.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(messages)
        }
    }

    /// Check if every rule passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Consume the outcome, returning the failure messages.
    pub fn into_messages(self) -> Vec<String> {
        match self {
            Self::Valid => Vec::new(),
            Self::Invalid(messages) => messages,
        }
    }
}
