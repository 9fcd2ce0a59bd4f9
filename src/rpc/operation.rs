/// Remote operation that opens a session and returns a token.
pub const OPEN_OPERATION: &str = "login";
/// Remote operation that releases the session token.
pub const CLOSE_OPERATION: &str = "logout";

/// Operation category, resolved once per dispatch so the three special
/// branches stay exhaustive instead of living in scattered string
/// comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Open,
    Close,
    Business(String),
}

impl Operation {
    pub fn resolve(name: &str) -> Self {
        match name {
            OPEN_OPERATION => Self::Open,
            CLOSE_OPERATION => Self::Close,
            other => Self::Business(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Open => OPEN_OPERATION,
            Self::Close => CLOSE_OPERATION,
            Self::Business(name) => name,
        }
    }

    /// Session bookkeeping operations are excluded from diagnostics and
    /// from auto-open.
    pub fn is_meta(&self) -> bool {
        matches!(self, Self::Open | Self::Close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_operations_resolve_to_their_variants() {
        assert_eq!(Operation::resolve("login"), Operation::Open);
        assert_eq!(Operation::resolve("logout"), Operation::Close);
    }

    #[test]
    fn everything_else_is_a_business_operation() {
        let op = Operation::resolve("contactCreate");
        assert_eq!(op, Operation::Business("contactCreate".to_string()));
        assert_eq!(op.name(), "contactCreate");
        assert!(!op.is_meta());
    }
}
