//! Error types for the min-stack crate

use thiserror::Error;

/// Errors that can occur while building or mutating a [`MinStack`](crate::MinStack)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("MinStack construction expects at most {expected} initializer, {received} received")]
    InvalidArgumentCount { expected: usize, received: usize },

    #[error("Can't push protected value {name}")]
    ProtectedValue { name: &'static str },

    #[error("Pushed value cannot be compared with the current minimum")]
    IncomparableValue,

    #[error("Trying to pop from an empty stack")]
    EmptyStackPop,

    #[error("Trying to take the minimum of an empty stack")]
    EmptyStackMin,
}

/// Errors from depth-sweep configuration and measurement
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    #[error("Need at least one stack depth to time min()")]
    NoDepths,

    #[error("Stack depth exceeds maximum: {depth} > {max}")]
    DepthTooLarge { depth: usize, max: usize },

    #[error("Invalid sweep parameters: {0}")]
    InvalidParameters(String),

    #[error("Stack error: {0}")]
    Stack(#[from] StackError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_fields() {
        let err = StackError::InvalidArgumentCount {
            expected: 1,
            received: 3,
        };
        assert_eq!(
            err.to_string(),
            "MinStack construction expects at most 1 initializer, 3 received"
        );

        let err = StackError::ProtectedValue {
            name: "MinStack::SENTINEL",
        };
        assert_eq!(err.to_string(), "Can't push protected value MinStack::SENTINEL");
    }

    #[test]
    fn test_stack_error_converts_into_sweep_error() {
        let err: SweepError = StackError::EmptyStackMin.into();
        assert!(matches!(err, SweepError::Stack(StackError::EmptyStackMin)));
    }
}
