//! Error macros for mazegraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}

/// Macro for creating maze parse errors
#[macro_export]
macro_rules! bail_maze {
    ($line:expr, $reason:expr) => {
        return Err($crate::error::GraphError::invalid_maze($line, $reason))
    };
}
