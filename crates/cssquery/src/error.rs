/// Compilation hit a selector or combinator variant this engine does not
/// implement.
///
/// This is a reported failure, distinct from a no-match: an unregistered type
/// name or an empty attribute-operator operand compiles to a stage that
/// matches nothing, while an unsupported construct must surface here so
/// callers can tell "nothing matched" from "not implemented".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported selector construct: {construct}")]
pub struct UnsupportedSelector {
    /// Human-readable name of the unhandled construct, e.g. `":not()"`.
    pub construct: String,
}

impl UnsupportedSelector {
    pub fn new(construct: impl Into<String>) -> Self {
        Self {
            construct: construct.into(),
        }
    }
}
