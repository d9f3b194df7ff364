use crate::resolver::Line;

/// Errors a user can trigger while binding names.
///
/// Everything else that can go wrong in this crate is a bug in an upstream pass and goes
/// through [`internal_error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("{line}: Tried to create an identifier '{name}' that already exists on the block")]
    DuplicateIdentifier { name: String, line: Line },
}

impl ResolveError {
    pub fn duplicate_identifier(name: impl Into<String>, line: Line) -> Self {
        Self::DuplicateIdentifier {
            name: name.into(),
            line,
        }
    }
}

/// Abort on a broken internal invariant.
///
/// These are never caused by user input, so there is nothing to recover: we log and panic.
#[track_caller]
pub(crate) fn internal_error(msg: &str) -> ! {
    tracing::error!(msg, "internal invariant violated");
    panic!("Internal error: {msg}")
}
