use crate::errors::{OpsError, OpsResult};

/// Request-scoped authorization context.
///
/// Built once per request by the authentication gate and handed to every
/// mutating operation. Reads do not need one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    authorized: bool,
}

impl Session {
    pub fn authorized() -> Self {
        Self { authorized: true }
    }

    pub fn anonymous() -> Self {
        Self { authorized: false }
    }

    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    pub fn require_authorized(&self) -> OpsResult<()> {
        if self.authorized {
            Ok(())
        } else {
            Err(OpsError::Unauthorized(
                "write operations require an authorized session".to_string(),
            ))
        }
    }
}
