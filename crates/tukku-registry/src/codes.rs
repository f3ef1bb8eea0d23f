//! Login code map parsing.

use std::collections::HashMap;

use crate::error::StoreError;

/// Finite mapping from opaque login code to client id.
///
/// Parsed once at process start from configuration; not request-mutable.
#[derive(Debug, Clone, Default)]
pub struct LoginCodeMap {
    by_code: HashMap<String, String>,
}

impl LoginCodeMap {
    /// Parse `clientA:CODE-A,clientB:CODE-B` into a code → client-id map.
    ///
    /// Codes must be unique: two clients sharing a code would make login
    /// resolution ambiguous, so a duplicate is rejected as a configuration
    /// error. The error never echoes the code itself.
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        let mut by_code = HashMap::new();
        for pair in raw.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
            let (client_id, code) = pair
                .split_once(':')
                .ok_or_else(|| StoreError::CodeMap(format!("expected clientId:code in '{pair}'")))?;
            let (client_id, code) = (client_id.trim(), code.trim());
            if client_id.is_empty() || code.is_empty() {
                return Err(StoreError::CodeMap(format!("empty field in '{pair}'")));
            }
            if by_code.insert(code.to_string(), client_id.to_string()).is_some() {
                return Err(StoreError::CodeMap(format!(
                    "duplicate login code for client {client_id}"
                )));
            }
        }
        Ok(Self { by_code })
    }

    /// Exact-match resolution; unknown codes yield `None`.
    pub fn resolve(&self, code: &str) -> Option<&str> {
        self.by_code.get(code).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
