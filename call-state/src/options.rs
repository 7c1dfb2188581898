use serde::Deserialize;

/// What to do when `call` is invoked while a previous invocation is still in
/// flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reentrancy {
    /// Let both run. Each one updates state when it settles, so whichever
    /// settles last wins.
    #[default]
    LastWriteWins,
    /// Refuse the new call with [`CallError::InFlight`](crate::CallError)
    /// without touching state or invoking callbacks.
    RejectWhileLoading,
}

/// Per-controller settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CallOptions {
    pub reentrancy: Reentrancy,
    /// Name attached to log events for this call.
    pub label: String,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            reentrancy: Reentrancy::default(),
            label: "api_call".to_string(),
        }
    }
}

impl CallOptions {
    pub fn reentrancy(mut self, reentrancy: Reentrancy) -> Self {
        self.reentrancy = reentrancy;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
