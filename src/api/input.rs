use serde::{Deserialize, Serialize};

/// Identifier of a host-side UI control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlId(String);

impl ControlId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Generic value-changed binding for one host UI control.
///
/// The handler forwards the control's raw value verbatim on each dispatch;
/// parsing and clamping stay with the consumer.
pub struct InputHandler<F: FnMut(&str)> {
    control: ControlId,
    callback: F,
}

impl<F: FnMut(&str)> InputHandler<F> {
    pub fn new(control: ControlId, callback: F) -> Self {
        Self { control, callback }
    }

    #[must_use]
    pub fn control(&self) -> &ControlId {
        &self.control
    }

    /// Dispatches one value-change event from the host control.
    pub fn dispatch(&mut self, raw_value: &str) {
        (self.callback)(raw_value);
    }
}
