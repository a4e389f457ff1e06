/// Convenience result type used across the annual wheel crate.
pub type WheelResult<T> = Result<T, WheelError>;

/// Top-level error taxonomy used by layout, model and render APIs.
#[derive(thiserror::Error, Debug)]
pub enum WheelError {
    /// Invalid user-provided wheel, theme or settings data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A month value outside `0..=11` reached the layout engine.
    ///
    /// The whole batch is rejected; nothing is clamped.
    #[error("invalid month index {index}{}", fmt_event_id(.event_id))]
    InvalidMonthIndex {
        /// The offending month value as supplied.
        index: i64,
        /// Event that carried the value, when known.
        event_id: Option<i64>,
    },

    /// Errors while producing SVG or raster output.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn fmt_event_id(event_id: &Option<i64>) -> String {
    match event_id {
        Some(id) => format!(" (event {id})"),
        None => String::new(),
    }
}

impl WheelError {
    /// Build a [`WheelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WheelError::InvalidMonthIndex`] value.
    pub fn invalid_month(index: i64, event_id: Option<i64>) -> Self {
        Self::InvalidMonthIndex { index, event_id }
    }

    /// Build a [`WheelError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`WheelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for WheelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
