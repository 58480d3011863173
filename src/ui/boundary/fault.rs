//! Render faults and their diagnostic descriptions.

use std::any::Any;
use std::error::Error as StdError;

use thiserror::Error;

/// Error a subtree's render function returns to its boundary.
#[derive(Debug, Error)]
pub enum RenderFault {
    /// Data the view depends on is absent.
    #[error("missing data: {what}")]
    MissingData { what: String },

    /// Data is present but cannot be shown.
    #[error("invalid view data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// How the fault surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// The render function returned `Err`.
    Returned,
    /// The render function panicked.
    Panicked,
}

/// Message and identity of the fault that tripped a boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescriptor {
    pub kind: FaultKind,
    pub message: String,
    /// Messages of the underlying causes, outermost first.
    pub source_chain: Vec<String>,
    /// `file:line:col` of a panic, when known.
    pub location: Option<String>,
}

impl ErrorDescriptor {
    pub fn from_fault(fault: &RenderFault) -> Self {
        let mut source_chain = Vec::new();
        let mut source = fault.source();
        while let Some(err) = source {
            source_chain.push(err.to_string());
            source = err.source();
        }
        Self {
            kind: FaultKind::Returned,
            message: fault.to_string(),
            source_chain,
            location: None,
        }
    }

    pub fn from_panic(payload: &(dyn Any + Send), location: Option<String>) -> Self {
        Self {
            kind: FaultKind::Panicked,
            message: panic_message(payload),
            source_chain: Vec::new(),
            location,
        }
    }
}

/// Diagnostic call path of a fault. Display only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructuredTrace {
    /// Boundary labels from the outermost active boundary to the one that
    /// caught the fault.
    pub component_path: Vec<String>,
    pub backtrace: String,
}

impl StructuredTrace {
    pub fn path_display(&self) -> String {
        self.component_path.join(" › ")
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "render panicked with a non-string payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn descriptor_records_source_chain() {
        let inner: anyhow::Result<()> = Err(anyhow::anyhow!("row 7 has no metric"));
        let err = inner.context("chart data rejected").unwrap_err();
        let fault = RenderFault::from(err);
        let descriptor = ErrorDescriptor::from_fault(&fault);

        assert_eq!(descriptor.kind, FaultKind::Returned);
        assert_eq!(descriptor.message, "chart data rejected");
        assert_eq!(descriptor.source_chain, vec!["row 7 has no metric".to_string()]);
    }

    #[test]
    fn missing_data_message() {
        let fault = RenderFault::MissingData {
            what: "conversation".into(),
        };
        assert_eq!(
            ErrorDescriptor::from_fault(&fault).message,
            "missing data: conversation"
        );
    }

    #[test]
    fn panic_payloads_are_described() {
        let static_payload: Box<dyn Any + Send> = Box::new("boom");
        let owned_payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        let opaque_payload: Box<dyn Any + Send> = Box::new(42_u8);

        assert_eq!(panic_message(static_payload.as_ref()), "boom");
        assert_eq!(panic_message(owned_payload.as_ref()), "bang");
        assert!(panic_message(opaque_payload.as_ref()).contains("non-string"));
    }

    #[test]
    fn path_display_joins_labels() {
        let trace = StructuredTrace {
            component_path: vec!["page".into(), "conversation".into()],
            backtrace: String::new(),
        };
        assert_eq!(trace.path_display(), "page › conversation");
    }
}
