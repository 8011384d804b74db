use crate::domain::{AppError, TemplateKind};

/// Read access to the operator-editable nginx templates.
pub trait TemplateStore {
    /// Load the template's full text. A missing template is
    /// `AppError::TemplateNotFound`, never an empty document.
    fn load(&self, kind: TemplateKind) -> Result<String, AppError>;
}
