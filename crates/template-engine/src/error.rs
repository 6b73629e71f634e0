use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found for document type: {0}")]
    TemplateNotFound(String),
}
