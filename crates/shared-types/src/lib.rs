pub mod types;

pub use types::{
    Customizations, DocumentMetadata, FieldValues, GeneratedDocument, ValidationResult,
    WizardSnapshot,
};
