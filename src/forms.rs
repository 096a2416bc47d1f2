// src/forms.rs
//
// Motor genérico de formulários: valores, erros por campo, campos tocados e
// submissão guardada. O handler público de orçamento monta o formulário
// aqui antes de persistir.

pub mod rules;
pub mod state;

pub use rules::{FieldConfig, FieldValue, Rule};
pub use state::{FormConfig, FormModel, FormState, Submission};
