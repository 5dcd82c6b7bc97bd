//! Service layer providing candidate queries and commands on top of models.
//! - Separates business rules (empty-result and missing-id policy) from data access.
//! - Reuses validation and entity definitions in the `models` crate.

pub mod errors;
pub mod candidato;
pub mod usuario_service;
#[cfg(test)]
pub mod test_support;
