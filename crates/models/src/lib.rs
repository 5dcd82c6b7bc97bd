//! SeaORM entities, connection helpers and record validation.

pub mod errors;
pub mod db;
pub mod candidato;
pub mod usuario;

#[cfg(test)]
mod tests;
