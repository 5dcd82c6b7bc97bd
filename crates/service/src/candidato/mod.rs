pub mod sorting;
pub mod repository;
pub mod service;

pub use repository::{CandidatoFilter, CandidatoRepository, SeaOrmCandidatoRepository};
pub use service::CandidatoService;
pub use sorting::{SortDirection, SortSpec};
