//! Caller-selected ordering for candidate listings.

use std::str::FromStr;

use models::candidato::Column;
use sea_orm::Order;

use crate::errors::ServiceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(ServiceError::InvalidArgument(format!(
                "invalid sort direction '{s}'; expected ASC or DESC"
            ))),
        }
    }
}

impl From<SortDirection> for Order {
    fn from(d: SortDirection) -> Self {
        match d {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SortSpec {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Parse a JSON property name (or its column alias) plus a direction.
    pub fn parse(field: &str, direction: &str) -> Result<Self, ServiceError> {
        let column = sort_column(field.trim()).ok_or_else(|| {
            ServiceError::InvalidArgument(format!("unknown sort field '{field}'"))
        })?;
        Ok(Self { column, direction: direction.parse()? })
    }
}

impl Default for SortSpec {
    fn default() -> Self { Self { column: Column::Id, direction: SortDirection::Asc } }
}

fn sort_column(field: &str) -> Option<Column> {
    let col = match field {
        "id" => Column::Id,
        "nome" => Column::Nome,
        "nascimento" => Column::Nascimento,
        "dataCriacao" | "data_criacao" => Column::DataCriacao,
        "sexo" => Column::Sexo,
        "nota" => Column::Nota,
        "logradouro" => Column::Logradouro,
        "bairro" => Column::Bairro,
        "cidade" => Column::Cidade,
        "uf" => Column::Uf,
        _ => return None,
    };
    Some(col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_property_names_and_aliases() {
        let s = SortSpec::parse("dataCriacao", "desc").unwrap();
        assert!(matches!(s.column, Column::DataCriacao));
        assert_eq!(s.direction, SortDirection::Desc);
        assert!(matches!(SortSpec::parse("data_criacao", "ASC").unwrap().column, Column::DataCriacao));
        assert!(matches!(SortSpec::parse(" nota ", "Asc").unwrap().column, Column::Nota));
    }

    #[test]
    fn default_is_id_ascending() {
        let d = SortSpec::default();
        assert!(matches!(d.column, Column::Id));
        assert_eq!(d.direction, SortDirection::Asc);
    }

    #[test]
    fn rejects_unknown_field_or_direction() {
        assert!(matches!(SortSpec::parse("salario", "ASC"), Err(ServiceError::InvalidArgument(_))));
        assert!(matches!(SortSpec::parse("nome", "UP"), Err(ServiceError::InvalidArgument(_))));
        assert!(matches!(SortSpec::parse("Nome", "ASC"), Err(ServiceError::InvalidArgument(_))));
    }
}
