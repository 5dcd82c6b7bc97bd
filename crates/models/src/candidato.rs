use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::ModelError;

pub const NOME_MAX_LEN: usize = 100;
pub const LOGRADOURO_MAX_LEN: usize = 200;
pub const BAIRRO_MAX_LEN: usize = 50;
pub const CIDADE_MAX_LEN: usize = 50;
pub const DEFAULT_SEXO: &str = "M";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "tb_candidatos")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nome: String,
    /// `nome` case-folded in Rust; name search compares against this column
    /// so folding does not depend on the backend's `LOWER()`.
    #[serde(skip)]
    pub nome_busca: String,
    pub nascimento: Date,
    #[serde(serialize_with = "serialize_as_date")]
    pub data_criacao: DateTimeWithTimeZone,
    pub sexo: String,
    pub nota: i32,
    pub logradouro: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub uf: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The creation timestamp is rendered as its calendar date (`yyyy-MM-dd`).
fn serialize_as_date<S: Serializer>(ts: &DateTimeWithTimeZone, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&ts.format("%Y-%m-%d"))
}

/// Candidate record as received from a client. Every field is optional so
/// missing values surface as validation errors rather than decode failures.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatoInput {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub nascimento: Option<Date>,
    #[serde(default)]
    pub sexo: Option<String>,
    #[serde(default)]
    pub nota: Option<i32>,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub cidade: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
}

/// Validated, writable candidate fields (everything but `id` and `data_criacao`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCandidato {
    pub nome: String,
    pub nascimento: Date,
    pub sexo: String,
    pub nota: i32,
    pub logradouro: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub uf: Option<String>,
}

pub fn validate_nome(nome: Option<&str>) -> Result<String, ModelError> {
    let nome = nome.map(str::trim).unwrap_or_default();
    if nome.is_empty() {
        return Err(ModelError::Validation("nome is required".into()));
    }
    if nome.chars().count() > NOME_MAX_LEN {
        return Err(ModelError::Validation(format!("nome must be at most {NOME_MAX_LEN} characters")));
    }
    Ok(nome.to_string())
}

pub fn validate_sexo(sexo: Option<&str>) -> Result<String, ModelError> {
    match sexo.map(str::trim) {
        None | Some("") => Ok(DEFAULT_SEXO.to_string()),
        Some(s) if s.chars().count() == 1 => Ok(s.to_string()),
        Some(_) => Err(ModelError::Validation("sexo must be a single character".into())),
    }
}

pub fn validate_uf(uf: Option<&str>) -> Result<Option<String>, ModelError> {
    match uf.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()) => Ok(Some(s.to_ascii_uppercase())),
        Some(_) => Err(ModelError::Validation("uf must be a 2-letter state code".into())),
    }
}

/// Unicode case fold shared by stored search keys and search input.
pub fn search_key(text: &str) -> String {
    text.to_lowercase()
}

fn optional_text(field: &str, value: Option<&str>, max: usize) -> Result<Option<String>, ModelError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.chars().count() > max => {
            Err(ModelError::Validation(format!("{field} must be at most {max} characters")))
        }
        Some(s) => Ok(Some(s.to_string())),
    }
}

/// Check every field of a client record and normalize it for storage.
/// `id` is ignored here; callers decide whether it is required.
pub fn validate(input: &CandidatoInput) -> Result<NewCandidato, ModelError> {
    let nome = validate_nome(input.nome.as_deref())?;
    let nascimento = input
        .nascimento
        .ok_or_else(|| ModelError::Validation("nascimento is required".into()))?;
    let sexo = validate_sexo(input.sexo.as_deref())?;
    let nota = input
        .nota
        .ok_or_else(|| ModelError::Validation("nota is required".into()))?;
    Ok(NewCandidato {
        nome,
        nascimento,
        sexo,
        nota,
        logradouro: optional_text("logradouro", input.logradouro.as_deref(), LOGRADOURO_MAX_LEN)?,
        bairro: optional_text("bairro", input.bairro.as_deref(), BAIRRO_MAX_LEN)?,
        cidade: optional_text("cidade", input.cidade.as_deref(), CIDADE_MAX_LEN)?,
        uf: validate_uf(input.uf.as_deref())?,
    })
}

/// Insert a new candidate; the store assigns `id` and the creation timestamp.
pub async fn create(db: &DatabaseConnection, new: NewCandidato) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        nome_busca: Set(search_key(&new.nome)),
        nome: Set(new.nome),
        nascimento: Set(new.nascimento),
        data_criacao: Set(Utc::now().into()),
        sexo: Set(new.sexo),
        nota: Set(new.nota),
        logradouro: Set(new.logradouro),
        bairro: Set(new.bairro),
        cidade: Set(new.cidade),
        uf: Set(new.uf),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every writable field of an existing candidate.
/// Returns `Ok(None)` when `id` is unknown; nothing is written in that case.
pub async fn overwrite(db: &DatabaseConnection, id: i64, new: NewCandidato) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    am.nome_busca = Set(search_key(&new.nome));
    am.nome = Set(new.nome);
    am.nascimento = Set(new.nascimento);
    am.sexo = Set(new.sexo);
    am.nota = Set(new.nota);
    am.logradouro = Set(new.logradouro);
    am.bairro = Set(new.bairro);
    am.cidade = Set(new.cidade);
    am.uf = Set(new.uf);
    Ok(Some(am.update(db).await?))
}

/// Remove a candidate by id; `false` when no row matched.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> CandidatoInput {
        CandidatoInput {
            nome: Some("Ana".into()),
            nascimento: Date::from_ymd_opt(1990, 1, 1),
            sexo: Some("F".into()),
            nota: Some(8),
            ..Default::default()
        }
    }

    #[test]
    fn valid_input_is_normalized() {
        let mut input = ana();
        input.nome = Some("  Ana Maria ".into());
        input.uf = Some("sp".into());
        input.cidade = Some("   ".into());
        let new = validate(&input).unwrap();
        assert_eq!(new.nome, "Ana Maria");
        assert_eq!(new.uf.as_deref(), Some("SP"));
        assert_eq!(new.cidade, None);
    }

    #[test]
    fn sexo_defaults_to_m() {
        let mut input = ana();
        input.sexo = None;
        assert_eq!(validate(&input).unwrap().sexo, "M");
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let mut no_nome = ana();
        no_nome.nome = Some(" ".into());
        assert!(matches!(validate(&no_nome), Err(ModelError::Validation(_))));

        let mut no_date = ana();
        no_date.nascimento = None;
        assert!(matches!(validate(&no_date), Err(ModelError::Validation(_))));

        let mut no_nota = ana();
        no_nota.nota = None;
        assert!(matches!(validate(&no_nota), Err(ModelError::Validation(_))));
    }

    #[test]
    fn length_limits_are_enforced() {
        let mut long_name = ana();
        long_name.nome = Some("a".repeat(NOME_MAX_LEN + 1));
        assert!(validate(&long_name).is_err());

        let mut exact = ana();
        exact.nome = Some("é".repeat(NOME_MAX_LEN));
        assert!(validate(&exact).is_ok());

        let mut bairro = ana();
        bairro.bairro = Some("b".repeat(BAIRRO_MAX_LEN + 1));
        assert!(validate(&bairro).is_err());

        let mut sexo = ana();
        sexo.sexo = Some("FM".into());
        assert!(validate(&sexo).is_err());

        let mut uf = ana();
        uf.uf = Some("S1".into());
        assert!(validate(&uf).is_err());
    }

    #[test]
    fn input_parses_camel_case_json_and_ignores_server_fields() {
        let input: CandidatoInput = serde_json::from_value(serde_json::json!({
            "nome": "Ana",
            "nascimento": "1990-01-01",
            "dataCriacao": "2020-01-01",
            "sexo": "F",
            "nota": 8
        }))
        .unwrap();
        assert_eq!(input.id, None);
        assert_eq!(input.nascimento, Date::from_ymd_opt(1990, 1, 1));
    }

    #[test]
    fn model_serializes_dates_as_yyyy_mm_dd() {
        let created = chrono::DateTime::parse_from_rfc3339("2024-03-05T10:11:12-03:00").unwrap();
        let m = Model {
            id: 7,
            nome: "Ana".into(),
            nome_busca: "ana".into(),
            nascimento: Date::from_ymd_opt(1990, 1, 1).unwrap(),
            data_criacao: created,
            sexo: "F".into(),
            nota: 8,
            logradouro: None,
            bairro: None,
            cidade: Some("Recife".into()),
            uf: Some("PE".into()),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["nascimento"], "1990-01-01");
        assert_eq!(json["dataCriacao"], "2024-03-05");
        assert_eq!(json["cidade"], "Recife");
        assert!(json["logradouro"].is_null());
        assert!(json.get("nomeBusca").is_none());
    }

    #[test]
    fn search_key_folds_accented_capitals() {
        assert_eq!(search_key("Érica ÂNGELA"), "érica ângela");
        assert_eq!(search_key("joão"), "joão");
    }
}
