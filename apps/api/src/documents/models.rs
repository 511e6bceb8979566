// JSON body accepted by every generation endpoint.
//
// All fields are optional. A missing or null field becomes "", numbers and
// booleans are accepted and printed as sent; callers routinely post RENAVAM
// and year as numbers.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::documents::spec::{
    CompanyRecord, DocumentSpec, DocumentType, GranteeMode, Grantees, Grantor, GrantorFormat,
    PersonRecord, VehicleDescriptor, VehicleFormat,
};

fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_text)
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        other => Some(value_text(other)),
    })
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GranteeEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub nome: String,
    #[serde(deserialize_with = "lenient_string")]
    pub nacionalidade: String,
    #[serde(deserialize_with = "lenient_string")]
    pub cpf: String,
    #[serde(deserialize_with = "lenient_string")]
    pub endereco: String,
}

impl From<GranteeEntry> for PersonRecord {
    fn from(entry: GranteeEntry) -> Self {
        PersonRecord {
            name: entry.nome,
            nationality: entry.nacionalidade,
            cpf: entry.cpf,
            address: entry.endereco,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub outorgante_nome: String,
    #[serde(deserialize_with = "lenient_string")]
    pub outorgante_nacionalidade: String,
    #[serde(deserialize_with = "lenient_string")]
    pub outorgante_cpf: String,
    #[serde(deserialize_with = "lenient_string")]
    pub outorgante_endereco: String,
    #[serde(deserialize_with = "lenient_string")]
    pub outorgante_razao_social: String,
    #[serde(deserialize_with = "lenient_string")]
    pub outorgante_cnpj: String,

    #[serde(deserialize_with = "lenient_string")]
    pub outorgado_nome: String,
    #[serde(deserialize_with = "lenient_string")]
    pub outorgado_nacionalidade: String,
    #[serde(deserialize_with = "lenient_string")]
    pub outorgado_cpf: String,
    #[serde(deserialize_with = "lenient_string")]
    pub outorgado_endereco: String,
    #[serde(deserialize_with = "lenient_list")]
    pub outorgados: Vec<GranteeEntry>,

    #[serde(deserialize_with = "lenient_string")]
    pub veiculo_nome: String,
    #[serde(deserialize_with = "lenient_string")]
    pub veiculo_marca_modelo: String,
    #[serde(deserialize_with = "lenient_string")]
    pub veiculo_placa: String,
    #[serde(deserialize_with = "lenient_string")]
    pub veiculo_renavam: String,
    #[serde(deserialize_with = "lenient_string")]
    pub veiculo_chassi: String,
    #[serde(deserialize_with = "lenient_string")]
    pub veiculo_ano_modelo: String,
    #[serde(deserialize_with = "lenient_string")]
    pub veiculo_cor: String,

    #[serde(deserialize_with = "lenient_string")]
    pub local_emissao: String,
    #[serde(deserialize_with = "lenient_string")]
    pub data_emissao: String,
    #[serde(deserialize_with = "lenient_optional_string")]
    pub poderes: Option<String>,
}

impl DocumentRequest {
    /// Reads a request from a JSON object. Only a malformed `outorgados`
    /// (not a list of objects) is rejected.
    pub fn from_object(body: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(body))
    }

    /// Picks the fields the document type reads and drops the rest.
    pub fn into_spec(self, doc_type: DocumentType) -> DocumentSpec {
        let template = doc_type.template();

        let grantor = match template.grantor {
            GrantorFormat::Individual => Grantor::Individual(PersonRecord {
                name: self.outorgante_nome,
                nationality: self.outorgante_nacionalidade,
                cpf: self.outorgante_cpf,
                address: self.outorgante_endereco,
            }),
            GrantorFormat::Corporate => Grantor::Corporate(CompanyRecord {
                corporate_name: self.outorgante_razao_social,
                cnpj: self.outorgante_cnpj,
                address: self.outorgante_endereco,
            }),
        };

        let grantees = match template.grantees {
            GranteeMode::Single => Grantees::Single(PersonRecord {
                name: self.outorgado_nome,
                nationality: self.outorgado_nacionalidade,
                cpf: self.outorgado_cpf,
                address: self.outorgado_endereco,
            }),
            GranteeMode::Multiple => {
                Grantees::Multiple(self.outorgados.into_iter().map(Into::into).collect())
            }
        };

        // Older clients send the make/model under `veiculoNome`.
        let name = match template.vehicle {
            VehicleFormat::MakeModel if !self.veiculo_marca_modelo.is_empty() => {
                self.veiculo_marca_modelo
            }
            VehicleFormat::MakeModel | VehicleFormat::NameWithYearModel => self.veiculo_nome,
        };

        DocumentSpec {
            doc_type,
            grantor,
            grantees,
            vehicle: VehicleDescriptor {
                name,
                plate: self.veiculo_placa,
                renavam: self.veiculo_renavam,
                chassis: self.veiculo_chassi,
                year_model: self.veiculo_ano_modelo,
                color: self.veiculo_cor,
            },
            place: self.local_emissao,
            date: self.data_emissao,
            clause_override: self.poderes,
        }
    }
}
