//! Document types, their static templates and the normalized input of one
//! generation request.
//!
//! Every endpoint maps to one [`DocumentType`]. The type selects a
//! [`Template`], which is the only place the differences between documents
//! live: title, who grants, who receives, how the clause is placed, how the
//! vehicle is described, spacing and the caption under the signature.

use crate::documents::clauses::{
    POWER_OF_ATTORNEY_CLAUSE, REPRESENTATION_CLAUSE, SUB_DELEGATION_CLAUSE,
};

// ────────────────────────────────────────────────────────────────────────────
// Template axes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PowerOfAttorney,
    Representation,
    SubDelegation,
}

impl DocumentKind {
    pub fn default_clause(self) -> &'static str {
        match self {
            DocumentKind::PowerOfAttorney => POWER_OF_ATTORNEY_CLAUSE,
            DocumentKind::Representation => REPRESENTATION_CLAUSE,
            DocumentKind::SubDelegation => SUB_DELEGATION_CLAUSE,
        }
    }

    /// Powers of attorney carry the clause as its own paragraph; the other
    /// kinds fold it into the scope line.
    pub fn clause_placement(self) -> ClausePlacement {
        match self {
            DocumentKind::PowerOfAttorney => ClausePlacement::Paragraph,
            DocumentKind::Representation | DocumentKind::SubDelegation => {
                ClausePlacement::Inline
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClausePlacement {
    Inline,
    Paragraph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantorFormat {
    Individual,
    Corporate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GranteeMode {
    Single,
    Multiple,
}

/// Which request field names the vehicle, and whether year/model is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleFormat {
    /// `veiculoMarcaModelo`, no year/model.
    MakeModel,
    /// `veiculoNome` followed by `ANO/MODELO`.
    NameWithYearModel,
}

/// Vertical gaps between blocks, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub after_title_mm: f32,
    pub after_run_mm: f32,
    pub after_caption_mm: f32,
    pub after_paragraph_mm: f32,
    pub before_signature_mm: f32,
}

pub const STANDARD_SPACING: Spacing = Spacing {
    after_title_mm: 5.0,
    after_run_mm: 3.0,
    after_caption_mm: 5.0,
    after_paragraph_mm: 5.0,
    before_signature_mm: 15.0,
};

/// Multi-grantee documents run longer and are set tighter.
pub const COMPACT_SPACING: Spacing = Spacing {
    after_title_mm: 1.0,
    after_run_mm: 0.0,
    after_caption_mm: 5.0,
    after_paragraph_mm: 5.0,
    before_signature_mm: 10.0,
};

pub const GRANTOR_SIGNATURE_CAPTION: &str = "Assinatura do Outorgante";
pub const GRANTOR_CAPTION: &str = "OUTORGANTE";

#[derive(Debug)]
pub struct Template {
    pub slug: &'static str,
    pub route: &'static str,
    pub filename: &'static str,
    pub title: &'static str,
    pub kind: DocumentKind,
    pub grantor: GrantorFormat,
    pub grantees: GranteeMode,
    pub vehicle: VehicleFormat,
    pub appointment_caption: bool,
    pub spacing: Spacing,
    pub signature_caption: &'static str,
}

static PROCURACAO_PF: Template = Template {
    slug: "procuracao_pf",
    route: "/generate_procuracao_pf",
    filename: "procuracao_pf.pdf",
    title: "PROCURAÇÃO",
    kind: DocumentKind::PowerOfAttorney,
    grantor: GrantorFormat::Individual,
    grantees: GranteeMode::Single,
    vehicle: VehicleFormat::MakeModel,
    appointment_caption: true,
    spacing: STANDARD_SPACING,
    signature_caption: GRANTOR_SIGNATURE_CAPTION,
};

static PROCURACAO_PJ: Template = Template {
    slug: "procuracao_pj",
    route: "/generate_procuracao_pj",
    filename: "procuracao_pj.pdf",
    title: "PROCURAÇÃO",
    kind: DocumentKind::PowerOfAttorney,
    grantor: GrantorFormat::Corporate,
    grantees: GranteeMode::Single,
    vehicle: VehicleFormat::NameWithYearModel,
    appointment_caption: true,
    spacing: STANDARD_SPACING,
    signature_caption: GRANTOR_CAPTION,
};

static PROCURACAO_PF_MULTIPLOS: Template = Template {
    slug: "procuracao_pf_multiplos",
    route: "/generate_procuracao_pf_multiplos",
    filename: "procuracao_pf_multiplos.pdf",
    title: "PROCURAÇÃO",
    kind: DocumentKind::PowerOfAttorney,
    grantor: GrantorFormat::Individual,
    grantees: GranteeMode::Multiple,
    vehicle: VehicleFormat::NameWithYearModel,
    appointment_caption: true,
    spacing: COMPACT_SPACING,
    signature_caption: GRANTOR_SIGNATURE_CAPTION,
};

static PROCURACAO_PJ_MULTIPLOS: Template = Template {
    slug: "procuracao_pj_multiplos",
    route: "/generate_procuracao_pj_multiplos",
    filename: "procuracao_pj_multiplos.pdf",
    title: "PROCURAÇÃO",
    kind: DocumentKind::PowerOfAttorney,
    grantor: GrantorFormat::Corporate,
    grantees: GranteeMode::Multiple,
    vehicle: VehicleFormat::NameWithYearModel,
    appointment_caption: true,
    spacing: COMPACT_SPACING,
    signature_caption: GRANTOR_CAPTION,
};

static REPRESENTACAO_PF: Template = Template {
    slug: "representacao_pf",
    route: "/generate_representacao_pf",
    filename: "representacao_pf.pdf",
    title: "PROCURAÇÃO REPRESENTAÇÃO",
    kind: DocumentKind::Representation,
    grantor: GrantorFormat::Individual,
    grantees: GranteeMode::Single,
    vehicle: VehicleFormat::NameWithYearModel,
    appointment_caption: true,
    spacing: STANDARD_SPACING,
    signature_caption: GRANTOR_CAPTION,
};

static REPRESENTACAO_PJ: Template = Template {
    slug: "representacao_pj",
    route: "/generate_representacao_pj",
    filename: "representacao_pj.pdf",
    title: "PROCURAÇÃO REPRESENTAÇÃO",
    kind: DocumentKind::Representation,
    grantor: GrantorFormat::Corporate,
    grantees: GranteeMode::Single,
    vehicle: VehicleFormat::NameWithYearModel,
    appointment_caption: true,
    spacing: STANDARD_SPACING,
    signature_caption: GRANTOR_CAPTION,
};

static SUBSTABELECIMENTO_PF: Template = Template {
    slug: "substabelecimento_pf",
    route: "/generate_substabelecimento_pf",
    filename: "substabelecimento_pf.pdf",
    title: "SUBSTABELECIMENTO",
    kind: DocumentKind::SubDelegation,
    grantor: GrantorFormat::Individual,
    grantees: GranteeMode::Single,
    vehicle: VehicleFormat::NameWithYearModel,
    appointment_caption: true,
    spacing: STANDARD_SPACING,
    signature_caption: GRANTOR_CAPTION,
};

static SUBSTABELECIMENTO_PJ: Template = Template {
    slug: "substabelecimento_pj",
    route: "/generate_substabelecimento_pj",
    filename: "substabelecimento_pj.pdf",
    title: "SUBSTABELECIMENTO",
    kind: DocumentKind::SubDelegation,
    grantor: GrantorFormat::Corporate,
    grantees: GranteeMode::Single,
    vehicle: VehicleFormat::NameWithYearModel,
    appointment_caption: true,
    spacing: STANDARD_SPACING,
    signature_caption: GRANTOR_CAPTION,
};

// ────────────────────────────────────────────────────────────────────────────
// Document types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    PowerOfAttorneyIndividual,
    PowerOfAttorneyCorporate,
    PowerOfAttorneyIndividualMultiple,
    PowerOfAttorneyCorporateMultiple,
    RepresentationIndividual,
    RepresentationCorporate,
    SubDelegationIndividual,
    SubDelegationCorporate,
}

impl DocumentType {
    pub const ALL: [DocumentType; 8] = [
        DocumentType::PowerOfAttorneyIndividual,
        DocumentType::PowerOfAttorneyCorporate,
        DocumentType::PowerOfAttorneyIndividualMultiple,
        DocumentType::PowerOfAttorneyCorporateMultiple,
        DocumentType::RepresentationIndividual,
        DocumentType::RepresentationCorporate,
        DocumentType::SubDelegationIndividual,
        DocumentType::SubDelegationCorporate,
    ];

    pub fn template(self) -> &'static Template {
        match self {
            DocumentType::PowerOfAttorneyIndividual => &PROCURACAO_PF,
            DocumentType::PowerOfAttorneyCorporate => &PROCURACAO_PJ,
            DocumentType::PowerOfAttorneyIndividualMultiple => &PROCURACAO_PF_MULTIPLOS,
            DocumentType::PowerOfAttorneyCorporateMultiple => &PROCURACAO_PJ_MULTIPLOS,
            DocumentType::RepresentationIndividual => &REPRESENTACAO_PF,
            DocumentType::RepresentationCorporate => &REPRESENTACAO_PJ,
            DocumentType::SubDelegationIndividual => &SUBSTABELECIMENTO_PF,
            DocumentType::SubDelegationCorporate => &SUBSTABELECIMENTO_PJ,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Request data
// ────────────────────────────────────────────────────────────────────────────

/// A natural person: individual grantor or grantee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonRecord {
    pub name: String,
    pub nationality: String,
    pub cpf: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyRecord {
    pub corporate_name: String,
    pub cnpj: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleDescriptor {
    pub name: String,
    pub plate: String,
    pub renavam: String,
    pub chassis: String,
    pub year_model: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Grantor {
    Individual(PersonRecord),
    Corporate(CompanyRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Grantees {
    Single(PersonRecord),
    Multiple(Vec<PersonRecord>),
}

/// Everything needed to compose one document. Built from a request,
/// composed once and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSpec {
    pub doc_type: DocumentType,
    pub grantor: Grantor,
    pub grantees: Grantees,
    pub vehicle: VehicleDescriptor,
    pub place: String,
    pub date: String,
    pub clause_override: Option<String>,
}

impl DocumentSpec {
    pub fn template(&self) -> &'static Template {
        self.doc_type.template()
    }

    /// The override, verbatim, or the kind's default clause.
    pub fn clause(&self) -> &str {
        self.clause_override
            .as_deref()
            .unwrap_or_else(|| self.template().kind.default_clause())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_templates_are_distinct() {
        let routes: HashSet<_> = DocumentType::ALL.iter().map(|t| t.template().route).collect();
        let files: HashSet<_> = DocumentType::ALL.iter().map(|t| t.template().filename).collect();
        assert_eq!(routes.len(), DocumentType::ALL.len());
        assert_eq!(files.len(), DocumentType::ALL.len());
    }

    #[test]
    fn test_route_and_filename_follow_slug() {
        for doc_type in DocumentType::ALL {
            let t = doc_type.template();
            assert_eq!(t.route, format!("/generate_{}", t.slug));
            assert_eq!(t.filename, format!("{}.pdf", t.slug));
        }
    }

    #[test]
    fn test_only_individual_single_power_of_attorney_omits_year() {
        for doc_type in DocumentType::ALL {
            let expected = if doc_type == DocumentType::PowerOfAttorneyIndividual {
                VehicleFormat::MakeModel
            } else {
                VehicleFormat::NameWithYearModel
            };
            assert_eq!(doc_type.template().vehicle, expected, "{doc_type:?}");
        }
    }

    #[test]
    fn test_multiple_grantees_use_compact_spacing() {
        for doc_type in DocumentType::ALL {
            let t = doc_type.template();
            let expected = match t.grantees {
                GranteeMode::Single => STANDARD_SPACING,
                GranteeMode::Multiple => COMPACT_SPACING,
            };
            assert_eq!(t.spacing, expected, "{doc_type:?}");
        }
    }

    #[test]
    fn test_signature_captions() {
        assert_eq!(
            DocumentType::PowerOfAttorneyIndividual.template().signature_caption,
            "Assinatura do Outorgante"
        );
        assert_eq!(
            DocumentType::PowerOfAttorneyIndividualMultiple
                .template()
                .signature_caption,
            "Assinatura do Outorgante"
        );
        assert_eq!(
            DocumentType::SubDelegationIndividual.template().signature_caption,
            "OUTORGANTE"
        );
        assert_eq!(
            DocumentType::PowerOfAttorneyCorporate.template().signature_caption,
            "OUTORGANTE"
        );
    }

    #[test]
    fn test_clause_placement_by_kind() {
        assert_eq!(
            DocumentKind::PowerOfAttorney.clause_placement(),
            ClausePlacement::Paragraph
        );
        assert_eq!(
            DocumentKind::Representation.clause_placement(),
            ClausePlacement::Inline
        );
        assert_eq!(
            DocumentKind::SubDelegation.clause_placement(),
            ClausePlacement::Inline
        );
    }

    #[test]
    fn test_clause_override_wins() {
        let mut spec = DocumentSpec {
            doc_type: DocumentType::SubDelegationCorporate,
            grantor: Grantor::Corporate(CompanyRecord::default()),
            grantees: Grantees::Single(PersonRecord::default()),
            vehicle: VehicleDescriptor::default(),
            place: String::new(),
            date: String::new(),
            clause_override: None,
        };
        assert_eq!(spec.clause(), SUB_DELEGATION_CLAUSE);

        spec.clause_override = Some("apenas transferir".into());
        assert_eq!(spec.clause(), "apenas transferir");

        spec.clause_override = Some(String::new());
        assert_eq!(spec.clause(), "");
    }
}
