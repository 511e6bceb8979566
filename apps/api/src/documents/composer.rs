//! Turns a [`DocumentSpec`] into the ordered content blocks of its document.
//!
//! One function serves all document types; the differences come from the
//! type's [`Template`](crate::documents::spec::Template).

use crate::documents::clauses::{
    APPOINTMENT_CAPTION, GRANTEES_LABEL, GRANTOR_LABEL, POWER_OF_ATTORNEY_SCOPE, SCOPE_LABEL,
};
use crate::documents::spec::{
    ClausePlacement, DocumentKind, DocumentSpec, Grantees, Grantor, VehicleFormat,
};
use crate::documents::text::{
    compose_grantees, describe_company, describe_individual, describe_vehicle, format_issue_date,
};
use crate::layout::ContentBlock;

fn push_gap(blocks: &mut Vec<ContentBlock>, height_mm: f32) {
    if height_mm > 0.0 {
        blocks.push(ContentBlock::spacer(height_mm));
    }
}

fn grantor_description(grantor: &Grantor) -> String {
    match grantor {
        Grantor::Individual(person) => describe_individual(person),
        Grantor::Corporate(company) => describe_company(company),
    }
}

fn grantee_description(grantees: &Grantees) -> String {
    match grantees {
        Grantees::Single(person) => describe_individual(person),
        Grantees::Multiple(list) => compose_grantees(list),
    }
}

fn scope_text(spec: &DocumentSpec) -> String {
    let template = spec.template();
    let vehicle = describe_vehicle(
        &spec.vehicle,
        template.vehicle == VehicleFormat::NameWithYearModel,
    );
    match template.kind {
        DocumentKind::PowerOfAttorney => format!("{POWER_OF_ATTORNEY_SCOPE} {vehicle}"),
        DocumentKind::Representation => format!("{}, do veículo: {vehicle}", spec.clause()),
        DocumentKind::SubDelegation => format!("{}. Sob o veículo: {vehicle}", spec.clause()),
    }
}

/// Builds the document body. Pure: equal specs give equal block lists.
pub fn compose(spec: &DocumentSpec) -> Vec<ContentBlock> {
    let template = spec.template();
    let spacing = template.spacing;
    let mut blocks = Vec::with_capacity(16);

    blocks.push(ContentBlock::title(template.title));
    push_gap(&mut blocks, spacing.after_title_mm);

    blocks.push(ContentBlock::labeled(
        GRANTOR_LABEL,
        grantor_description(&spec.grantor),
    ));
    push_gap(&mut blocks, spacing.after_run_mm);

    if template.appointment_caption {
        blocks.push(ContentBlock::caption(APPOINTMENT_CAPTION));
        push_gap(&mut blocks, spacing.after_caption_mm);
    }

    blocks.push(ContentBlock::labeled(
        GRANTEES_LABEL,
        grantee_description(&spec.grantees),
    ));
    push_gap(&mut blocks, spacing.after_run_mm);

    blocks.push(ContentBlock::labeled(SCOPE_LABEL, scope_text(spec)));
    push_gap(&mut blocks, spacing.after_run_mm);

    if template.kind.clause_placement() == ClausePlacement::Paragraph {
        blocks.push(ContentBlock::justified(spec.clause()));
        push_gap(&mut blocks, spacing.after_paragraph_mm);
    }

    blocks.push(ContentBlock::justified(format!(
        "{}, {}.",
        spec.place,
        format_issue_date(&spec.date)
    )));
    push_gap(&mut blocks, spacing.before_signature_mm);

    blocks.push(ContentBlock::signature(template.signature_caption));
    blocks
}
