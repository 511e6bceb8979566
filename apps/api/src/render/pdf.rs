//! PDF backend: writes a laid-out document with lopdf.
//!
//! Text is set in the base-14 Times faces with `WinAnsiEncoding`, so no font
//! program is embedded. Layout coordinates are millimetres from the top-left
//! corner; PDF user space is points from the bottom-left, so every y is
//! flipped against the page height.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::layout::font_metrics::MM_PER_PT;
use crate::layout::paginate::LaidOutPage;
use crate::layout::{FontFace, LaidOutDocument, PageItem};
use crate::render::RenderError;

fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Resource name of a face inside the shared page resources.
fn font_resource(face: FontFace) -> &'static str {
    match face {
        FontFace::Regular => "F1",
        FontFace::Bold => "F2",
    }
}

/// Encodes text for a `WinAnsiEncoding` simple font.
///
/// Latin-1 printable characters map byte-for-byte; everything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            _ => b'?',
        })
        .collect()
}

fn page_operations(page: &LaidOutPage, page_height_pt: f32) -> Vec<Operation> {
    let mut ops = Vec::new();
    for item in &page.items {
        match item {
            PageItem::Text {
                text,
                face,
                size_pt,
                x_mm,
                baseline_mm,
            } => {
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new(
                    "Tf",
                    vec![font_resource(*face).into(), (*size_pt).into()],
                ));
                ops.push(Operation::new(
                    "Td",
                    vec![
                        mm_to_pt(*x_mm).into(),
                        (page_height_pt - mm_to_pt(*baseline_mm)).into(),
                    ],
                ));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            PageItem::Rule {
                x1_mm,
                x2_mm,
                y_mm,
                thickness_mm,
            } => {
                let y = page_height_pt - mm_to_pt(*y_mm);
                ops.push(Operation::new("w", vec![mm_to_pt(*thickness_mm).into()]));
                ops.push(Operation::new("m", vec![mm_to_pt(*x1_mm).into(), y.into()]));
                ops.push(Operation::new("l", vec![mm_to_pt(*x2_mm).into(), y.into()]));
                ops.push(Operation::new("S", vec![]));
            }
        }
    }
    ops
}

/// Serializes a laid-out document to PDF bytes, one PDF page per layout page.
pub fn render_pdf(document: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
    let geometry = &document.geometry;
    let page_width_pt = mm_to_pt(geometry.page_width_mm);
    let page_height_pt = mm_to_pt(geometry.page_height_mm);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_ids: Vec<(&str, Object)> = [FontFace::Regular, FontFace::Bold]
        .into_iter()
        .map(|face| {
            let id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            (font_resource(face), Object::Reference(id))
        })
        .collect();
    let mut fonts = lopdf::Dictionary::new();
    for (name, id) in font_ids {
        fonts.set(name, id);
    }
    let resources_id = doc.add_object(dictionary! { "Font" => fonts });

    let mut kids: Vec<Object> = Vec::with_capacity(document.pages.len());
    for page in &document.pages {
        let content = Content {
            operations: page_operations(page, page_height_pt),
        };
        let encoded = content
            .encode()
            .map_err(|e| RenderError::Content(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Count" => kids.len() as i64,
        "Kids" => kids,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), page_width_pt.into(), page_height_pt.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| RenderError::Save(e.to_string()))?;
    Ok(output)
}
