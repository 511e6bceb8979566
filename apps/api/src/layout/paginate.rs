//! Vertical cursor and page-break policy.
//!
//! `lay_out` walks a block sequence top to bottom, flowing text through the
//! wrapper and tracking a single vertical cursor. The cursor only moves down
//! within a page. Before any line is placed the cursor checks that the line
//! fits above the break threshold; if not, a new page starts and the cursor
//! returns to the top margin. A line placed at the top margin is always
//! accepted, so an oversized line cannot loop forever.
//!
//! The signature block is the one multi-line unit kept together: its rule and
//! caption always land on the same page.

use tracing::debug;

use crate::layout::blocks::{
    ContentBlock, BODY_LINE_HEIGHT_MM, BODY_SIZE_PT, SIGNATURE_SIZE_PT,
};
use crate::layout::font_metrics::{FontFace, PageGeometry, MM_PER_PT};
use crate::layout::wrap::{place_line, styled_words, wrap_words, Alignment};

/// Length of the signature rule, centered on the page.
pub const SIGNATURE_RULE_WIDTH_MM: f32 = 90.0;
pub const SIGNATURE_RULE_THICKNESS_MM: f32 = 0.5;
/// Gap between the signature rule and its caption.
pub const SIGNATURE_CAPTION_GAP_MM: f32 = 2.0;

const CURSOR_EPSILON_MM: f32 = 1e-3;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// A drawable element with absolute page coordinates (mm from the top-left corner).
#[derive(Debug, Clone, PartialEq)]
pub enum PageItem {
    Text {
        text: String,
        face: FontFace,
        size_pt: f32,
        x_mm: f32,
        baseline_mm: f32,
    },
    Rule {
        x1_mm: f32,
        x2_mm: f32,
        y_mm: f32,
        thickness_mm: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub items: Vec<PageItem>,
}

/// Fully positioned document, ready for a rendering backend.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub geometry: PageGeometry,
    pub pages: Vec<LaidOutPage>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cursor
// ────────────────────────────────────────────────────────────────────────────

/// Vertical position on the current page plus the pages emitted so far.
struct Cursor {
    geometry: PageGeometry,
    y_mm: f32,
    pages: Vec<LaidOutPage>,
}

impl Cursor {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            y_mm: geometry.margin_top_mm,
            pages: vec![LaidOutPage::default()],
        }
    }

    fn at_page_top(&self) -> bool {
        self.y_mm <= self.geometry.margin_top_mm + CURSOR_EPSILON_MM
    }

    fn fits(&self, height_mm: f32) -> bool {
        self.y_mm + height_mm <= self.geometry.break_threshold_mm() + CURSOR_EPSILON_MM
    }

    /// Starts a new page unless `height_mm` fits below the cursor.
    fn reserve(&mut self, height_mm: f32) {
        if !self.fits(height_mm) && !self.at_page_top() {
            self.pages.push(LaidOutPage::default());
            self.y_mm = self.geometry.margin_top_mm;
            debug!(page = self.pages.len(), "page break");
        }
    }

    fn advance(&mut self, height_mm: f32) {
        self.y_mm += height_mm;
    }

    /// Adds vertical space, never past the break threshold and never at the top of a page.
    fn skip(&mut self, height_mm: f32) {
        if self.at_page_top() {
            return;
        }
        self.y_mm = (self.y_mm + height_mm).min(self.geometry.break_threshold_mm());
    }

    fn push(&mut self, item: PageItem) {
        if let Some(page) = self.pages.last_mut() {
            page.items.push(item);
        }
    }

    /// Wraps styled text at the content width and places it line by line.
    fn flow(
        &mut self,
        segments: &[(&str, FontFace)],
        size_pt: f32,
        line_height_mm: f32,
        alignment: Alignment,
    ) {
        let left = self.geometry.margin_left_mm;
        let width = self.geometry.content_width_mm();
        let lines = wrap_words(styled_words(segments, size_pt), width, size_pt);
        let last = lines.len().saturating_sub(1);

        for (i, line) in lines.iter().enumerate() {
            self.reserve(line_height_mm);
            let baseline = baseline_for(self.y_mm, line_height_mm, size_pt);
            for run in place_line(line, left, width, size_pt, alignment, i == last) {
                self.push(PageItem::Text {
                    text: run.text,
                    face: run.face,
                    size_pt,
                    x_mm: run.x_mm,
                    baseline_mm: baseline,
                });
            }
            self.advance(line_height_mm);
        }
    }

    fn signature(&mut self, caption: &str) {
        self.reserve(SIGNATURE_CAPTION_GAP_MM + BODY_LINE_HEIGHT_MM);

        let x1 = (self.geometry.page_width_mm - SIGNATURE_RULE_WIDTH_MM) / 2.0;
        self.push(PageItem::Rule {
            x1_mm: x1,
            x2_mm: x1 + SIGNATURE_RULE_WIDTH_MM,
            y_mm: self.y_mm,
            thickness_mm: SIGNATURE_RULE_THICKNESS_MM,
        });
        self.advance(SIGNATURE_CAPTION_GAP_MM);
        self.flow(
            &[(caption, FontFace::Regular)],
            SIGNATURE_SIZE_PT,
            BODY_LINE_HEIGHT_MM,
            Alignment::Center,
        );
    }
}

/// Baseline of a line whose box starts at `top_mm`: vertically centered text.
fn baseline_for(top_mm: f32, line_height_mm: f32, size_pt: f32) -> f32 {
    top_mm + line_height_mm / 2.0 + 0.3 * size_pt * MM_PER_PT
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Lays out a block sequence on pages of the given geometry.
///
/// Always returns at least one page. Pure: the same blocks and geometry
/// produce the same positions.
pub fn lay_out(blocks: &[ContentBlock], geometry: &PageGeometry) -> LaidOutDocument {
    let mut cursor = Cursor::new(*geometry);

    for block in blocks {
        match block {
            ContentBlock::Heading { text, level } => {
                cursor.flow(
                    &[(text.as_str(), FontFace::Bold)],
                    level.size_pt(),
                    level.line_height_mm(),
                    Alignment::Center,
                );
            }
            ContentBlock::LabeledRun { label, body } => cursor.flow(
                &[(label.as_str(), FontFace::Bold), (body.as_str(), FontFace::Regular)],
                BODY_SIZE_PT,
                BODY_LINE_HEIGHT_MM,
                Alignment::Justify,
            ),
            ContentBlock::Paragraph { text, justified } => cursor.flow(
                &[(text.as_str(), FontFace::Regular)],
                BODY_SIZE_PT,
                BODY_LINE_HEIGHT_MM,
                if *justified {
                    Alignment::Justify
                } else {
                    Alignment::Left
                },
            ),
            ContentBlock::Spacer { height_mm } => cursor.skip(*height_mm),
            ContentBlock::SignatureBlock { caption } => cursor.signature(caption),
        }
    }

    LaidOutDocument {
        geometry: *geometry,
        pages: cursor.pages,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // Sixty repetitions wrap to about 50 body lines and an A4 page holds 51;
    // 150 runs well past two pages.
    fn long_clause() -> String {
        "praticar todos os atos necessários para uso e gozo do veículo como coisa própria, "
            .repeat(150)
    }

    fn baselines(page: &LaidOutPage) -> Vec<f32> {
        page.items
            .iter()
            .filter_map(|item| match item {
                PageItem::Text { baseline_mm, .. } => Some(*baseline_mm),
                PageItem::Rule { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_document_has_one_blank_page() {
        let doc = lay_out(&[], &PageGeometry::default());
        assert_eq!(doc.page_count(), 1);
        assert!(doc.pages[0].items.is_empty());
    }

    #[test]
    fn test_title_is_centered_on_first_line() {
        let geometry = PageGeometry::default();
        let doc = lay_out(&[ContentBlock::title("PROCURAÇÃO")], &geometry);
        match &doc.pages[0].items[0] {
            PageItem::Text {
                face,
                size_pt,
                x_mm,
                baseline_mm,
                ..
            } => {
                assert_eq!(*face, FontFace::Bold);
                assert_eq!(*size_pt, 16.0);
                assert!(*x_mm > geometry.margin_left_mm + 50.0);
                assert!(*baseline_mm > geometry.margin_top_mm);
                assert!(*baseline_mm < geometry.margin_top_mm + 10.0);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_long_paragraph_paginates() {
        let geometry = PageGeometry::default();
        let lines_per_page =
            ((geometry.break_threshold_mm() - geometry.margin_top_mm) / BODY_LINE_HEIGHT_MM) as usize;
        let doc = lay_out(&[ContentBlock::justified(long_clause())], &geometry);
        let placed_lines: usize = doc.pages.iter().map(|p| baselines(p).len()).sum();
        assert!(placed_lines > 2 * lines_per_page, "only {placed_lines} lines");
        assert!(doc.page_count() >= 3, "got {} pages", doc.page_count());
        for page in &doc.pages {
            for baseline in baselines(page) {
                assert!(baseline <= geometry.break_threshold_mm());
                assert!(baseline >= geometry.margin_top_mm);
            }
        }
    }

    #[test]
    fn test_cursor_is_monotonic_within_each_page() {
        let blocks = vec![
            ContentBlock::title("PROCURAÇÃO"),
            ContentBlock::spacer(5.0),
            ContentBlock::labeled("OUTORGANTE: ", "Ana Souza, brasileira, maior"),
            ContentBlock::spacer(3.0),
            ContentBlock::justified(long_clause()),
            ContentBlock::spacer(15.0),
            ContentBlock::signature("OUTORGANTE"),
        ];
        let doc = lay_out(&blocks, &PageGeometry::default());
        for page in &doc.pages {
            let ys = baselines(page);
            assert!(ys.windows(2).all(|w| w[0] <= w[1]), "cursor moved up: {ys:?}");
        }
    }

    #[test]
    fn test_signature_rule_and_caption_stay_together() {
        let geometry = PageGeometry::default();
        // Fill the page until less than the signature's 7mm remains.
        let filler_lines = ((geometry.break_threshold_mm() - geometry.margin_top_mm) / 5.0) as usize - 1;
        let mut blocks: Vec<ContentBlock> = (0..filler_lines)
            .map(|i| ContentBlock::Paragraph {
                text: format!("linha {i}"),
                justified: false,
            })
            .collect();
        blocks.push(ContentBlock::spacer(3.0));
        blocks.push(ContentBlock::signature("Assinatura do Outorgante"));

        let doc = lay_out(&blocks, &geometry);
        assert_eq!(doc.page_count(), 2);
        let last = &doc.pages[1].items;
        assert!(matches!(last[0], PageItem::Rule { .. }));
        assert!(matches!(&last[1], PageItem::Text { text, .. } if text == "Assinatura do Outorgante"));
    }

    #[test]
    fn test_signature_rule_is_centered_90mm() {
        let doc = lay_out(&[ContentBlock::signature("OUTORGANTE")], &PageGeometry::default());
        match doc.pages[0].items[0] {
            PageItem::Rule {
                x1_mm,
                x2_mm,
                thickness_mm,
                ..
            } => {
                assert!((x1_mm - 60.0).abs() < 1e-4);
                assert!((x2_mm - 150.0).abs() < 1e-4);
                assert_eq!(thickness_mm, 0.5);
            }
            ref other => panic!("expected rule, got {other:?}"),
        }
    }

    #[test]
    fn test_spacer_at_page_top_is_dropped() {
        let geometry = PageGeometry::default();
        let with_spacer = lay_out(
            &[ContentBlock::spacer(40.0), ContentBlock::justified("texto")],
            &geometry,
        );
        let without = lay_out(&[ContentBlock::justified("texto")], &geometry);
        assert_eq!(with_spacer, without);
    }

    #[test]
    fn test_spacer_never_pushes_past_threshold() {
        let geometry = PageGeometry::default();
        let doc = lay_out(
            &[
                ContentBlock::justified("início"),
                ContentBlock::spacer(1000.0),
                ContentBlock::justified("fim"),
            ],
            &geometry,
        );
        assert_eq!(doc.page_count(), 2);
        assert_eq!(baselines(&doc.pages[1]).len(), 1);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let blocks = vec![
            ContentBlock::title("SUBSTABELECIMENTO"),
            ContentBlock::justified(long_clause()),
        ];
        let geometry = PageGeometry::default();
        assert_eq!(lay_out(&blocks, &geometry), lay_out(&blocks, &geometry));
    }
}
