//! Content blocks, the typed, ordered description of one document.
//!
//! A document is a `Vec<ContentBlock>`. Blocks carry content only; where a
//! block lands on the page (and whether a page break precedes it) is decided
//! by `paginate::lay_out`.

/// Visual level of a centered heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Document title: 16pt bold on a 10mm line.
    Title,
    /// Centered bold caption on a body-height line.
    Caption,
}

impl HeadingLevel {
    pub fn size_pt(self) -> f32 {
        match self {
            HeadingLevel::Title => TITLE_SIZE_PT,
            HeadingLevel::Caption => BODY_SIZE_PT,
        }
    }

    pub fn line_height_mm(self) -> f32 {
        match self {
            HeadingLevel::Title => TITLE_LINE_HEIGHT_MM,
            HeadingLevel::Caption => BODY_LINE_HEIGHT_MM,
        }
    }
}

pub const TITLE_SIZE_PT: f32 = 16.0;
pub const TITLE_LINE_HEIGHT_MM: f32 = 10.0;
pub const BODY_SIZE_PT: f32 = 12.0;
pub const BODY_LINE_HEIGHT_MM: f32 = 5.0;
pub const SIGNATURE_SIZE_PT: f32 = 10.0;

/// One unit of document content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// Centered bold line.
    Heading { text: String, level: HeadingLevel },
    /// Bold label followed on the same line by regular body text; the two
    /// flow together and wrap as one justified paragraph.
    LabeledRun { label: String, body: String },
    /// Regular body text.
    Paragraph { text: String, justified: bool },
    /// Vertical whitespace in millimetres. Dropped at the top of a page.
    Spacer { height_mm: f32 },
    /// Horizontal signature rule with a centered caption beneath it.
    SignatureBlock { caption: String },
}

impl ContentBlock {
    pub fn title(text: impl Into<String>) -> Self {
        ContentBlock::Heading {
            text: text.into(),
            level: HeadingLevel::Title,
        }
    }

    pub fn caption(text: impl Into<String>) -> Self {
        ContentBlock::Heading {
            text: text.into(),
            level: HeadingLevel::Caption,
        }
    }

    pub fn labeled(label: impl Into<String>, body: impl Into<String>) -> Self {
        ContentBlock::LabeledRun {
            label: label.into(),
            body: body.into(),
        }
    }

    pub fn justified(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            text: text.into(),
            justified: true,
        }
    }

    pub fn spacer(height_mm: f32) -> Self {
        ContentBlock::Spacer { height_mm }
    }

    pub fn signature(caption: impl Into<String>) -> Self {
        ContentBlock::SignatureBlock {
            caption: caption.into(),
        }
    }
}
