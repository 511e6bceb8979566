//! Word wrap and line placement.
//!
//! Text is broken into styled words, greedily packed into lines no wider than
//! the content width, and then placed horizontally according to the block's
//! alignment. A bold label and its regular body are one word stream, so the
//! label shares its first line with the body.

use crate::layout::font_metrics::{get_metrics, FontFace};

/// Tolerance for float accumulation when comparing against the line width.
const WIDTH_EPSILON_MM: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    /// Stretch inter-word gaps to fill the line, except on a paragraph's last line.
    Justify,
}

/// A single word measured in its face.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledWord {
    pub text: String,
    pub face: FontFace,
    pub width_mm: f32,
}

/// One wrapped line before horizontal placement.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub words: Vec<StyledWord>,
    /// Words plus natural (unstretched) spaces.
    pub natural_width_mm: f32,
}

/// A run of text positioned on a line. `x_mm` is measured from the page's left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRun {
    pub text: String,
    pub face: FontFace,
    pub x_mm: f32,
    pub width_mm: f32,
}

/// Splits styled segments into measured words, in order.
pub fn styled_words(segments: &[(&str, FontFace)], size_pt: f32) -> Vec<StyledWord> {
    segments
        .iter()
        .flat_map(|(text, face)| {
            let metrics = get_metrics(*face);
            text.split_whitespace().map(move |word| StyledWord {
                text: word.to_string(),
                face: *face,
                width_mm: metrics.width_mm(word, size_pt),
            })
        })
        .collect()
}

/// Greedy word wrap at `max_width_mm`. A word wider than a whole line is
/// broken between characters so no line overflows.
///
/// An empty word list returns no lines.
pub fn wrap_words(words: Vec<StyledWord>, max_width_mm: f32, size_pt: f32) -> Vec<WrappedLine> {
    let mut lines: Vec<WrappedLine> = Vec::new();
    let mut current: Vec<StyledWord> = Vec::new();
    let mut current_width = 0.0_f32;

    for word in words
        .into_iter()
        .flat_map(|w| split_overlong(w, max_width_mm, size_pt))
    {
        let space_w = if current.is_empty() {
            0.0
        } else {
            get_metrics(word.face).space_mm(size_pt)
        };

        if !current.is_empty() && current_width + space_w + word.width_mm > max_width_mm + WIDTH_EPSILON_MM
        {
            lines.push(WrappedLine {
                words: std::mem::take(&mut current),
                natural_width_mm: current_width,
            });
            current_width = word.width_mm;
        } else {
            current_width += space_w + word.width_mm;
        }
        current.push(word);
    }

    if !current.is_empty() {
        lines.push(WrappedLine {
            words: current,
            natural_width_mm: current_width,
        });
    }
    lines
}

/// Positions the words of one line between `left_mm` and `left_mm + width_mm`.
///
/// Non-justified lines merge consecutive same-face words into a single run.
pub fn place_line(
    line: &WrappedLine,
    left_mm: f32,
    width_mm: f32,
    size_pt: f32,
    alignment: Alignment,
    is_last_line: bool,
) -> Vec<PlacedRun> {
    let gaps = line.words.len().saturating_sub(1);
    let stretch = alignment == Alignment::Justify && !is_last_line && gaps > 0;
    let extra_per_gap = if stretch {
        ((width_mm - line.natural_width_mm) / gaps as f32).max(0.0)
    } else {
        0.0
    };
    let start_x = match alignment {
        Alignment::Center => left_mm + ((width_mm - line.natural_width_mm) / 2.0).max(0.0),
        Alignment::Left | Alignment::Justify => left_mm,
    };

    let mut runs: Vec<PlacedRun> = Vec::new();
    let mut x = start_x;
    for (i, word) in line.words.iter().enumerate() {
        if i > 0 {
            x += get_metrics(word.face).space_mm(size_pt) + extra_per_gap;
        }
        match runs.last_mut() {
            Some(run) if !stretch && run.face == word.face => {
                run.text.push(' ');
                run.text.push_str(&word.text);
                run.width_mm = x + word.width_mm - run.x_mm;
            }
            _ => runs.push(PlacedRun {
                text: word.text.clone(),
                face: word.face,
                x_mm: x,
                width_mm: word.width_mm,
            }),
        }
        x += word.width_mm;
    }
    runs
}

/// Breaks a word wider than `max_width_mm` into line-sized chunks.
fn split_overlong(word: StyledWord, max_width_mm: f32, size_pt: f32) -> Vec<StyledWord> {
    if word.width_mm <= max_width_mm + WIDTH_EPSILON_MM {
        return vec![word];
    }
    let metrics = get_metrics(word.face);
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0.0_f32;
    for c in word.text.chars() {
        let mut buf = [0u8; 4];
        let c_width = metrics.width_mm(c.encode_utf8(&mut buf), size_pt);
        if !chunk.is_empty() && chunk_width + c_width > max_width_mm + WIDTH_EPSILON_MM {
            chunks.push(StyledWord {
                text: std::mem::take(&mut chunk),
                face: word.face,
                width_mm: chunk_width,
            });
            chunk_width = 0.0;
        }
        chunk.push(c);
        chunk_width += c_width;
    }
    if !chunk.is_empty() {
        chunks.push(StyledWord {
            text: chunk,
            face: word.face,
            width_mm: chunk_width,
        });
    }
    chunks
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
