//! Word-cloud rendering seam.
//!
//! Rendering is an external concern: the pipeline hands a weighted
//! word list to a [`WordcloudRenderer`] and writes whatever bytes come
//! back. The shipped [`SvgWordcloud`] is a deterministic row-layout SVG
//! renderer; a raster backend is another implementation of the trait.

use crate::metrics::reports::WordCount;

/// Converts a weighted word list into image bytes.
pub trait WordcloudRenderer {
    /// Render `weights` (descending by count) under the given title.
    /// Must be deterministic for reproducible artifacts.
    fn render(&self, title: &str, weights: &[WordCount]) -> Vec<u8>;

    /// File extension (without dot) for the produced format.
    fn file_extension(&self) -> &'static str;
}

/// Deterministic SVG word-cloud renderer.
///
/// Words flow left-to-right in rows, sized linearly between
/// `min_font_size` and `max_font_size` by relative count. No
/// randomness: identical input produces identical bytes.
#[derive(Debug, Clone)]
pub struct SvgWordcloud {
    /// Canvas width in pixels.
    pub width: u32,
    /// Smallest font size used.
    pub min_font_size: f64,
    /// Largest font size used.
    pub max_font_size: f64,
}

impl Default for SvgWordcloud {
    fn default() -> Self {
        Self {
            width: 1200,
            min_font_size: 10.0,
            max_font_size: 72.0,
        }
    }
}

/// Fill colors cycled through in word order.
const PALETTE: &[&str] = &["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"];

/// Rough glyph width as a fraction of font size, for row packing.
const GLYPH_ASPECT: f64 = 0.6;

impl SvgWordcloud {
    fn font_size(&self, count: usize, max_count: usize) -> f64 {
        if max_count == 0 {
            return self.min_font_size;
        }
        let scale = count as f64 / max_count as f64;
        self.min_font_size + (self.max_font_size - self.min_font_size) * scale
    }
}

impl WordcloudRenderer for SvgWordcloud {
    fn render(&self, title: &str, weights: &[WordCount]) -> Vec<u8> {
        let margin = 20.0;
        let title_size = 28.0;
        let max_count = weights.first().map_or(0, |w| w.count);

        let mut body = String::new();
        let mut x = margin;
        let mut y = margin + title_size * 2.0;
        let mut row_height = 0.0f64;

        for (idx, entry) in weights.iter().enumerate() {
            let size = self.font_size(entry.count, max_count);
            let word_width = entry.word.chars().count() as f64 * size * GLYPH_ASPECT;

            if x + word_width > f64::from(self.width) - margin && x > margin {
                x = margin;
                y += row_height + 6.0;
                row_height = 0.0;
            }

            body.push_str(&format!(
                "  <text x=\"{x:.1}\" y=\"{:.1}\" font-size=\"{size:.1}\" \
                 font-family=\"sans-serif\" fill=\"{}\">{}</text>\n",
                y + size,
                PALETTE[idx % PALETTE.len()],
                escape_xml(&entry.word),
            ));

            x += word_width + size * 0.5;
            row_height = row_height.max(size);
        }

        let height = (y + row_height + margin * 2.0).ceil() as u32;
        let svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{height}\" \
             viewBox=\"0 0 {w} {height}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n\
             <text x=\"{half}\" y=\"{title_y:.1}\" font-size=\"{title_size}\" \
             font-family=\"sans-serif\" text-anchor=\"middle\" fill=\"#222\">{title}</text>\n\
             {body}</svg>\n",
            w = self.width,
            half = self.width / 2,
            title_y = margin + title_size,
            title = escape_xml(title),
        );

        svg.into_bytes()
    }

    fn file_extension(&self) -> &'static str {
        "svg"
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
