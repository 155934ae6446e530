//! Page geometry, pagination, and document composition.
//!
//! The raster produced by [`crate::render`] is one tall strip of lines; it
//! is sliced across pages until fully consumed, then composed into a plain
//! text document with the page margins realised as blank lines and a left
//! gutter.

// ─── Geometry ────────────────────────────────────────────────────────────────

/// Physical page description, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFormat {
  pub width_mm:  f32,
  pub height_mm: f32,
  pub margin_mm: f32,
}

/// A4 portrait with the 10 mm margin of the exported reports.
pub const A4: PageFormat = PageFormat {
  width_mm:  210.0,
  height_mm: 297.0,
  margin_mm: 10.0,
};

/// Raster oversampling factor: the region is rasterized at twice the
/// nominal resolution before being sliced across pages.
pub const OVERSAMPLE: u32 = 2;

/// Nominal glyph cell, in millimetres, before oversampling.
const CELL_WIDTH_MM: f32 = 4.0;
const LINE_HEIGHT_MM: f32 = 9.0;

impl PageFormat {
  pub fn content_width_mm(&self) -> f32 {
    self.width_mm - 2.0 * self.margin_mm
  }

  pub fn content_height_mm(&self) -> f32 {
    self.height_mm - 2.0 * self.margin_mm
  }

  /// Character columns available per raster line at [`OVERSAMPLE`].
  pub fn columns(&self) -> usize {
    (self.content_width_mm() * OVERSAMPLE as f32 / CELL_WIDTH_MM) as usize
  }

  /// Raster lines per page at [`OVERSAMPLE`].
  pub fn lines_per_page(&self) -> usize {
    (self.content_height_mm() * OVERSAMPLE as f32 / LINE_HEIGHT_MM) as usize
  }

  /// Left margin, in character cells.
  pub fn margin_cells(&self) -> usize {
    (self.margin_mm * OVERSAMPLE as f32 / CELL_WIDTH_MM) as usize
  }

  /// Top and bottom margin, in raster lines.
  pub fn margin_lines(&self) -> usize {
    (self.margin_mm * OVERSAMPLE as f32 / LINE_HEIGHT_MM) as usize
  }
}

// ─── Pagination ──────────────────────────────────────────────────────────────

/// One page worth of raster lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
  pub lines: Vec<String>,
}

/// Slice `lines` across pages until fully consumed. An empty raster still
/// yields one blank page.
pub fn paginate(lines: &[String], format: &PageFormat) -> Vec<Page> {
  let per_page = format.lines_per_page().max(1);
  if lines.is_empty() {
    return vec![Page { lines: Vec::new() }];
  }
  lines
    .chunks(per_page)
    .map(|chunk| Page { lines: chunk.to_vec() })
    .collect()
}

// ─── Composition ─────────────────────────────────────────────────────────────

/// Compose pages into document bytes. Pages are separated by form feeds;
/// the margins become blank top/bottom lines and a left gutter of spaces.
pub fn compose(pages: &[Page], format: &PageFormat) -> Vec<u8> {
  let gutter = " ".repeat(format.margin_cells());
  let mut out = String::new();

  for (index, page) in pages.iter().enumerate() {
    if index > 0 {
      out.push('\u{c}');
    }
    for _ in 0..format.margin_lines() {
      out.push('\n');
    }
    for line in &page.lines {
      if line.is_empty() {
        out.push('\n');
      } else {
        out.push_str(&gutter);
        out.push_str(line);
        out.push('\n');
      }
    }
    for _ in 0..format.margin_lines() {
      out.push('\n');
    }
  }

  out.into_bytes()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
