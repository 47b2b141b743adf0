use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{StudioError, StudioResult};
use crate::render::plan::FontWeight;

/// Family names tried before the generic sans-serif fallback.
const PREFERRED_FAMILIES: [&str; 5] = [
    "Arial",
    "Helvetica",
    "Liberation Sans",
    "DejaVu Sans",
    "Noto Sans",
];

/// Raw font face bytes.
#[derive(Clone)]
pub struct FontFace {
    /// Raw font file data.
    pub bytes: Arc<Vec<u8>>,
    /// Face index inside a collection file.
    pub index: u32,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .finish()
    }
}

/// Bold and regular faces used for labels. Either may be missing.
#[derive(Clone, Debug, Default)]
pub struct FontLibrary {
    bold: Option<FontFace>,
    regular: Option<FontFace>,
}

impl FontLibrary {
    /// No fonts: text ops are skipped.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve sans-serif faces from the system font database.
    pub fn system() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        let lib = Self {
            bold: query_face(&db, usvg::fontdb::Weight::BOLD),
            regular: query_face(&db, usvg::fontdb::Weight::NORMAL),
        };
        tracing::debug!(
            faces = db.faces().count(),
            bold = lib.bold.is_some(),
            regular = lib.regular.is_some(),
            "resolved system fonts"
        );
        lib
    }

    /// Use one font file for every weight.
    pub fn from_file(path: &Path) -> StudioResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        let face = FontFace {
            bytes: Arc::new(bytes),
            index: 0,
        };
        Ok(Self {
            bold: Some(face.clone()),
            regular: Some(face),
        })
    }

    /// Explicit font file when configured, system fonts otherwise.
    pub fn resolve(font_path: Option<&Path>) -> StudioResult<Self> {
        match font_path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::system()),
        }
    }

    /// Face for `weight`, falling back to the other weight when missing.
    pub fn face(&self, weight: FontWeight) -> Option<&FontFace> {
        match weight {
            FontWeight::Bold => self.bold.as_ref().or(self.regular.as_ref()),
            FontWeight::Regular => self.regular.as_ref().or(self.bold.as_ref()),
        }
    }

    /// True when no face was found; text ops then draw nothing.
    pub fn is_empty(&self) -> bool {
        self.bold.is_none() && self.regular.is_none()
    }
}

fn query_face(db: &usvg::fontdb::Database, weight: usvg::fontdb::Weight) -> Option<FontFace> {
    let mut families: Vec<usvg::fontdb::Family<'_>> = PREFERRED_FAMILIES
        .iter()
        .map(|name| usvg::fontdb::Family::Name(*name))
        .collect();
    families.push(usvg::fontdb::Family::SansSerif);

    let query = usvg::fontdb::Query {
        families: &families,
        weight,
        stretch: usvg::fontdb::Stretch::Normal,
        style: usvg::fontdb::Style::Normal,
    };
    let id = db.query(&query).or_else(|| db.faces().next().map(|f| f.id))?;
    db.with_face_data(id, |data, index| FontFace {
        bytes: Arc::new(data.to_vec()),
        index,
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

/// Parley contexts bound to exactly one registered face, so shaping and glyph
/// outlines always come from the same font.
struct FaceLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

impl FaceLayoutEngine {
    fn new(face: &FontFace) -> StudioResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(face.bytes.as_ref().clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            StudioError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| StudioError::validation("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(face.bytes.as_ref().clone()),
            face.index,
        );

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
        })
    }

    fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> parley::Layout<TextBrushRgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

/// Shaped single-line text ready to be drawn.
pub(crate) struct ShapedLine {
    pub(crate) layout: parley::Layout<TextBrushRgba8>,
    pub(crate) font: vello_cpu::peniko::FontData,
    pub(crate) width: f64,
    pub(crate) baseline: f64,
}

/// Lazily built per-weight layout engines over a [`FontLibrary`].
pub(crate) struct TextShaper {
    fonts: FontLibrary,
    bold: Option<FaceLayoutEngine>,
    regular: Option<FaceLayoutEngine>,
    warned_missing: bool,
}

impl TextShaper {
    pub(crate) fn new(fonts: FontLibrary) -> Self {
        Self {
            fonts,
            bold: None,
            regular: None,
            warned_missing: false,
        }
    }

    pub(crate) fn shape(
        &mut self,
        text: &str,
        size_px: f32,
        weight: FontWeight,
        brush: TextBrushRgba8,
    ) -> StudioResult<Option<ShapedLine>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(StudioError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let Some(face) = self.fonts.face(weight).cloned() else {
            if !self.warned_missing {
                tracing::warn!("no font available; text labels are skipped");
                self.warned_missing = true;
            }
            return Ok(None);
        };

        let slot = match weight {
            FontWeight::Bold => &mut self.bold,
            FontWeight::Regular => &mut self.regular,
        };
        if slot.is_none() {
            *slot = Some(FaceLayoutEngine::new(&face)?);
        }
        let Some(engine) = slot.as_mut() else {
            return Ok(None);
        };

        let layout = engine.layout_line(text, size_px, brush);
        let width = f64::from(layout.width());
        let baseline = layout
            .lines()
            .next()
            .map(|line| f64::from(line.metrics().baseline))
            .unwrap_or(f64::from(size_px) * 0.8);
        Ok(Some(ShapedLine {
            layout,
            font: engine.font.clone(),
            width,
            baseline,
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
