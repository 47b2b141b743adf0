use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{Affine, BezPath, Point, Rect};
use crate::foundation::error::{StudioError, StudioResult};
use crate::render::plan::{DisplayList, DrawOp, TextAlign};
use crate::render::surface::Surface;
use crate::render::text::{FontLibrary, TextBrushRgba8, TextShaper};

/// Gradients differ per frame for animated themes; keep only a few around.
const GRADIENT_CACHE_LIMIT: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct GradientKey {
    start: [u8; 4],
    end: [u8; 4],
    // device-space endpoints, quantized to 1/16 px
    from: (i64, i64),
    to: (i64, i64),
    w: u32,
    h: u32,
}

#[derive(Clone)]
struct ImagePaint {
    // keeps the source bytes alive so the pointer key cannot be reused
    source: Arc<Vec<u8>>,
    paint: vello_cpu::Image,
}

/// CPU backend powered by `vello_cpu`: executes a [`DisplayList`] onto a [`Surface`].
pub struct CpuRasterizer {
    ctx: Option<vello_cpu::RenderContext>,
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
    image_paint: Option<ImagePaint>,
    text: TextShaper,
}

impl CpuRasterizer {
    /// Rasterizer drawing text with `fonts`.
    pub fn new(fonts: FontLibrary) -> Self {
        Self {
            ctx: None,
            gradient_cache: HashMap::new(),
            image_paint: None,
            text: TextShaper::new(fonts),
        }
    }

    /// Clear `surface` and draw every op of `list`, back to front.
    pub fn execute(&mut self, list: &DisplayList, surface: &mut Surface) -> StudioResult<()> {
        let view = Affine::scale(list.canvas.viewport_scale(surface.size()));
        let (width, height) = surface.dims_u16();
        surface.clear();

        self.with_ctx_mut(width, height, |this, ctx| {
            for op in &list.ops {
                this.draw_op(ctx, op, view)?;
            }
            ctx.flush();
            ctx.render_to_pixmap(surface.pixmap_mut());
            Ok(())
        })
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> StudioResult<R>,
    ) -> StudioResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn draw_op(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        op: &DrawOp,
        view: Affine,
    ) -> StudioResult<()> {
        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::LinearGradient {
                rect,
                from,
                to,
                start,
                end,
            } => {
                let device = view.transform_rect_bbox(*rect);
                let x0 = device.x0.floor();
                let y0 = device.y0.floor();
                let w = (device.x1.ceil() - x0).max(1.0) as u32;
                let h = (device.y1.ceil() - y0).max(1.0) as u32;
                let origin = Point::new(x0, y0);
                let from = view * *from - origin.to_vec2();
                let to = view * *to - origin.to_vec2();
                let img = self.gradient_paint(*start, *end, from, to, w, h)?;

                ctx.set_transform(affine_to_cpu(Affine::translate((x0, y0))));
                ctx.set_paint(img);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w as f64, h as f64));
                Ok(())
            }
            DrawOp::FillPath {
                path,
                color,
                transform,
            } => {
                ctx.set_transform(affine_to_cpu(view * *transform));
                ctx.set_paint(color_to_cpu(*color));
                ctx.fill_path(&bezpath_to_cpu(path));
                Ok(())
            }
            DrawOp::FillRect { rect, color } => {
                ctx.set_transform(affine_to_cpu(view));
                ctx.set_paint(color_to_cpu(*color));
                ctx.fill_rect(&rect_to_cpu(*rect));
                Ok(())
            }
            DrawOp::Text {
                text,
                size_px,
                weight,
                align,
                anchor,
                color,
            } => {
                let brush = TextBrushRgba8 {
                    r: color.r,
                    g: color.g,
                    b: color.b,
                    a: color.a,
                };
                let Some(shaped) = self.text.shape(text, *size_px, *weight, brush)? else {
                    return Ok(());
                };
                let x = match align {
                    TextAlign::Start => anchor.x,
                    TextAlign::Center => anchor.x - shaped.width / 2.0,
                };
                let y = anchor.y - shaped.baseline;
                ctx.set_transform(affine_to_cpu(view * Affine::translate((x, y))));

                for line in shaped.layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        let brush = run.style().brush;
                        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                            brush.r, brush.g, brush.b, brush.a,
                        ));
                        let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        ctx.glyph_run(&shaped.font)
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
                Ok(())
            }
            DrawOp::Image {
                image,
                dest,
                transform,
                opacity,
            } => {
                let opacity = opacity.clamp(0.0, 1.0);
                if opacity <= 0.0 || dest.width() <= 0.0 || dest.height() <= 0.0 {
                    return Ok(());
                }
                let paint = self.image_paint_for(image)?;
                let (w, h) = (f64::from(image.width), f64::from(image.height));
                let place = Affine::translate(dest.origin().to_vec2())
                    * Affine::scale_non_uniform(dest.width() / w, dest.height() / h);

                ctx.set_transform(affine_to_cpu(view * *transform * place));
                ctx.set_paint(paint);
                if opacity < 1.0 {
                    ctx.push_opacity_layer(opacity);
                }
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
                if opacity < 1.0 {
                    ctx.pop_layer();
                }
                Ok(())
            }
        }
    }

    fn gradient_paint(
        &mut self,
        start: Rgba8,
        end: Rgba8,
        from: Point,
        to: Point,
        w: u32,
        h: u32,
    ) -> StudioResult<vello_cpu::Image> {
        let q = |v: f64| (v * 16.0).round() as i64;
        let key = GradientKey {
            start: [start.r, start.g, start.b, start.a],
            end: [end.r, end.g, end.b, end.a],
            from: (q(from.x), q(from.y)),
            to: (q(to.x), q(to.y)),
            w,
            h,
        };
        if let Some(img) = self.gradient_cache.get(&key).cloned() {
            return Ok(img);
        }

        let bytes = rasterize_linear_gradient(start, end, from, to, w, h);
        let img = rgba_premul_to_image(&bytes, w, h)?;
        if self.gradient_cache.len() >= GRADIENT_CACHE_LIMIT {
            self.gradient_cache.clear();
        }
        self.gradient_cache.insert(key, img.clone());
        Ok(img)
    }

    fn image_paint_for(&mut self, image: &PreparedImage) -> StudioResult<vello_cpu::Image> {
        if let Some(cached) = &self.image_paint
            && Arc::ptr_eq(&cached.source, &image.rgba8_premul)
        {
            return Ok(cached.paint.clone());
        }
        let paint = rgba_premul_to_image(&image.rgba8_premul, image.width, image.height)?;
        self.image_paint = Some(ImagePaint {
            source: image.rgba8_premul.clone(),
            paint: paint.clone(),
        });
        Ok(paint)
    }
}

/// Premultiplied pixels of a two-stop gradient, projected onto `from -> to`
/// and sampled at pixel centers.
pub(crate) fn rasterize_linear_gradient(
    start: Rgba8,
    end: Rgba8,
    from: Point,
    to: Point,
    w: u32,
    h: u32,
) -> Vec<u8> {
    let mut bytes = vec![0u8; (w as usize).saturating_mul(h as usize).saturating_mul(4)];
    let d = to - from;
    let len2 = d.hypot2();
    for y in 0..h {
        for x in 0..w {
            let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let t = if len2 <= f64::EPSILON {
                0.0
            } else {
                ((p - from).dot(d) / len2).clamp(0.0, 1.0)
            };
            let c = start.lerp(end, t as f32).to_premul();
            let idx = ((y as usize) * (w as usize) + (x as usize)) * 4;
            bytes[idx..idx + 4].copy_from_slice(&c);
        }
    }
    bytes
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> StudioResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| StudioError::surface("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| StudioError::surface("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(StudioError::validation("pixmap byte len mismatch"));
    }
    let mut may_have_opacities = false;
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        may_have_opacities |= px[3] != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> StudioResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
