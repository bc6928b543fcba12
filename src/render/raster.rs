use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;

use crate::{
    foundation::{
        color::Color,
        error::{ScoreArcError, ScoreArcResult},
    },
    render::{scene::Scene, svg::to_svg},
};

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Convert to straight alpha in place (no-op if already straight).
    pub fn unpremultiply(&mut self) {
        if !self.premultiplied {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        self.premultiplied = false;
    }

    /// Write as PNG (straight alpha), creating parent directories as needed.
    pub fn save_png(&self, path: impl AsRef<Path>) -> ScoreArcResult<()> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;

        let mut straight = self.clone();
        straight.unpremultiply();
        image::save_buffer_with_format(
            path,
            &straight.data,
            straight.width,
            straight.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    /// Pixel at `(x, y)` as `[r, g, b, a]`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Rasterization settings.
#[derive(Clone, Debug)]
pub struct RasterOptions {
    /// Device pixels per layout unit.
    pub scale: f32,
    /// Optional fill behind the scene; transparent when `None`.
    pub background: Option<Color>,
    /// Load system fonts so labels render. Without fonts text nodes are skipped.
    pub system_fonts: bool,
    /// Extra directory scanned for `.ttf`/`.otf`/`.ttc` files.
    pub fonts_dir: Option<PathBuf>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
            system_fonts: true,
            fonts_dir: None,
        }
    }
}

/// Rasterize a scene to premultiplied RGBA8 via `usvg` + `resvg`.
#[tracing::instrument(skip(scene, opts), fields(width = scene.width, height = scene.height))]
pub fn rasterize(scene: &Scene, opts: &RasterOptions) -> ScoreArcResult<FrameRGBA> {
    let svg = to_svg(scene);
    let usvg_opts = usvg::Options {
        fontdb: build_fontdb(opts),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &usvg_opts).context("parse scene svg")?;

    let (width, height) = raster_size(scene, opts.scale)?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ScoreArcError::render("failed to allocate pixmap"))?;
    if let Some(bg) = opts.background {
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
    }

    let xform = resvg::tiny_skia::Transform::from_scale(opts.scale, opts.scale);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.data().to_vec(),
        premultiplied: true,
    })
}

fn raster_size(scene: &Scene, scale: f32) -> ScoreArcResult<(u32, u32)> {
    fn to_px(v: f64) -> ScoreArcResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ScoreArcError::render("scene has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    if !scale.is_finite() || scale <= 0.0 {
        return Err(ScoreArcError::validation("raster scale must be finite and > 0"));
    }
    let w = to_px(scene.width * f64::from(scale))?;
    let h = to_px(scene.height * f64::from(scale))?;

    const MAX_DIM: u32 = 16_384;
    if w > MAX_DIM || h > MAX_DIM {
        return Err(ScoreArcError::render(format!(
            "raster size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }
    Ok((w, h))
}

fn build_fontdb(opts: &RasterOptions) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    if opts.system_fonts {
        db.load_system_fonts();
    }
    if let Some(dir) = &opts.fonts_dir {
        db.load_fonts_dir(dir);
    }
    tracing::debug!(faces = db.len(), "font database ready");
    Arc::new(db)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> ScoreArcResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
