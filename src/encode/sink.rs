use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;

use crate::{
    animation::frame_loop::FrameLoop,
    foundation::{
        core::WidgetKey,
        error::{ScoreArcError, ScoreArcResult},
    },
    render::{
        raster::{RasterOptions, ensure_parent_dir, rasterize},
        scene::Scene,
        svg::to_svg,
    },
};

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    /// Scene width in layout units.
    pub width: f64,
    /// Scene height in layout units.
    pub height: f64,
    /// Frames per second the animation was sampled at.
    pub fps: u32,
}

/// Sink contract for consuming animation frames in order.
///
/// `push_frame` is called with strictly increasing indices starting at 0.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> ScoreArcResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: u64, scene: &Scene) -> ScoreArcResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> ScoreArcResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, Scene)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Captured frames in order.
    pub fn frames(&self) -> &[(u64, Scene)] {
        &self.frames
    }

    /// Whether `end` was called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ScoreArcResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, scene: &Scene) -> ScoreArcResult<()> {
        self.frames.push((idx, scene.clone()));
        Ok(())
    }

    fn end(&mut self) -> ScoreArcResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Output format of a [`FileSequenceSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceFormat {
    /// One `.svg` document per frame.
    Svg,
    /// One `.png` image per frame.
    Png,
}

/// Writes `<prefix>_<idx:04>.<ext>` files into a directory.
#[derive(Debug)]
pub struct FileSequenceSink {
    dir: PathBuf,
    prefix: String,
    format: SequenceFormat,
    raster: RasterOptions,
    written: Vec<PathBuf>,
}

impl FileSequenceSink {
    /// New sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>, format: SequenceFormat) -> Self {
        Self {
            dir: dir.into(),
            prefix: "frame".to_owned(),
            format,
            raster: RasterOptions::default(),
            written: Vec::new(),
        }
    }

    /// Override the file-name prefix (default `frame`).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Override rasterization options used for PNG output.
    pub fn with_raster_options(mut self, raster: RasterOptions) -> Self {
        self.raster = raster;
        self
    }

    /// Paths written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn path_for(&self, idx: u64) -> PathBuf {
        let ext = match self.format {
            SequenceFormat::Svg => "svg",
            SequenceFormat::Png => "png",
        };
        self.dir.join(format!("{}_{idx:04}.{ext}", self.prefix))
    }
}

impl FrameSink for FileSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> ScoreArcResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, scene: &Scene) -> ScoreArcResult<()> {
        let path = self.path_for(idx);
        match self.format {
            SequenceFormat::Svg => {
                ensure_parent_dir(&path)?;
                std::fs::write(&path, to_svg(scene))
                    .with_context(|| format!("write svg '{}'", path.display()))?;
            }
            SequenceFormat::Png => rasterize(scene, &self.raster)?.save_png(&path)?,
        }
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> ScoreArcResult<()> {
        tracing::info!(
            frames = self.written.len(),
            dir = %self.dir.display(),
            "frame sequence written"
        );
        Ok(())
    }
}

/// Sample one widget's animation at `fps` and stream every frame into `sink`.
///
/// Frame 0 is the scene before the first callback; sampling stops after the frame on which the
/// widget settles, or after `max_frames` frames. Returns the number of frames pushed.
pub fn record_animation(
    frames: &mut FrameLoop,
    key: WidgetKey,
    fps: u32,
    max_frames: u64,
    sink: &mut dyn FrameSink,
) -> ScoreArcResult<u64> {
    if fps == 0 {
        return Err(ScoreArcError::validation("fps must be > 0"));
    }
    if max_frames == 0 {
        return Err(ScoreArcError::validation("max_frames must be > 0"));
    }
    let first = frames
        .scene(key)
        .ok_or_else(|| ScoreArcError::validation(format!("widget key {key} is not mounted")))?;

    let interval = Duration::from_secs_f64(1.0 / f64::from(fps));
    sink.begin(SinkConfig {
        width: first.width,
        height: first.height,
        fps,
    })?;
    sink.push_frame(0, &first)?;

    let mut pushed = 1;
    while pushed < max_frames && frames.has_pending_frame(key) {
        frames.advance(interval);
        let scene = frames
            .scene(key)
            .ok_or_else(|| ScoreArcError::render(format!("widget {key} vanished mid-recording")))?;
        sink.push_frame(pushed, &scene)?;
        pushed += 1;
    }

    sink.end()?;
    Ok(pushed)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
