//! The editor control loop.
//!
//! `Editor` owns every piece of session state and is the only thing that mutates it. The UI
//! host feeds it `InputEvent`s and `Command`s, calls `update` once per frame with the elapsed
//! time, and draws whatever `canvas_image` returns. Changes are announced on the event bus.

use std::path::PathBuf;

use egui::{ColorImage, PointerButton, Pos2};

use crate::animation::AnimationClock;
use crate::codec::{self, LoadedProject, export, project};
use crate::command::{Command, History};
use crate::config::{CANVAS_SIZES, EditorConfig};
use crate::error::{EditorError, Result};
use crate::event::{DocumentEvent, EditorEvent, EventBus};
use crate::frames::FrameSequence;
use crate::grid::PixelGrid;
use crate::host::{HostDialogs, NoDialogs};
use crate::input::{self, InputEvent};
use crate::palette::{self, Palette};
use crate::pixel::Pixel;
use crate::render;
use crate::tool::{self, ToolKind, ToolState};
use crate::util::time::timestamped_file_name;

pub struct Editor {
    frames: FrameSequence,
    history: History,
    tools: ToolState,
    clock: AnimationClock,
    palette: &'static Palette,
    pixel_size: u32,
    config: EditorConfig,
    dialogs: Box<dyn HostDialogs>,
    event_bus: EventBus,
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("side", &self.frames.side())
            .field("frames", &self.frames.len())
            .field("current", &self.frames.current_index())
            .field("tools", &self.tools)
            .field("clock", &self.clock)
            .field("palette", &self.palette.name)
            .field("history", &self.history.len())
            .finish()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        let frames = FrameSequence::new(config.canvas_size);
        let history = History::new(frames.current());
        let palette = palette::find(&config.palette).unwrap_or_else(|| {
            log::warn!("Unknown palette {:?}, using {}", config.palette, palette::DEFAULT_PALETTE);
            &palette::PALETTES[0]
        });
        Self {
            frames,
            history,
            tools: ToolState::default(),
            clock: AnimationClock::new(config.fps),
            palette,
            pixel_size: config.pixel_size.max(1),
            config,
            dialogs: Box::new(NoDialogs),
            event_bus: EventBus::new(),
        }
    }

    /// Install the host's color and file dialogs.
    pub fn with_dialogs(mut self, dialogs: Box<dyn HostDialogs>) -> Self {
        self.dialogs = dialogs;
        self
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn frames(&self) -> &FrameSequence {
        &self.frames
    }

    pub fn current_grid(&self) -> &PixelGrid {
        self.frames.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn palette(&self) -> &'static Palette {
        self.palette
    }

    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The current frame as a texture for the host to draw.
    pub fn canvas_image(&self) -> ColorImage {
        render::frame_image(self.frames.current())
    }

    /// Canvas-relative position to cell coordinates. May be outside the grid, but by no
    /// more than one canvas side in each direction.
    pub fn cell_at(&self, pos: Pos2) -> (i64, i64) {
        let size = self.pixel_size as f32;
        let side = self.frames.side() as f32;
        let to_cell = |v: f32| (v / size).floor().clamp(-side, 2.0 * side) as i64;
        (to_cell(pos.x), to_cell(pos.y))
    }

    /// Advance playback by `delta_secs`. Returns whether the visible frame changed.
    pub fn update(&mut self, delta_secs: f64) -> bool {
        let moved = self.clock.tick(delta_secs, &mut self.frames);
        if moved {
            self.emit_frame_changed();
        }
        moved
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::PointerDown { pos, .. } | InputEvent::PointerMove { pos }
                if !pos.is_finite() =>
            {
                log::debug!("Dropping pointer event at {pos:?}");
            }
            InputEvent::PointerUp { pos, .. } if !pos.is_finite() => {
                self.tools.end_stroke();
            }
            InputEvent::PointerDown { pos, button } => self.pointer_down(pos, button),
            InputEvent::PointerMove { pos } => self.pointer_move(pos),
            InputEvent::PointerUp { pos, .. } => self.pointer_up(pos),
            InputEvent::Key { key, modifiers } => {
                if let Some(command) = input::shortcut(key, modifiers) {
                    return self.execute(command);
                }
            }
        }
        Ok(())
    }

    fn pointer_down(&mut self, pos: Pos2, button: PointerButton) {
        let (x, y) = self.cell_at(pos);
        if !self.frames.current().contains(x, y) {
            return;
        }
        let tool = match button {
            PointerButton::Primary => self.tools.tool,
            PointerButton::Secondary => ToolKind::Eraser,
            _ => return,
        };

        let color = self.tools.color;
        let grid = self.frames.current_mut();
        match tool {
            ToolKind::Brush | ToolKind::Eraser => {
                tool::apply_point(grid, tool, x, y, color);
                self.tools.begin_stroke(tool, (x, y));
                self.commit_stroke();
            }
            ToolKind::Fill => {
                tool::flood_fill(grid, x, y, color);
                self.commit_stroke();
            }
            ToolKind::Line => self.tools.begin_stroke(tool, (x, y)),
        }
    }

    fn pointer_move(&mut self, pos: Pos2) {
        let Some(stroke) = self.tools.stroke() else {
            return;
        };
        if !stroke.tool.is_freehand() {
            return;
        }
        let cell = self.cell_at(pos);
        if cell == stroke.anchor {
            return;
        }
        // Join to the previous sample so quick drags leave no gaps.
        let color = tool::effective_color(stroke.tool, self.tools.color);
        tool::rasterize_line(self.frames.current_mut(), stroke.anchor, cell, color);
        self.tools.move_anchor(cell);
    }

    fn pointer_up(&mut self, pos: Pos2) {
        let Some(stroke) = self.tools.end_stroke() else {
            return;
        };
        if stroke.tool == ToolKind::Line {
            let end = self.cell_at(pos);
            let color = self.tools.color;
            tool::rasterize_line(self.frames.current_mut(), stroke.anchor, end, color);
            self.commit_stroke();
        }
    }

    fn commit_stroke(&mut self) {
        self.history.snapshot(self.frames.current());
        self.event_bus.emit(EditorEvent::DocumentChanged(DocumentEvent::Modified));
        self.emit_history_changed();
    }

    /// Dispatch a discrete command. File and export failures are also reported to the
    /// host as a `Message` event; the in-memory project is never left half-changed.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        log::debug!("Executing {command:?}");
        match command {
            Command::SelectTool(new) => {
                let old = self.tools.tool;
                self.tools.tool = new;
                self.tools.end_stroke();
                if old != new {
                    self.event_bus.emit(EditorEvent::ToolChanged { old, new });
                }
            }
            Command::SetColor(color) => self.set_color(color),
            Command::PickColor => {
                if let Some(color) = self.dialogs.pick_color(self.tools.color) {
                    self.set_color(color);
                }
            }
            Command::SelectPalette(name) => match palette::find(&name) {
                Some(palette) => {
                    self.palette = palette;
                    self.event_bus.emit(EditorEvent::PaletteChanged(name));
                }
                None => log::warn!("Ignoring unknown palette {name:?}"),
            },
            Command::PickPaletteColor(index) => {
                if let Some(color) = self.palette.color(index) {
                    self.set_color(color);
                }
            }
            Command::AddFrame => {
                self.frames.add_frame();
                self.history.snapshot(self.frames.current());
                self.emit_frame_changed();
                self.emit_history_changed();
            }
            Command::RemoveFrame => {
                if self.frames.remove_frame() {
                    self.history.snapshot(self.frames.current());
                    self.emit_frame_changed();
                    self.emit_history_changed();
                }
            }
            Command::PreviousFrame => {
                if self.frames.previous() {
                    self.emit_frame_changed();
                }
            }
            Command::NextFrame => {
                if self.frames.next() {
                    self.emit_frame_changed();
                }
            }
            Command::GoToFrame(index) => {
                self.frames.set_current(index)?;
                self.emit_frame_changed();
            }
            Command::TogglePlayback => {
                let playing = self.clock.toggle();
                self.event_bus.emit(EditorEvent::PlaybackToggled { playing });
            }
            Command::SetSpeed(fps) => {
                self.clock.set_fps(fps);
                self.event_bus.emit(EditorEvent::SpeedChanged { fps: self.clock.fps() });
            }
            Command::ResizeCanvas(side) => self.resize_canvas(side),
            Command::Undo => self.undo(),
            Command::ExportPng => {
                let path = self.report("PNG", |editor| editor.export_png())?;
                let body = format!("PNG saved as:\n{}", path.display());
                self.notify_document(DocumentEvent::Exported, "Export", body);
            }
            Command::ExportGif => {
                let path = self.report("GIF", |editor| editor.export_gif())?;
                let body = format!("GIF saved as:\n{}", path.display());
                self.notify_document(DocumentEvent::Exported, "Export", body);
            }
            Command::SaveProject => {
                let path = self.report("Save", |editor| editor.save_project())?;
                let body = format!("Project saved:\n{}", path.display());
                self.notify_document(DocumentEvent::Saved, "Save", body);
            }
            Command::LoadProject => {
                if let Some(path) = self.dialogs.pick_project_path() {
                    self.execute(Command::LoadProjectFrom(path))?;
                }
            }
            Command::LoadProjectFrom(path) => {
                self.report("Load", |editor| editor.load_project(&path))?;
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let body = format!("Project loaded:\n{name}");
                self.notify_document(DocumentEvent::Loaded, "Load", body);
            }
        }
        Ok(())
    }

    fn set_color(&mut self, color: Pixel) {
        self.tools.color = color;
        self.event_bus.emit(EditorEvent::ColorChanged(color));
    }

    /// Restore the previous snapshot into the current frame.
    pub fn undo(&mut self) {
        if !self.history.can_undo() {
            return;
        }
        if let Some(grid) = self.history.undo() {
            if grid.side() == self.frames.side() {
                *self.frames.current_mut() = grid;
            }
            self.event_bus.emit(EditorEvent::DocumentChanged(DocumentEvent::Modified));
            self.emit_history_changed();
        }
    }

    /// Starts over with one blank frame of `side` cells. Frames and history are discarded.
    /// Only the sizes in `CANVAS_SIZES` are accepted.
    pub fn resize_canvas(&mut self, side: usize) {
        if !CANVAS_SIZES.contains(&side) {
            log::warn!("Ignoring resize to unsupported canvas size {side}");
            return;
        }
        self.frames.resize(side);
        self.history.reset(self.frames.current());
        self.tools.end_stroke();
        self.event_bus.emit(EditorEvent::CanvasResized {
            side,
            pixel_size: self.pixel_size,
        });
        self.emit_frame_changed();
        self.emit_history_changed();
    }

    pub fn export_png(&self) -> Result<PathBuf> {
        let image = codec::to_static_image(self.frames.current(), self.config.export_scale);
        let path = self.output_path("pixel_art", "png");
        export::save_png(&image, &path)?;
        Ok(path)
    }

    pub fn export_gif(&self) -> Result<PathBuf> {
        let animation =
            codec::to_animated_image(&self.frames, self.clock.fps(), self.config.export_scale)?;
        let path = self.output_path("animation", "gif");
        export::save_gif(&animation, &path)?;
        Ok(path)
    }

    pub fn save_project(&self) -> Result<PathBuf> {
        let doc = project::serialize(&self.frames, self.palette.name, self.pixel_size);
        let path = self.output_path("project", "json");
        project::save(&doc, &path)?;
        Ok(path)
    }

    /// Replaces the session with the project at `path`. On error nothing changes.
    pub fn load_project(&mut self, path: &std::path::Path) -> Result<()> {
        let loaded = project::load(path)?;
        self.apply_project(loaded);
        Ok(())
    }

    /// Installs an already validated project.
    pub fn apply_project(&mut self, loaded: LoadedProject) {
        let LoadedProject {
            frames,
            canvas_size,
            pixel_size,
            palette: palette_name,
        } = loaded;

        let resized = canvas_size != self.frames.side();
        if resized {
            self.pixel_size = pixel_size.max(1);
        }
        self.frames = frames;
        self.history.reset(self.frames.current());
        self.tools.end_stroke();

        if let Some(name) = palette_name {
            match palette::find(&name) {
                Some(palette) => {
                    self.palette = palette;
                    self.event_bus.emit(EditorEvent::PaletteChanged(name));
                }
                None => log::warn!(
                    "Project uses unknown palette {name:?}, keeping {}",
                    self.palette.name
                ),
            }
        }
        if resized {
            self.event_bus.emit(EditorEvent::CanvasResized {
                side: canvas_size,
                pixel_size: self.pixel_size,
            });
        }
        self.emit_frame_changed();
        self.emit_history_changed();
    }

    fn output_path(&self, prefix: &str, extension: &str) -> PathBuf {
        self.config.output_dir.join(timestamped_file_name(prefix, extension))
    }

    /// Runs a file operation, turning a failure into an error message for the host.
    fn report<T>(&mut self, what: &str, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        op(self).inspect_err(|err| {
            match err {
                EditorError::Io(_) => log::error!("{what} failed: {err}"),
                _ => log::warn!("{what} failed: {err}"),
            }
            self.event_bus.emit(EditorEvent::Message {
                title: "Error".to_owned(),
                body: err.to_string(),
            });
        })
    }

    fn notify_document(&self, event: DocumentEvent, title: &str, body: String) {
        self.event_bus.emit(EditorEvent::DocumentChanged(event));
        self.event_bus.emit(EditorEvent::Message {
            title: title.to_owned(),
            body,
        });
    }

    fn emit_frame_changed(&self) {
        self.event_bus.emit(EditorEvent::FrameChanged {
            current: self.frames.current_index(),
            total: self.frames.len(),
        });
    }

    fn emit_history_changed(&self) {
        self.event_bus.emit(EditorEvent::HistoryChanged {
            depth: self.history.len(),
        });
    }
}
