use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::frames::FrameSequence;
use crate::grid::PixelGrid;
use crate::pixel::Pixel;

/// On-disk layout of a saved project.
///
/// Each frame is indexed `[x][y]`: the outer array walks columns, the inner array walks
/// the cells of one column from top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub canvas_size: usize,
    pub pixel_size: u32,
    pub frames: Vec<Vec<Vec<Pixel>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
}

/// A validated project, ready to replace the editor's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProject {
    pub frames: FrameSequence,
    pub canvas_size: usize,
    pub pixel_size: u32,
    /// `None` when the file did not name a palette.
    pub palette: Option<String>,
}

/// Captures every frame of `frames` into a document.
pub fn serialize(frames: &FrameSequence, palette: &str, pixel_size: u32) -> ProjectDocument {
    let side = frames.side();
    let frames = frames
        .frames()
        .iter()
        .map(|grid| {
            (0..side)
                .map(|x| grid.column(x).map(<[Pixel]>::to_vec).unwrap_or_default())
                .collect()
        })
        .collect();

    ProjectDocument {
        canvas_size: side,
        pixel_size,
        frames,
        palette: Some(palette.to_owned()),
    }
}

/// Validates a document and rebuilds its frames.
///
/// Nothing is returned unless every frame is `canvas_size` by `canvas_size`.
pub fn deserialize(doc: &ProjectDocument) -> Result<LoadedProject> {
    let side = doc.canvas_size;
    if side == 0 {
        return Err(EditorError::Format("canvas_size must be positive".to_owned()));
    }
    if doc.pixel_size == 0 {
        return Err(EditorError::Format("pixel_size must be positive".to_owned()));
    }
    if doc.frames.is_empty() {
        return Err(EditorError::Format("project contains no frames".to_owned()));
    }

    let mut grids = Vec::with_capacity(doc.frames.len());
    for (index, columns) in doc.frames.iter().enumerate() {
        if columns.len() != side || columns.iter().any(|column| column.len() != side) {
            return Err(EditorError::Format(format!(
                "frame {index} does not match canvas_size {side}"
            )));
        }

        let mut grid = PixelGrid::new(side);
        for (x, column) in columns.iter().enumerate() {
            for (y, &pixel) in column.iter().enumerate() {
                if !pixel.is_background() {
                    grid.set(x, y, pixel)?;
                }
            }
        }
        grids.push(grid);
    }

    Ok(LoadedProject {
        frames: FrameSequence::from_frames(grids)?,
        canvas_size: side,
        pixel_size: doc.pixel_size,
        palette: doc.palette.clone(),
    })
}

pub fn to_json(doc: &ProjectDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Parses and validates a project in one step.
pub fn from_json(json: &str) -> Result<LoadedProject> {
    let doc: ProjectDocument = serde_json::from_str(json)?;
    deserialize(&doc)
}

pub fn save(doc: &ProjectDocument, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, doc)?;
    writer.flush()?;
    log::info!("Project saved: {}", path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<LoadedProject> {
    let reader = BufReader::new(fs::File::open(path)?);
    let doc: ProjectDocument = serde_json::from_reader(reader)?;
    let project = deserialize(&doc)?;
    log::info!(
        "Project loaded: {} ({} frames, {2}x{2})",
        path.display(),
        project.frames.len(),
        project.canvas_size
    );
    Ok(project)
}
