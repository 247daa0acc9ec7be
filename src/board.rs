//! Planning-canvas boards and the `sboard guides` command.
//!
//! A board file is JSON:
//!
//! ```json
//! { "items": [
//!     { "id": "cmu", "kind": "university", "title": "CMU",
//!       "x": 100, "y": 100, "width": 50, "height": 50 }
//! ] }
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use studyboard_core::{compute_guides, compute_snap, GuideSet, Rect, Snap};

use crate::config::Config;

/// What a canvas item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    University,
    Course,
    Lab,
    Faculty,
    Note,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardItem {
    pub id: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten)]
    pub rect: Rect,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    pub items: Vec<BoardItem>,
}

impl Board {
    pub fn find(&self, id: &str) -> Option<&BoardItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Item ids must be unique; guides compare one item against the rest by id.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                bail!("Duplicate item id '{}' on the board", item.id);
            }
        }
        Ok(())
    }
}

/// Guides and snap suggestion for one moving item.
#[derive(Debug, Clone, Serialize)]
pub struct GuideReport {
    pub item: String,
    pub guides: GuideSet,
    pub snap: Snap,
}

pub fn load_board(path: &Path) -> Result<Board> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file: {}", path.display()))?;
    let board: Board = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse board file: {}", path.display()))?;
    board
        .validate()
        .with_context(|| format!("Invalid board file: {}", path.display()))?;
    Ok(board)
}

/// Compute guides for `item_id` against every other item on the board.
pub fn guides_for(board: &Board, item_id: &str, threshold: f64) -> Result<GuideReport> {
    let current = match board.find(item_id) {
        Some(item) => item,
        None => bail!("No item with id '{}' on the board", item_id),
    };

    let others: Vec<Rect> = board
        .items
        .iter()
        .filter(|item| item.id != item_id)
        .map(|item| item.rect)
        .collect();

    Ok(GuideReport {
        item: current.id.clone(),
        guides: compute_guides(&current.rect, &others, threshold),
        snap: compute_snap(&current.rect, &others, threshold),
    })
}

pub fn run_guides(
    config: &Config,
    board_path: &Path,
    item_id: &str,
    threshold: Option<f64>,
    json: bool,
) -> Result<()> {
    let threshold = threshold.unwrap_or(config.canvas.snap_threshold);
    if !threshold.is_finite() || threshold < 0.0 {
        bail!("--threshold must be a finite number >= 0");
    }

    let board = load_board(board_path)?;
    tracing::debug!(items = board.items.len(), threshold, "board loaded");

    let report = guides_for(&board, item_id, threshold)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("item: {}", report.item);
    println!("vertical: {}", format_coords(&report.guides.vertical));
    println!("horizontal: {}", format_coords(&report.guides.horizontal));
    println!(
        "snap: dx={}, dy={}",
        format_offset(report.snap.dx),
        format_offset(report.snap.dy)
    );

    Ok(())
}

fn format_coords(coords: &[f64]) -> String {
    if coords.is_empty() {
        return "(none)".to_string();
    }
    coords
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_offset(offset: Option<f64>) -> String {
    match offset {
        Some(d) => format!("{:+}", d),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        serde_json::from_str(
            r#"{ "items": [
                { "id": "cmu", "kind": "university", "x": 100, "y": 100, "width": 50, "height": 50 },
                { "id": "ml", "kind": "course", "title": "ML 101", "x": 104, "y": 100, "width": 50, "height": 50 },
                { "id": "far", "kind": "note", "x": 900, "y": 900, "width": 10, "height": 10 }
            ] }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_board_parses_flattened_rects() {
        let board = board();
        let ml = board.find("ml").unwrap();
        assert_eq!(ml.kind, ItemKind::Course);
        assert_eq!(ml.title.as_deref(), Some("ML 101"));
        assert_eq!(ml.rect, Rect::new(104.0, 100.0, 50.0, 50.0));
    }

    #[test]
    fn test_guides_exclude_moving_item() {
        let report = guides_for(&board(), "cmu", 8.0).unwrap();
        assert_eq!(report.guides.vertical, vec![104.0, 154.0, 129.0]);
        assert_eq!(report.guides.horizontal, vec![100.0, 150.0, 125.0]);
        assert_eq!(report.snap.dx, Some(4.0));
        assert_eq!(report.snap.dy, Some(0.0));
    }

    #[test]
    fn test_unknown_item_is_error() {
        let err = guides_for(&board(), "nope", 8.0).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut board = board();
        assert!(board.validate().is_ok());

        let mut copy = board.items[0].clone();
        copy.rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        board.items.push(copy);

        let err = board.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate item id 'cmu'"));
    }

    #[test]
    fn test_load_board_rejects_duplicate_ids() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(
            &path,
            r#"{ "items": [
                { "id": "a", "kind": "lab", "x": 0, "y": 0, "width": 10, "height": 10 },
                { "id": "a", "kind": "note", "x": 4, "y": 0, "width": 10, "height": 10 }
            ] }"#,
        )
        .unwrap();

        let err = load_board(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Duplicate item id 'a'"));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let parsed: Result<Board, _> = serde_json::from_str(
            r#"{ "items": [ { "id": "x", "kind": "sticker", "x": 0, "y": 0, "width": 1, "height": 1 } ] }"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_coords(&[]), "(none)");
        assert_eq!(format_coords(&[104.0, 12.5]), "104, 12.5");
        assert_eq!(format_offset(Some(4.0)), "+4");
        assert_eq!(format_offset(Some(-2.5)), "-2.5");
        assert_eq!(format_offset(None), "-");
    }
}
