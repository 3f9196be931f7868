//! Renderer-agnostic draw instructions for seat-arrangement reports.
//!
//! A planned [`Document`] is turned into one [`PageScene`] per page. Backends
//! (vector PDF, SVG, canvas) implement [`DocumentRenderer`] and only ever
//! consume scenes, so they all paint identical planner output.

pub mod primitives;
pub mod scene;

pub use primitives::*;
pub use scene::{build_scene, build_scene_with_style, SceneStyle};

use seatplan_core::RenderError;
use seatplan_layout::Document;

/// A backend that paints planned documents into a concrete medium.
pub trait DocumentRenderer {
    /// What the backend produces, e.g. PDF bytes or one SVG string per page.
    type Output;

    /// Render every page of the document.
    fn render(&mut self, document: &Document) -> Result<Self::Output, RenderError>;
}

/// Make sure no instruction of a scene leaves its page.
pub fn check_scene(scene: &PageScene) -> Result<(), RenderError> {
    let page = scene.bounds();
    match scene.commands.iter().find(|c| !page.encloses(&c.extent())) {
        Some(command) => Err(RenderError::OffPage {
            page: scene.page_index,
            instruction: format!("{command:?}"),
        }),
        None => Ok(()),
    }
}

/// Build the scenes of a document and check each of them.
pub fn checked_scenes(document: &Document, style: &SceneStyle) -> Result<Vec<PageScene>, RenderError> {
    let scenes = build_scene_with_style(document, style);
    for scene in &scenes {
        check_scene(scene)?;
    }
    Ok(scenes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatplan_core::{Color, PageGeometry, SeatArrangementConfig};
    use seatplan_layout::{plan_report, Bounds};

    #[test]
    fn test_tall_rows_stay_on_page() {
        // 10pt body on a 202pt page with 18pt rows
        let geometry = PageGeometry {
            page_height: 202.0,
            ..PageGeometry::a4()
        };
        let report = plan_report(&SeatArrangementConfig::new(2, 1, 1), &geometry).unwrap();
        let scenes = checked_scenes(&report.document, &SceneStyle::default()).unwrap();
        assert_eq!(scenes.len(), 2);
        assert!(scenes.iter().all(|s| s.row_bands().count() == 1));
    }

    #[test]
    fn test_check_scene_rejects_off_page() {
        let mut scene = PageScene::new(2, 100.0, 100.0);
        scene.rect(RectPrimitive::new(Bounds::new(10.0, 10.0, 20.0, 20.0)).with_fill(Color::BLACK));
        assert!(check_scene(&scene).is_ok());

        scene.rect(RectPrimitive::new(Bounds::new(90.0, 95.0, 20.0, 20.0)));
        match check_scene(&scene) {
            Err(RenderError::OffPage { page, .. }) => assert_eq!(page, 2),
            other => panic!("expected off-page error, got {other:?}"),
        }
    }
}
