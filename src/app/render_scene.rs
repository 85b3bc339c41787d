//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{HandleMarker, RenderScene};

/// Goldener-Schnitt-Schritt im Farbkreis, damit benachbarte Handles unterscheidbar bleiben.
const HUE_STEP: f32 = 0.618_034;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let attached = state.points.attached();
    let handles = state
        .points
        .positions()
        .iter()
        .enumerate()
        .map(|(index, &position)| {
            let is_attached = attached == Some(index);
            HandleMarker {
                position,
                color: if is_attached {
                    state.options.handle_color_attached
                } else {
                    handle_color(index)
                },
                attached: is_attached,
            }
        })
        .collect();

    RenderScene {
        outline: state.points.outline().to_vec(),
        outline_visible: state.options.outline_visible,
        handles,
        camera: state.view.camera.clone(),
        viewport_size,
        options: state.options.clone(),
    }
}

/// Feste Farbe pro Punktindex (gleicher Index → gleiche Farbe über Frames hinweg).
pub fn handle_color(index: usize) -> [f32; 4] {
    let hue = (index as f32 * HUE_STEP).fract();
    let [r, g, b] = hsv_to_rgb(hue, 0.65, 0.85);
    [r, g, b, 1.0]
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let sector = h * 6.0;
    let i = sector.floor();
    let f = sector - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i as u32 % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}
