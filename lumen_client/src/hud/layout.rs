/// Screen layout helpers shared by the built-in HUDs.

use glam::Vec2;
use crate::render::Rect2D;

/// Top-left corner of a `size` box centered on a `screen` sized window
pub fn centered(screen: Vec2, size: Vec2) -> Vec2 {
    ((screen - size) * 0.5).max(Vec2::ZERO)
}

/// Cell `index` of a row-major grid of `columns` square cells
pub fn grid_rect(origin: Vec2, columns: usize, cell: f32, gap: f32, index: usize) -> Rect2D {
    let columns = columns.max(1);
    let column = (index % columns) as f32;
    let row = (index / columns) as f32;
    let stride = cell + gap;
    Rect2D {
        x: (origin.x + column * stride) as i32,
        y: (origin.y + row * stride) as i32,
        width: cell as u32,
        height: cell as u32,
    }
}

/// Quad-space position/size of a rect
pub(crate) fn rect_vecs(rect: Rect2D) -> (Vec2, Vec2) {
    (
        Vec2::new(rect.x as f32, rect.y as f32),
        Vec2::new(rect.width as f32, rect.height as f32),
    )
}
