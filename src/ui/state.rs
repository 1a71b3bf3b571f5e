use crate::geometry::ShapeKind;

pub struct UiState {
    pub shape: ShapeKind,
    pub font_path: String,

    pub show_grid: bool,
    pub auto_rotate: bool,
    pub vsync_enabled: bool,
    pub show_stats: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Box,
            font_path: "assets/vitro.ttf".to_string(),

            show_grid: true,
            auto_rotate: false,
            vsync_enabled: true,
            show_stats: true,
        }
    }
}
