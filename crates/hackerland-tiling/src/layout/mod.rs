//! Layout engine: master-stack, monocle, grid, and the passthrough override.

mod calculation;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use hackerland_common::Rect;
    use hackerland_config::schema::{BarPosition, LayoutMode};
    use hackerland_config::HackerlandConfig;

    /// Usable area equals the display: no padding, bar, or border.
    fn bare(mode: LayoutMode) -> LayoutEngine {
        LayoutEngine {
            gap: 10,
            outer_padding: 0,
            border_width: 0,
            bar_height: 0,
            bar_position: BarPosition::Top,
            master_split: 0.5,
            mode,
            passthrough: false,
        }
    }

    fn display() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    #[test]
    fn empty_list_gives_empty_result() {
        let engine = bare(LayoutMode::MasterStack);
        assert!(engine.compute::<u32>(&[], display()).is_empty());
    }

    #[test]
    fn single_window_fills_usable_area() {
        let engine = bare(LayoutMode::MasterStack);
        let result = engine.compute(&[1], display());
        assert_eq!(result, vec![(1, display())]);
    }

    #[test]
    fn master_stack_three_windows() {
        let engine = bare(LayoutMode::MasterStack);
        let result = engine.compute(&[1, 2, 3], display());

        assert_eq!(result[0], (1, Rect::new(0.0, 0.0, 495.0, 800.0)));
        assert_eq!(result[1], (2, Rect::new(505.0, 0.0, 495.0, 395.0)));
        assert_eq!(result[2], (3, Rect::new(505.0, 405.0, 495.0, 395.0)));
        assert_eq!(result[1].1.height + result[2].1.height + 10.0, 800.0);
    }

    #[test]
    fn last_stack_window_reaches_bottom_edge() {
        let engine = bare(LayoutMode::MasterStack);
        let area = Rect::new(0.0, 0.0, 1000.0, 803.0);
        let result = engine.compute(&[1, 2, 3, 4], area);
        let last = result[3].1;
        assert_eq!(last.bottom(), 803.0);
        assert!(last.height >= result[1].1.height);
    }

    #[test]
    fn monocle_gives_everyone_the_usable_area() {
        let engine = bare(LayoutMode::Monocle);
        let result = engine.compute(&[1, 2, 3], display());
        assert!(result.iter().all(|(_, r)| *r == display()));
    }

    #[test]
    fn grid_is_row_major() {
        let engine = bare(LayoutMode::Grid);
        let result = engine.compute(&[1, 2, 3, 4, 5], display());
        // 5 windows: 3 columns, 2 rows.
        let cell_w = ((1000.0_f64 - 20.0) / 3.0).floor();
        let cell_h = ((800.0_f64 - 10.0) / 2.0).floor();
        assert_eq!(result[0].1, Rect::new(0.0, 0.0, cell_w, cell_h));
        assert_eq!(result[2].1.x, 2.0 * (cell_w + 10.0));
        assert_eq!(result[3].1, Rect::new(0.0, cell_h + 10.0, cell_w, cell_h));
        assert!(result.iter().all(|(_, r)| r.width == cell_w && r.height == cell_h));
    }

    #[test]
    fn padding_and_top_bar_shrink_usable_area() {
        let mut engine = bare(LayoutMode::Monocle);
        engine.outer_padding = 20;
        engine.bar_height = 42;
        let area = engine.usable_area(display());
        assert_eq!(area, Rect::new(20.0, 62.0, 960.0, 718.0));

        engine.bar_position = BarPosition::Bottom;
        let area = engine.usable_area(display());
        assert_eq!(area, Rect::new(20.0, 20.0, 960.0, 718.0));
    }

    #[test]
    fn border_insets_every_rect() {
        let mut engine = bare(LayoutMode::Monocle);
        engine.border_width = 2;
        let result = engine.compute(&[1], display());
        assert_eq!(result[0].1, Rect::new(2.0, 2.0, 996.0, 796.0));
    }

    #[test]
    fn passthrough_uses_the_whole_display() {
        let mut engine = bare(LayoutMode::MasterStack);
        engine.outer_padding = 20;
        engine.bar_height = 42;
        engine.border_width = 3;
        engine.passthrough = true;
        let result = engine.compute(&[1, 2], display());
        assert!(result.iter().all(|(_, r)| *r == display()));
        assert_eq!(engine.mode_name(), "passthrough");
    }

    #[test]
    fn degenerate_display_clamps_to_one_pixel() {
        let mut engine = bare(LayoutMode::Grid);
        engine.outer_padding = 50;
        engine.border_width = 5;
        let tiny = Rect::new(0.0, 0.0, 40.0, 40.0);
        let result = engine.compute(&[1, 2, 3, 4], tiny);
        assert!(result.iter().all(|(_, r)| r.width >= 1.0 && r.height >= 1.0));
    }

    #[test]
    fn compute_is_deterministic() {
        let engine = LayoutEngine::default();
        let windows = [4, 8, 15, 16, 23, 42];
        let screen = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        assert_eq!(
            engine.compute(&windows, screen),
            engine.compute(&windows, screen)
        );
    }

    #[test]
    fn master_split_is_clamped() {
        let mut engine = LayoutEngine::default();
        assert!(engine.adjust_master_split(0.3));
        assert!((engine.master_split - 0.8).abs() < 1e-9);
        assert!(engine.adjust_master_split(0.3));
        assert_eq!(engine.master_split, MAX_MASTER_SPLIT);
        assert!(!engine.adjust_master_split(0.05));
        assert!(engine.adjust_master_split(-2.0));
        assert_eq!(engine.master_split, MIN_MASTER_SPLIT);
        assert!(!engine.adjust_master_split(f64::NAN));
    }

    #[test]
    fn master_split_round_trip() {
        let mut engine = LayoutEngine::default();
        let before = engine.master_split;
        engine.adjust_master_split(0.05);
        engine.adjust_master_split(-0.05);
        assert!((engine.master_split - before).abs() < 1e-9);
    }

    #[test]
    fn from_config_reads_bar_reservation() {
        let mut config = HackerlandConfig::default();
        config.bar.enabled = false;
        let engine = LayoutEngine::from_config(&config);
        assert_eq!(engine.bar_height, 0);
        assert_eq!(engine.gap, 10);
        assert_eq!(engine.mode_name(), "master-stack");
    }

    #[test]
    fn apply_config_keeps_runtime_state() {
        let mut engine = LayoutEngine::default();
        engine.mode = LayoutMode::Grid;
        engine.adjust_master_split(0.2);
        engine.passthrough = true;

        let mut config = HackerlandConfig::default();
        config.layout.gap = 4;
        engine.apply_config(&config);

        assert_eq!(engine.gap, 4);
        assert_eq!(engine.mode, LayoutMode::Grid);
        assert!((engine.master_split - 0.7).abs() < 1e-9);
        assert!(engine.passthrough);
    }
}
