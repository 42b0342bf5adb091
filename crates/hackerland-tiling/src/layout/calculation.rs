//! Layout calculation: ordered window list to target rects.

use hackerland_common::Rect;
use hackerland_config::schema::{BarPosition, LayoutMode};

use super::LayoutEngine;

/// No dimension handed to the host is smaller than this.
const MIN_DIMENSION: f64 = 1.0;

impl LayoutEngine {
    /// Compute target rects for `windows` in order. Pure: the same inputs
    /// always give the same output, and an empty list gives an empty result.
    pub fn compute<T: Copy>(&self, windows: &[T], display: Rect) -> Vec<(T, Rect)> {
        if windows.is_empty() {
            return Vec::new();
        }

        if self.passthrough {
            return windows
                .iter()
                .map(|w| (*w, clamp_size(display)))
                .collect();
        }

        let area = self.usable_area(display);
        let rects = match self.mode {
            LayoutMode::MasterStack => self.master_stack(windows.len(), area),
            LayoutMode::Monocle => vec![area; windows.len()],
            LayoutMode::Grid => self.grid(windows.len(), area),
        };

        let border = self.border_width as f64;
        windows
            .iter()
            .zip(rects)
            .map(|(w, rect)| {
                let rect = if border > 0.0 {
                    rect.inset(border, MIN_DIMENSION)
                } else {
                    rect
                };
                (*w, clamp_size(rect))
            })
            .collect()
    }

    /// Display minus outer padding and the bar reservation.
    pub fn usable_area(&self, display: Rect) -> Rect {
        let pad = self.outer_padding as f64;
        let bar = self.bar_height as f64;
        let top_bar = if self.bar_position == BarPosition::Top {
            bar
        } else {
            0.0
        };
        Rect {
            x: display.x + pad,
            y: display.y + pad + top_bar,
            width: (display.width - 2.0 * pad).max(MIN_DIMENSION),
            height: (display.height - 2.0 * pad - bar).max(MIN_DIMENSION),
        }
    }

    fn master_stack(&self, n: usize, area: Rect) -> Vec<Rect> {
        if n == 1 {
            return vec![area];
        }

        let gap = self.gap as f64;
        let master_w = (area.width * self.master_split - gap / 2.0).floor();
        let stack_x = area.x + master_w + gap;
        let stack_w = area.width - master_w - gap;

        let k = n - 1;
        let stack_h = ((area.height - gap * (k as f64 - 1.0)) / k as f64).floor();

        let mut rects = Vec::with_capacity(n);
        rects.push(Rect::new(area.x, area.y, master_w, area.height));
        for i in 0..k {
            let y = area.y + i as f64 * (stack_h + gap);
            // The last stack window absorbs the rounding remainder.
            let height = if i == k - 1 {
                area.bottom() - y
            } else {
                stack_h
            };
            rects.push(Rect::new(stack_x, y, stack_w, height));
        }
        rects
    }

    fn grid(&self, n: usize, area: Rect) -> Vec<Rect> {
        let gap = self.gap as f64;
        let cols = (n as f64).sqrt().ceil() as usize;
        let rows = n.div_ceil(cols);
        let cell_w = ((area.width - gap * (cols as f64 - 1.0)) / cols as f64).floor();
        let cell_h = ((area.height - gap * (rows as f64 - 1.0)) / rows as f64).floor();

        (0..n)
            .map(|i| {
                let col = (i % cols) as f64;
                let row = (i / cols) as f64;
                Rect::new(
                    area.x + col * (cell_w + gap),
                    area.y + row * (cell_h + gap),
                    cell_w,
                    cell_h,
                )
            })
            .collect()
    }
}

fn clamp_size(rect: Rect) -> Rect {
    Rect {
        width: rect.width.max(MIN_DIMENSION),
        height: rect.height.max(MIN_DIMENSION),
        ..rect
    }
}
