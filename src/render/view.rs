use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::{FloorplotError, FloorplotResult};
use crate::render::sink::{AspectMode, DrawRect};

/// Union of every finite rectangle in `draws`, normalized so `x0 <= x1` and `y0 <= y1`.
///
/// `None` when there is nothing finite to frame.
pub fn data_bounds(draws: &[DrawRect]) -> Option<Rect> {
    draws
        .iter()
        .map(|d| d.rect.abs())
        .filter(|r| r.is_finite())
        .reduce(|acc, r| acc.union(r))
}

/// Affine map from data units (y up) to canvas pixels (y down).
///
/// `px = tx + x * sx`, `py = ty - y * sy`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub sx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
    /// Padded data-space window that was fitted into the canvas.
    pub window: Rect,
}

impl ViewTransform {
    /// Fit `bounds` (padded by `margin` of its extent on each side) into `canvas`.
    ///
    /// Empty scenes frame the unit square; zero-extent axes are widened to one unit. Fails when
    /// the extent overflows `f64` and no finite mapping exists.
    pub fn fit(
        bounds: Option<Rect>,
        canvas: Canvas,
        margin: f64,
        aspect: AspectMode,
    ) -> FloorplotResult<Self> {
        let mut b = bounds.unwrap_or(Rect::new(0.0, 0.0, 1.0, 1.0));
        if b.width() <= 0.0 {
            b.x0 -= 0.5;
            b.x1 += 0.5;
        }
        if b.height() <= 0.0 {
            b.y0 -= 0.5;
            b.y1 += 0.5;
        }
        let margin = if margin.is_finite() { margin.max(0.0) } else { 0.0 };
        let dx = b.width() * margin;
        let dy = b.height() * margin;
        let window = Rect::new(b.x0 - dx, b.y0 - dy, b.x1 + dx, b.y1 + dy);

        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let (sx, sy, ox, oy) = match aspect {
            AspectMode::Auto => (w / window.width(), h / window.height(), 0.0, 0.0),
            AspectMode::Scaled => {
                let s = (w / window.width()).min(h / window.height());
                let ox = (w - window.width() * s) / 2.0;
                let oy = (h - window.height() * s) / 2.0;
                (s, s, ox, oy)
            }
        };

        let view = Self {
            sx,
            sy,
            tx: ox - window.x0 * sx,
            ty: h - oy + window.y0 * sy,
            window,
        };
        let finite = [view.sx, view.sy, view.tx, view.ty].iter().all(|v| v.is_finite());
        if !finite || view.sx <= 0.0 || view.sy <= 0.0 {
            return Err(FloorplotError::render(format!(
                "data bounds {b:?} are too large to map onto a {}x{} canvas",
                canvas.width, canvas.height
            )));
        }
        Ok(view)
    }

    pub fn map_point(&self, p: Point) -> Point {
        Point::new(self.tx + p.x * self.sx, self.ty - p.y * self.sy)
    }

    /// Pixel-space rectangle, normalized.
    pub fn map_rect(&self, r: Rect) -> Rect {
        Rect::from_points(self.map_point(r.origin()), self.map_point(Point::new(r.x1, r.y1)))
    }
}

/// Outline of `r` as four bands of `width` px centered on its edges (top, bottom, left, right).
///
/// Bands do not overlap, so translucent edge colors composite evenly. Returns fewer bands when
/// `r` is thinner than the outline.
pub(crate) fn edge_bands(r: Rect, width: f64) -> Vec<Rect> {
    let h = width / 2.0;
    if h <= 0.0 || !h.is_finite() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(4);
    out.push(Rect::new(r.x0 - h, r.y0 - h, r.x1 + h, r.y0 + h));
    if r.y1 - h > r.y0 + h {
        out.push(Rect::new(r.x0 - h, r.y1 - h, r.x1 + h, r.y1 + h));
        if r.x1 - h > r.x0 + h {
            out.push(Rect::new(r.x0 - h, r.y0 + h, r.x0 + h, r.y1 - h));
            out.push(Rect::new(r.x1 - h, r.y0 + h, r.x1 + h, r.y1 - h));
        } else {
            out.push(Rect::new(r.x0 - h, r.y0 + h, r.x1 + h, r.y1 - h));
        }
    } else if r.y1 > r.y0 {
        out.push(Rect::new(r.x0 - h, r.y0 + h, r.x1 + h, r.y1 + h));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/view.rs"]
mod tests;
