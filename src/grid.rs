/// Animated grid-wave background for the Home screen.
///
/// The grid is a fixed 24x18 lattice recomputed from scratch every frame:
/// a traveling sine wave displaces each vertex vertically, and vertices
/// near the pointer are pulled toward it and brightened. Nothing here
/// accumulates except the time counter and the smoothed pointer, so a
/// dropped frame never leaves stale geometry behind.
pub const GRID_COLS: usize = 24;
pub const GRID_ROWS: usize = 18;

/// Fixed per-frame time step. Animation speed is tied to the frame tick
/// rather than wall-clock time.
const TIME_STEP: f64 = 0.01;

/// Low-pass factor applied to the pointer each frame.
const POINTER_SMOOTHING: f64 = 0.18;

/// Pointer pull radius and strength, in logical pixels.
const PULL_RADIUS: f64 = 250.0;
const PULL_STRENGTH: f64 = 0.15;

/// Radial light flare around the pointer.
pub const FLARE_RADIUS: f64 = 500.0;
pub const FLARE_INTENSITY: f64 = 0.15;

const ALPHA_FLOOR: f64 = 0.04;
const ALPHA_CEIL: f64 = 0.8;
const THICKNESS_FLOOR: f64 = 1.0;
const THICKNESS_CEIL: f64 = 2.5;

/// One vertex of the wireframe, valid for a single frame.
#[derive(Debug, Clone, Copy)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
    pub alpha: f64,
    pub thickness: f64,
}

/// A segment between two adjacent vertices. Alpha and width are the
/// arithmetic mean of the endpoints' values.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
    pub width: f64,
}

#[derive(Debug)]
pub struct GridWave {
    time: f64,
    pointer: (f64, f64),
    target: (f64, f64),
}

impl GridWave {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            pointer: (0.5, 0.5),
            target: (0.5, 0.5),
        }
    }

    /// Set the pointer target in normalized [0,1] viewport coordinates.
    /// The smoothed position catches up over the following frames.
    pub fn set_pointer_target(&mut self, nx: f64, ny: f64) {
        self.target = (nx.clamp(0.0, 1.0), ny.clamp(0.0, 1.0));
    }

    /// Advance one frame: step the time counter and ease the smoothed
    /// pointer toward its target.
    pub fn advance(&mut self) {
        self.time += TIME_STEP;
        self.pointer.0 += (self.target.0 - self.pointer.0) * POINTER_SMOOTHING;
        self.pointer.1 += (self.target.1 - self.pointer.1) * POINTER_SMOOTHING;
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Smoothed pointer position in normalized coordinates.
    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    /// Compute the deformed grid for the given viewport, in the same
    /// units as `width`/`height`. The grid is centered in the viewport
    /// with a cell size of max(width, height) / 20.
    pub fn points(&self, width: f64, height: f64) -> Vec<Vec<GridPoint>> {
        let size = width.max(height) / 20.0;
        let origin_x = width / 2.0 - (GRID_COLS as f64 * size) / 2.0;
        let origin_y = height / 2.0 - (GRID_ROWS as f64 * size) / 2.0;

        let mx = self.pointer.0 * width;
        let my = self.pointer.1 * height;

        let mut rows = Vec::with_capacity(GRID_ROWS);
        for r in 0..GRID_ROWS {
            let mut row = Vec::with_capacity(GRID_COLS);
            for c in 0..GRID_COLS {
                let x = origin_x + c as f64 * size;
                let y = origin_y + r as f64 * size;

                let dist = ((x - mx).powi(2) + (y - my).powi(2)).sqrt();

                let wave = ((c + r) as f64 * 0.3 + self.time).sin() * 8.0;
                let pull = (PULL_RADIUS - dist).max(0.0) * PULL_STRENGTH;

                let alpha = (ALPHA_CEIL - dist / 400.0).max(ALPHA_FLOOR);
                let thickness = (THICKNESS_CEIL - dist / 150.0).max(THICKNESS_FLOOR);

                row.push(GridPoint {
                    x: x + pull,
                    y: y + wave,
                    alpha,
                    thickness,
                });
            }
            rows.push(row);
        }
        rows
    }

    /// Join horizontally and vertically adjacent points into edges.
    pub fn edges(points: &[Vec<GridPoint>]) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (r, row) in points.iter().enumerate() {
            for (c, p) in row.iter().enumerate() {
                if c + 1 < row.len() {
                    edges.push(Self::edge(p, &row[c + 1]));
                }
                if r + 1 < points.len() {
                    edges.push(Self::edge(p, &points[r + 1][c]));
                }
            }
        }
        edges
    }

    fn edge(a: &GridPoint, b: &GridPoint) -> Edge {
        Edge {
            from: (a.x, a.y),
            to: (b.x, b.y),
            alpha: (a.alpha + b.alpha) / 2.0,
            width: (a.thickness + b.thickness) / 2.0,
        }
    }

    /// Intensity of the background flare at (x, y): FLARE_INTENSITY at the
    /// pointer, fading linearly to zero at FLARE_RADIUS.
    pub fn flare_alpha(&self, x: f64, y: f64, width: f64, height: f64) -> f64 {
        let mx = self.pointer.0 * width;
        let my = self.pointer.1 * height;
        let dist = ((x - mx).powi(2) + (y - my).powi(2)).sqrt();
        FLARE_INTENSITY * (1.0 - dist / FLARE_RADIUS).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_always_24_by_18() {
        let grid = GridWave::new();
        for (w, h) in [(1280.0, 768.0), (160.0, 96.0), (3840.0, 2160.0)] {
            let points = grid.points(w, h);
            assert_eq!(points.len(), GRID_ROWS);
            for row in &points {
                assert_eq!(row.len(), GRID_COLS);
            }
            assert_eq!(
                points.iter().map(|r| r.len()).sum::<usize>(),
                GRID_ROWS * GRID_COLS
            );
        }
    }

    #[test]
    fn alpha_and_thickness_stay_clamped() {
        let targets = [(0.0, 0.0), (1.0, 1.0), (0.5, 0.5), (0.83, 0.12)];
        let viewports = [(1280.0, 768.0), (160.0, 96.0), (2560.0, 1440.0)];

        for &(tx, ty) in &targets {
            let mut grid = GridWave::new();
            grid.set_pointer_target(tx, ty);
            for frame in 0..500 {
                grid.advance();
                if frame % 100 != 0 {
                    continue;
                }
                for &(w, h) in &viewports {
                    for row in grid.points(w, h) {
                        for p in row {
                            assert!((0.04..=0.8).contains(&p.alpha), "alpha {}", p.alpha);
                            assert!(
                                (1.0..=2.5).contains(&p.thickness),
                                "thickness {}",
                                p.thickness
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn edge_count_matches_lattice() {
        let grid = GridWave::new();
        let points = grid.points(1280.0, 768.0);
        let edges = GridWave::edges(&points);
        let horizontal = GRID_ROWS * (GRID_COLS - 1);
        let vertical = (GRID_ROWS - 1) * GRID_COLS;
        assert_eq!(edges.len(), horizontal + vertical);
    }

    #[test]
    fn edge_values_are_exact_endpoint_means() {
        let p = |alpha: f64, thickness: f64| GridPoint {
            x: 0.0,
            y: 0.0,
            alpha,
            thickness,
        };
        let points = vec![
            vec![p(0.1, 1.0), p(0.3, 2.0)],
            vec![p(0.5, 1.5), p(0.7, 2.5)],
        ];
        let edges = GridWave::edges(&points);
        // Order: (0,0)->(0,1), (0,0)->(1,0), (0,1)->(1,1), (1,0)->(1,1).
        assert_eq!(edges[0].alpha, 0.2);
        assert_eq!(edges[0].width, 1.5);
        assert_eq!(edges[1].alpha, 0.3);
        assert_eq!(edges[1].width, 1.25);
        assert_eq!(edges[2].alpha, 0.5);
        assert_eq!(edges[2].width, 2.25);
        assert_eq!(edges[3].alpha, 0.6);
        assert_eq!(edges[3].width, 2.0);
    }

    #[test]
    fn wave_offset_is_zero_at_time_zero() {
        // Pointer at the viewport center, time zero: cell (0,0) has no wave
        // displacement, only the pointer pull on x.
        let grid = GridWave::new();
        let (w, h): (f64, f64) = (1280.0, 768.0);
        let size = w.max(h) / 20.0;
        let origin_x = w / 2.0 - (GRID_COLS as f64 * size) / 2.0;
        let origin_y = h / 2.0 - (GRID_ROWS as f64 * size) / 2.0;

        let p = grid.points(w, h)[0][0];
        assert_eq!(p.y, origin_y);

        let dist = ((origin_x - w / 2.0).powi(2) + (origin_y - h / 2.0).powi(2)).sqrt();
        let expected_pull = (250.0 - dist).max(0.0) * 0.15;
        assert_eq!(p.x, origin_x + expected_pull);
    }

    #[test]
    fn pointer_eases_toward_target() {
        let mut grid = GridWave::new();
        grid.set_pointer_target(1.0, 0.0);
        let mut last = grid.pointer();
        for _ in 0..60 {
            grid.advance();
            let now = grid.pointer();
            assert!(now.0 >= last.0 && now.1 <= last.1);
            last = now;
        }
        assert!((grid.pointer().0 - 1.0).abs() < 0.01);
        assert!(grid.pointer().1.abs() < 0.01);
    }

    #[test]
    fn pointer_target_is_clamped_to_unit_square() {
        let mut grid = GridWave::new();
        grid.set_pointer_target(4.2, -1.0);
        for _ in 0..200 {
            grid.advance();
        }
        let (px, py) = grid.pointer();
        assert!((0.0..=1.0).contains(&px));
        assert!((0.0..=1.0).contains(&py));
    }

    #[test]
    fn flare_fades_to_zero_at_radius() {
        let grid = GridWave::new();
        let (w, h) = (1280.0, 768.0);
        assert_eq!(grid.flare_alpha(w / 2.0, h / 2.0, w, h), FLARE_INTENSITY);
        assert_eq!(grid.flare_alpha(w / 2.0 + 600.0, h / 2.0, w, h), 0.0);
        let mid = grid.flare_alpha(w / 2.0 + 250.0, h / 2.0, w, h);
        assert_eq!(mid, FLARE_INTENSITY * 0.5);
    }
}
