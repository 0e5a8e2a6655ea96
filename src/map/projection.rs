use std::f64::consts::PI;

/// Longitude/latitude of the default view center, over the Kalahari.
pub const MAP_CENTER: (f64, f64) = (24.0, -22.0);
/// Degrees of longitude spanned by the canvas width at zoom 1.
const REGION_LON_SPAN: f64 = 70.0;

pub const MIN_ZOOM: f64 = 0.8;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 1.2;

/// Viewport representing the visible map area and zoom level
#[derive(Clone)]
pub struct Viewport {
    /// Center longitude (-180 to 180)
    pub center_lon: f64,
    /// Center latitude (-85 to 85)
    pub center_lat: f64,
    /// Zoom level (higher = more zoomed in)
    pub zoom: f64,
    /// Canvas pixel width
    pub width: usize,
    /// Canvas pixel height
    pub height: usize,
}

impl Viewport {
    /// Create the default view framing Southern Africa.
    pub fn southern_africa(width: usize, height: usize) -> Self {
        Self {
            center_lon: MAP_CENTER.0,
            center_lat: MAP_CENTER.1,
            zoom: 1.0,
            width,
            height,
        }
    }

    /// Pixels per normalized Web Mercator unit. Tying scale to the canvas
    /// width keeps the visible longitude span stable across resizes.
    fn scale(&self) -> f64 {
        self.zoom * self.width as f64 * (360.0 / REGION_LON_SPAN)
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Shift the view center by a pixel delta in projected space.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let scale = self.scale();
        let x = normalized_x(self.center_lon) + dx / scale;
        let y = mercator_y(self.center_lat) + dy / scale;

        self.center_lon = x * 360.0 - 180.0;
        self.center_lat = mercator_lat(y);

        // Wrap longitude
        if self.center_lon > 180.0 {
            self.center_lon -= 360.0;
        } else if self.center_lon < -180.0 {
            self.center_lon += 360.0;
        }

        // Clamp latitude to the Mercator-safe band
        self.center_lat = self.center_lat.clamp(-85.0, 85.0);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Zoom in towards a specific pixel location
    pub fn zoom_in_at(&mut self, px: f64, py: f64) {
        self.zoom_at(px, py, ZOOM_STEP);
    }

    /// Zoom out from a specific pixel location
    pub fn zoom_out_at(&mut self, px: f64, py: f64) {
        self.zoom_at(px, py, 1.0 / ZOOM_STEP);
    }

    /// Zoom by factor towards a specific pixel location
    fn zoom_at(&mut self, px: f64, py: f64, factor: f64) {
        // Geographic point under the cursor before the zoom
        let (lon, lat) = self.unproject(px, py);

        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);

        // Pan so the same point lands back under the cursor
        let (new_px, new_py) = self.project(lon, lat);
        self.pan(new_px - px, new_py - py);
    }

    /// Restore the default framing, keeping the canvas size.
    pub fn reset(&mut self) {
        *self = Self::southern_africa(self.width, self.height);
    }

    /// Project a geographic coordinate (lon, lat) to pixel coordinates
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let scale = self.scale();
        let px = (normalized_x(lon) - normalized_x(self.center_lon)) * scale
            + self.width as f64 / 2.0;
        let py = (mercator_y(lat) - mercator_y(self.center_lat)) * scale
            + self.height as f64 / 2.0;
        (px, py)
    }

    /// Unproject pixel coordinates back to geographic coordinates (lon, lat)
    pub fn unproject(&self, px: f64, py: f64) -> (f64, f64) {
        let scale = self.scale();
        let x = (px - self.width as f64 / 2.0) / scale + normalized_x(self.center_lon);
        let y = (py - self.height as f64 / 2.0) / scale + mercator_y(self.center_lat);
        (x * 360.0 - 180.0, mercator_lat(y))
    }
}

/// Longitude to normalized [0, 1] across the world.
fn normalized_x(lon: f64) -> f64 {
    (lon + 180.0) / 360.0
}

/// Web Mercator: latitude to normalized y, 0 at the north clamp.
fn mercator_y(lat: f64) -> f64 {
    let lat_rad = lat.to_radians();
    (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0
}

/// Inverse of `mercator_y`.
fn mercator_lat(y: f64) -> f64 {
    (PI * (1.0 - 2.0 * y)).sinh().atan().to_degrees()
}
