//! Icon geometry configuration.

/// Geometry of the generated icon: canvas size, artwork inset, and the
/// parameters of the squircle mask.
///
/// Apple's macOS icon grid places artwork within roughly 80% of the
/// 1024x1024 canvas; the standard inset is 100px on each side, leaving an
/// 824x824 art area. The default configuration reproduces that grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconConfig {
    /// Full width and height of the padded icon canvas, in pixels.
    pub canvas_size: u32,
    /// Transparent padding on each side of the art area, in pixels.
    pub inset: u32,
    /// Corner radius of the squircle as a fraction of the art size.
    /// At an 824px art size the default ratio yields a radius of ~185px.
    pub corner_radius_ratio: f32,
    /// The superellipse exponent; 5 closely approximates the continuous
    /// curvature of Apple's icon shape.
    pub exponent: f32,
    /// Supersampling factor used when rasterizing the mask.
    pub supersample: u32,
}

impl Default for IconConfig {
    fn default() -> IconConfig {
        IconConfig {
            canvas_size: 1024,
            inset: 100,
            corner_radius_ratio: 0.225,
            exponent: 5.0,
            supersample: 4,
        }
    }
}

impl IconConfig {
    /// Returns the width and height of the art area, in pixels.
    ///
    /// # Examples
    /// ```
    /// use squircle::IconConfig;
    /// assert_eq!(IconConfig::default().art_size(), 824);
    /// ```
    pub fn art_size(&self) -> u32 {
        self.canvas_size - 2 * self.inset
    }

    /// Returns the corner radius of the squircle at the art size, in
    /// pixels.
    pub fn corner_radius(&self) -> f32 {
        self.art_size() as f32 * self.corner_radius_ratio
    }
}
