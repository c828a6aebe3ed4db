use geo::Coord;

/// Sphere radius used by [`haversine_km`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance between two WGS84 positions, in kilometres.
///
/// Implementations must be symmetric, non-negative, and return `0.0` for
/// identical positions. They must be `Send + Sync` so matrices can be built
/// across threads.
pub trait SiteDistance: Send + Sync {
    /// Return the distance from `from` to `to` in kilometres.
    fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64;
}

/// Great-circle distance on a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaversineDistance {
    radius_km: f64,
}

impl HaversineDistance {
    /// Use a custom sphere radius.
    pub const fn with_radius(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Sphere radius in kilometres.
    pub const fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

impl Default for HaversineDistance {
    fn default() -> Self {
        Self::with_radius(EARTH_RADIUS_KM)
    }
}

impl SiteDistance for HaversineDistance {
    fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        haversine_with_radius(from, to, self.radius_km)
    }
}

/// Great-circle distance in kilometres on a sphere of radius
/// [`EARTH_RADIUS_KM`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use chargeplan_core::haversine_km;
///
/// let one_degree = haversine_km(Coord { x: 0.0, y: 0.0 }, Coord { x: 0.0, y: 1.0 });
/// assert!((one_degree - 111.195).abs() < 0.001);
/// ```
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    haversine_with_radius(from, to, EARTH_RADIUS_KM)
}

fn haversine_with_radius(from: Coord<f64>, to: Coord<f64>, radius_km: f64) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let dlat = (to.y - from.y).to_radians();
    let dlon = (to.x - from.x).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` fractionally past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    radius_km * c
}
