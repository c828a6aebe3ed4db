use std::fmt;

/// A ranking criterion: one of the three raw site metrics or the derived
/// mean distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Criterion {
    /// Usable ground area at the site.
    Area,
    /// Vehicle count observed at the site.
    Vehicles,
    /// Pedestrian footfall at the site.
    Footfall,
    /// Mean great-circle distance to every other candidate.
    Distance,
}

impl Criterion {
    /// All criteria in scoring order.
    pub const ALL: [Self; 4] = [Self::Area, Self::Vehicles, Self::Footfall, Self::Distance];

    /// Lower-case identifier used in logs and error messages.
    ///
    /// # Examples
    /// ```
    /// use chargeplan_core::Criterion;
    ///
    /// assert_eq!(Criterion::Footfall.as_str(), "footfall");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Vehicles => "vehicles",
            Self::Footfall => "footfall",
            Self::Distance => "distance",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
