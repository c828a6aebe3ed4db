use geo::Coord;
use thiserror::Error;

use crate::CandidateSite;

/// Errors returned by [`SiteDataset::new`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatasetError {
    /// No candidate sites were supplied.
    #[error("dataset must contain at least one candidate site")]
    EmptyDataset,
}

/// An ordered, non-empty collection of candidate sites.
///
/// Input order is significant: it breaks ties when ranking.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use chargeplan_core::{CandidateSite, SiteDataset, SiteMetrics};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let site = CandidateSite::new("A", Coord { x: 0.0, y: 0.0 }, SiteMetrics::default())?;
/// let dataset = SiteDataset::new(vec![site])?;
/// assert_eq!(dataset.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SiteDataset {
    sites: Vec<CandidateSite>,
}

impl SiteDataset {
    /// Wrap a list of validated sites.
    pub fn new(sites: Vec<CandidateSite>) -> Result<Self, DatasetError> {
        if sites.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }
        Ok(Self { sites })
    }

    /// Sites in input order.
    pub fn sites(&self) -> &[CandidateSite] {
        &self.sites
    }

    /// Number of candidate sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Iterate over the sites in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, CandidateSite> {
        self.sites.iter()
    }

    /// Positions of every site, in input order.
    pub fn positions(&self) -> Vec<Coord<f64>> {
        self.sites.iter().map(|site| site.position).collect()
    }

    /// Consume the dataset and return the underlying sites.
    pub fn into_inner(self) -> Vec<CandidateSite> {
        self.sites
    }
}

impl<'a> IntoIterator for &'a SiteDataset {
    type Item = &'a CandidateSite;
    type IntoIter = std::slice::Iter<'a, CandidateSite>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SiteMetrics;
    use rstest::rstest;

    #[rstest]
    fn rejects_empty_input() {
        assert_eq!(
            SiteDataset::new(Vec::new()),
            Err(DatasetError::EmptyDataset)
        );
    }

    #[rstest]
    fn preserves_input_order() {
        let sites = ["north", "south", "east"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                CandidateSite::new(
                    name,
                    Coord {
                        x: f64::from(u8::try_from(i).expect("small index")),
                        y: 0.0,
                    },
                    SiteMetrics::default(),
                )
                .expect("valid site")
            })
            .collect::<Vec<_>>();
        let dataset = SiteDataset::new(sites).expect("non-empty dataset");

        let names: Vec<_> = dataset.iter().map(|s| s.location.as_str()).collect();
        assert_eq!(names, ["north", "south", "east"]);
        assert_eq!(dataset.positions()[2], Coord { x: 2.0, y: 0.0 });
    }
}
