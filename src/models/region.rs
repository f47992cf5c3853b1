//! Region reference record

use std::fmt;

/// Administrative region with its population and area
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    pub capital: String,
    pub population: i64,
    /// Area in km2
    pub area: f64,
}

impl Region {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        capital: impl Into<String>,
        population: i64,
        area: f64,
    ) -> Self {
        Self {
            name: name.into(),
            capital: capital.into(),
            population,
            area,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nRegion: {}\nCapital: {}\nPopulation: {}\nArea: {:.3} km2\n",
            self.name, self.capital, self.population, self.area
        )
    }
}
