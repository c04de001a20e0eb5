use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use serde::Serialize;

/// The five dimensions of cycling suitability, in reporting order
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FactorKind {
    Temperature,
    Wind,
    Precipitation,
    Weather,
    Humidity,
}

impl FactorKind {
    pub const ALL: [FactorKind; 5] = [
        FactorKind::Temperature,
        FactorKind::Wind,
        FactorKind::Precipitation,
        FactorKind::Weather,
        FactorKind::Humidity,
    ];

    /// Returns the fixed weight of the factor, all weights sum to 1.0
    pub fn weight(&self) -> f64 {
        match self {
            FactorKind::Temperature   => 0.25,
            FactorKind::Wind          => 0.20,
            FactorKind::Precipitation => 0.25,
            FactorKind::Weather       => 0.20,
            FactorKind::Humidity      => 0.10,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FactorKind::Temperature   => "Temperature",
            FactorKind::Wind          => "Wind",
            FactorKind::Precipitation => "Precipitation",
            FactorKind::Weather       => "Weather",
            FactorKind::Humidity      => "Humidity",
        }
    }
}

/// Recommendation tiers from worst to best
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Dangerous,
    Poor,
    Moderate,
    Good,
    Excellent,
}

impl Recommendation {
    /// Explicit rank used for ordering, higher is better
    pub fn rank(&self) -> u8 {
        match self {
            Recommendation::Dangerous => 0,
            Recommendation::Poor      => 1,
            Recommendation::Moderate  => 2,
            Recommendation::Good      => 3,
            Recommendation::Excellent => 4,
        }
    }

    /// Returns the tier for a total score, evaluated from the top down
    ///
    /// # Arguments
    ///
    /// * 'score' - total bike riding score (0-100)
    pub fn from_score(score: u32) -> Recommendation {
        if score >= 85 {
            Recommendation::Excellent
        } else if score >= 70 {
            Recommendation::Good
        } else if score >= 50 {
            Recommendation::Moderate
        } else if score >= 30 {
            Recommendation::Poor
        } else {
            Recommendation::Dangerous
        }
    }
}

impl Ord for Recommendation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Recommendation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Recommendation::Dangerous => f.pad("DANGEROUS"),
            Recommendation::Poor      => f.pad("POOR"),
            Recommendation::Moderate  => f.pad("MODERATE"),
            Recommendation::Good      => f.pad("GOOD"),
            Recommendation::Excellent => f.pad("EXCELLENT"),
        }
    }
}

/// One weighted dimension of a bike riding score
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BikeRidingFactor {
    #[serde(rename = "name")]
    pub kind: FactorKind,
    pub score: u32,
    pub weight: f64,
    pub description: String,
    pub icon: &'static str,
}

impl BikeRidingFactor {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Contribution of this factor to the total score
    pub fn weighted(&self) -> f64 {
        self.score as f64 * self.weight
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BikeRidingScore {
    pub score: u32,
    pub recommendation: Recommendation,
    pub factors: Vec<BikeRidingFactor>,
    pub overall_rating: &'static str,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for BikeRidingScore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "{:>3} {:<9} {}", self.score, self.recommendation, self.overall_rating)?;
        for factor in &self.factors {
            writeln!(f, "    {} {:<13} {:>3} x {:.2}  {}",
                   factor.icon, factor.name(), factor.score, factor.weight, factor.description)?;
        }

        Ok(())
    }
}
