use crate::{
    label::{normalize, LabelError},
    parameter::ParameterKind,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedingType {
    Earthworms,
    Pellets,
    Shrimp,
    SpecialtyMix,
}

impl FeedingType {
    pub const ALL: [FeedingType; 4] = [
        FeedingType::Earthworms,
        FeedingType::Pellets,
        FeedingType::Shrimp,
        FeedingType::SpecialtyMix,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeedingType::Earthworms => "earthworms",
            FeedingType::Pellets => "pellets",
            FeedingType::Shrimp => "shrimp",
            FeedingType::SpecialtyMix => "specialty-mix",
        }
    }
}

impl fmt::Display for FeedingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FeedingType {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        FeedingType::ALL
            .into_iter()
            .find(|f| f.label() == wanted)
            .ok_or_else(|| LabelError::UnknownFeeding(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthTag {
    Active,
    GoodAppetite,
    Hiding,
    LossOfAppetite,
    GillDiscoloration,
    SkinProblems,
}

impl HealthTag {
    pub const ALL: [HealthTag; 6] = [
        HealthTag::Active,
        HealthTag::GoodAppetite,
        HealthTag::Hiding,
        HealthTag::LossOfAppetite,
        HealthTag::GillDiscoloration,
        HealthTag::SkinProblems,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HealthTag::Active => "active",
            HealthTag::GoodAppetite => "good-appetite",
            HealthTag::Hiding => "hiding",
            HealthTag::LossOfAppetite => "loss-of-appetite",
            HealthTag::GillDiscoloration => "gill-discoloration",
            HealthTag::SkinProblems => "skin-problems",
        }
    }

    /// Tags that count as a sign of a thriving animal.
    pub fn is_positive(&self) -> bool {
        matches!(self, HealthTag::Active | HealthTag::GoodAppetite)
    }
}

impl fmt::Display for HealthTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HealthTag {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        HealthTag::ALL
            .into_iter()
            .find(|t| t.label() == wanted)
            .ok_or_else(|| LabelError::UnknownHealthTag(s.to_string()))
    }
}

/// The set of health tags picked for one entry, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthObservations(Vec<HealthTag>);

impl HealthObservations {
    /// Builds the set, dropping repeated tags but keeping first-seen order.
    pub fn new<I: IntoIterator<Item = HealthTag>>(tags: I) -> Self {
        let mut unique = Vec::new();
        for tag in tags {
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }
        Self(unique)
    }

    pub fn tags(&self) -> &[HealthTag] {
        &self.0
    }

    pub fn contains(&self, tag: HealthTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Single combined label, e.g. `active, good-appetite`.
    pub fn label(&self) -> String {
        self.0
            .iter()
            .map(HealthTag::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parses a comma-separated list of tags. Blank input yields an empty set.
    pub fn parse_list(input: &str) -> Result<Self, LabelError> {
        let tags = input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(HealthTag::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(tags))
    }
}

impl FromIterator<HealthTag> for HealthObservations {
    fn from_iter<T: IntoIterator<Item = HealthTag>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// One saved entry of the care log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub temperature: f64,
    pub ph: f64,
    pub ammonia: f64,
    pub nitrite: f64,
    pub feeding: FeedingType,
    pub health: HealthObservations,
}

impl Observation {
    pub fn value(&self, kind: ParameterKind) -> f64 {
        match kind {
            ParameterKind::Temperature => self.temperature,
            ParameterKind::Ph => self.ph,
            ParameterKind::Ammonia => self.ammonia,
            ParameterKind::Nitrite => self.nitrite,
        }
    }
}
