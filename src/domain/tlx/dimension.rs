//! The six NASA-TLX workload dimensions and the fixed pairwise comparison set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six NASA-TLX subscales.
///
/// Ordering follows the classic questionnaire layout and is used for
/// display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "Mental Demand")]
    MentalDemand,
    #[serde(rename = "Physical Demand")]
    PhysicalDemand,
    #[serde(rename = "Temporal Demand")]
    TemporalDemand,
    #[serde(rename = "Performance")]
    Performance,
    #[serde(rename = "Effort")]
    Effort,
    #[serde(rename = "Frustration")]
    Frustration,
}

/// Number of TLX dimensions.
pub const DIMENSION_COUNT: usize = 6;

/// Number of unordered dimension pairs, C(6,2).
pub const PAIR_COUNT: usize = 15;

/// Number of pairs each dimension takes part in.
pub const PAIRS_PER_DIMENSION: u32 = 5;

impl Dimension {
    /// All dimensions in display order.
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::MentalDemand,
        Dimension::PhysicalDemand,
        Dimension::TemporalDemand,
        Dimension::Performance,
        Dimension::Effort,
        Dimension::Frustration,
    ];

    /// Returns the stable identifier used in stored records.
    pub fn id(&self) -> &'static str {
        self.info().id
    }

    /// Returns the questionnaire text for this dimension.
    pub fn info(&self) -> &'static DimensionInfo {
        &DIMENSIONS_INFO[self.index()]
    }

    /// Position of this dimension in [`Dimension::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Dimension::MentalDemand => 0,
            Dimension::PhysicalDemand => 1,
            Dimension::TemporalDemand => 2,
            Dimension::Performance => 3,
            Dimension::Effort => 4,
            Dimension::Frustration => 5,
        }
    }

    /// Looks a dimension up by its stored identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.id() == id)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Display text for a dimension as presented to evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionInfo {
    pub dimension: Dimension,
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub low_anchor: &'static str,
    pub high_anchor: &'static str,
}

/// Questionnaire definitions, indexed by [`Dimension::index`].
pub const DIMENSIONS_INFO: [DimensionInfo; DIMENSION_COUNT] = [
    DimensionInfo {
        dimension: Dimension::MentalDemand,
        id: "Mental Demand",
        title: "Mental Demand",
        description: "How much mental and perceptual activity was required? \
                      Was the task easy or demanding, simple or complex?",
        low_anchor: "Very Low",
        high_anchor: "Very High",
    },
    DimensionInfo {
        dimension: Dimension::PhysicalDemand,
        id: "Physical Demand",
        title: "Physical Demand",
        description: "How much physical activity was required? \
                      Was the task easy or demanding, slow or brisk?",
        low_anchor: "Very Low",
        high_anchor: "Very High",
    },
    DimensionInfo {
        dimension: Dimension::TemporalDemand,
        id: "Temporal Demand",
        title: "Temporal Demand",
        description: "How much time pressure did you feel due to the rate or pace \
                      at which the tasks or task elements occurred?",
        low_anchor: "Very Low",
        high_anchor: "Very High",
    },
    DimensionInfo {
        dimension: Dimension::Performance,
        id: "Performance",
        title: "Performance",
        description: "How successful do you think you were in accomplishing the goals \
                      of the task or mission? How satisfied were you with your performance?",
        low_anchor: "Good",
        high_anchor: "Poor",
    },
    DimensionInfo {
        dimension: Dimension::Effort,
        id: "Effort",
        title: "Effort",
        description: "How hard did you have to work (mentally and physically) \
                      to accomplish your level of performance?",
        low_anchor: "Very Low",
        high_anchor: "Very High",
    },
    DimensionInfo {
        dimension: Dimension::Frustration,
        id: "Frustration",
        title: "Frustration",
        description: "How insecure, discouraged, irritated, stressed and annoyed versus \
                      secure, gratified, content, relaxed and complacent did you feel \
                      during the task?",
        low_anchor: "Very Low",
        high_anchor: "Very High",
    },
];

/// The fifteen forced-choice pairs of the weighting procedure, in presentation order.
pub const PAIRWISE_COMBINATIONS: [(Dimension, Dimension); PAIR_COUNT] = [
    (Dimension::MentalDemand, Dimension::PhysicalDemand),
    (Dimension::MentalDemand, Dimension::TemporalDemand),
    (Dimension::MentalDemand, Dimension::Performance),
    (Dimension::MentalDemand, Dimension::Effort),
    (Dimension::MentalDemand, Dimension::Frustration),
    (Dimension::PhysicalDemand, Dimension::TemporalDemand),
    (Dimension::PhysicalDemand, Dimension::Performance),
    (Dimension::PhysicalDemand, Dimension::Effort),
    (Dimension::PhysicalDemand, Dimension::Frustration),
    (Dimension::TemporalDemand, Dimension::Performance),
    (Dimension::TemporalDemand, Dimension::Effort),
    (Dimension::TemporalDemand, Dimension::Frustration),
    (Dimension::Performance, Dimension::Effort),
    (Dimension::Performance, Dimension::Frustration),
    (Dimension::Effort, Dimension::Frustration),
];
