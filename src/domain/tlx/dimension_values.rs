//! Fixed-arity record holding one value per TLX dimension.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::Dimension;

/// One value for each of the six dimensions.
///
/// Serializes as a map keyed by the dimension identifier, e.g.
/// `{"Mental Demand": 75, "Physical Demand": 30, ...}`. All six keys are
/// required on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionValues<T> {
    #[serde(rename = "Mental Demand")]
    pub mental_demand: T,
    #[serde(rename = "Physical Demand")]
    pub physical_demand: T,
    #[serde(rename = "Temporal Demand")]
    pub temporal_demand: T,
    #[serde(rename = "Performance")]
    pub performance: T,
    #[serde(rename = "Effort")]
    pub effort: T,
    #[serde(rename = "Frustration")]
    pub frustration: T,
}

impl<T> DimensionValues<T> {
    /// Builds a record by evaluating `f` once per dimension, in display order.
    pub fn from_fn(mut f: impl FnMut(Dimension) -> T) -> Self {
        Self {
            mental_demand: f(Dimension::MentalDemand),
            physical_demand: f(Dimension::PhysicalDemand),
            temporal_demand: f(Dimension::TemporalDemand),
            performance: f(Dimension::Performance),
            effort: f(Dimension::Effort),
            frustration: f(Dimension::Frustration),
        }
    }

    /// Returns the value for a dimension.
    pub fn get(&self, dimension: Dimension) -> &T {
        match dimension {
            Dimension::MentalDemand => &self.mental_demand,
            Dimension::PhysicalDemand => &self.physical_demand,
            Dimension::TemporalDemand => &self.temporal_demand,
            Dimension::Performance => &self.performance,
            Dimension::Effort => &self.effort,
            Dimension::Frustration => &self.frustration,
        }
    }

    /// Returns a mutable reference to the value for a dimension.
    pub fn get_mut(&mut self, dimension: Dimension) -> &mut T {
        match dimension {
            Dimension::MentalDemand => &mut self.mental_demand,
            Dimension::PhysicalDemand => &mut self.physical_demand,
            Dimension::TemporalDemand => &mut self.temporal_demand,
            Dimension::Performance => &mut self.performance,
            Dimension::Effort => &mut self.effort,
            Dimension::Frustration => &mut self.frustration,
        }
    }

    /// Iterates `(dimension, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Applies `f` to every value, keeping the dimension association.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> DimensionValues<U> {
        DimensionValues::from_fn(|d| f(self.get(d)))
    }

    /// Combines two records dimension by dimension.
    pub fn zip_with<U, V>(
        &self,
        other: &DimensionValues<U>,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> DimensionValues<V> {
        DimensionValues::from_fn(|d| f(self.get(d), other.get(d)))
    }
}

impl<T: Clone> DimensionValues<T> {
    /// Creates a record with the same value for every dimension.
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T> Index<Dimension> for DimensionValues<T> {
    type Output = T;

    fn index(&self, dimension: Dimension) -> &T {
        self.get(dimension)
    }
}

impl<T> IndexMut<Dimension> for DimensionValues<T> {
    fn index_mut(&mut self, dimension: Dimension) -> &mut T {
        self.get_mut(dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_visits_dimensions_in_order() {
        let mut visited = Vec::new();
        let values = DimensionValues::from_fn(|d| {
            visited.push(d);
            d.index()
        });
        assert_eq!(visited, Dimension::ALL.to_vec());
        assert_eq!(values[Dimension::Effort], 4);
    }

    #[test]
    fn index_mut_updates_single_dimension() {
        let mut values = DimensionValues::splat(0u32);
        values[Dimension::Frustration] += 3;
        assert_eq!(values.frustration, 3);
        assert_eq!(values.mental_demand, 0);
    }

    #[test]
    fn zip_with_combines_per_dimension() {
        let a = DimensionValues::from_fn(|d| d.index() as u32);
        let b = DimensionValues::splat(10u32);
        let sum = a.zip_with(&b, |x, y| x + y);
        assert_eq!(sum[Dimension::MentalDemand], 10);
        assert_eq!(sum[Dimension::Frustration], 15);
    }

    #[test]
    fn serializes_with_dimension_keys() {
        let values = DimensionValues::splat(1u32);
        let json = serde_json::to_value(values).unwrap();
        assert_eq!(json["Mental Demand"], 1);
        assert_eq!(json["Frustration"], 1);
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[test]
    fn deserialization_requires_every_dimension() {
        let partial = r#"{"Mental Demand": 1, "Physical Demand": 2}"#;
        assert!(serde_json::from_str::<DimensionValues<u32>>(partial).is_err());
    }
}
