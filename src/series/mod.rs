//! Series module - one-dimensional column of homogeneous data

use std::fmt::Debug;

use crate::core::error::{Error, Result};

/// Series struct: 1-dimensional data structure
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T>
where
    T: Debug + Clone,
{
    /// The values in the Series
    values: Vec<T>,
    /// The name of the Series
    name: Option<String>,
}

impl<T> Series<T>
where
    T: Debug + Clone,
{
    /// Create a new Series
    pub fn new(values: Vec<T>, name: Option<String>) -> Result<Self> {
        Ok(Self { values, name })
    }

    /// Get the length of the Series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the Series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get an element at a specific index
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Get a reference to the values in the Series
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Convert Series to Vec
    pub fn to_vec(&self) -> Vec<T> {
        self.values.clone()
    }

    /// Get the name of the Series
    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    /// Create a new Series keeping only the values at the given positions
    pub fn take(&self, indices: &[usize]) -> Result<Self> {
        let mut taken = Vec::with_capacity(indices.len());
        for &idx in indices {
            let value = self.values.get(idx).ok_or(Error::IndexOutOfBounds {
                index: idx,
                size: self.values.len(),
            })?;
            taken.push(value.clone());
        }
        Ok(Self {
            values: taken,
            name: self.name.clone(),
        })
    }
}

impl Series<String> {
    /// Parse every element as f64
    ///
    /// Unlike a lossy conversion, a single non-numeric element fails the
    /// whole Series so summaries never silently drop records.
    pub fn to_f64(&self) -> Result<Vec<f64>> {
        let mut result = Vec::with_capacity(self.len());
        for value in &self.values {
            let parsed = value.parse::<f64>().map_err(|_| {
                Error::Cast(format!("Cannot parse '{}' as a number", value))
            })?;
            result.push(parsed);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_basics() {
        let series = Series::new(vec![1, 2, 3], Some("data".to_string())).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.get(1), Some(&2));
        assert_eq!(series.name(), Some(&"data".to_string()));
        assert!(!series.is_empty());
    }

    #[test]
    fn test_series_take() {
        let series =
            Series::new(vec![10, 20, 30, 40], Some("values".to_string())).unwrap();
        let taken = series.take(&[3, 1]).unwrap();
        assert_eq!(taken.values(), &[40, 20]);
        assert_eq!(taken.name(), Some(&"values".to_string()));

        assert!(series.take(&[4]).is_err());
    }

    #[test]
    fn test_string_series_to_f64() {
        let series = Series::new(
            vec!["1.5".to_string(), "2".to_string()],
            Some("size".to_string()),
        )
        .unwrap();
        assert_eq!(series.to_f64().unwrap(), vec![1.5, 2.0]);

        let bad = Series::new(vec!["abc".to_string()], None).unwrap();
        assert!(bad.to_f64().is_err());
    }
}
