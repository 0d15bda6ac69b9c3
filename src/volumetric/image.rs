use crate::{Error, point::Point, volumetric::Domain};

/// A mapping from every point of a [`Domain`] to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image<V, const N: usize> {
    domain: Domain<N>,
    values: Vec<V>,
}

impl<V, const N: usize> Image<V, N>
where
    V: Clone,
{
    /// Returns an image over the given domain with all its points set to the given value.
    pub fn filled(domain: Domain<N>, value: V) -> Self {
        Self {
            values: vec![value; domain.len()],
            domain,
        }
    }
}

impl<V, const N: usize> Image<V, N>
where
    V: Clone + Default,
{
    /// Returns an image over the given domain with all its points set to the default value.
    pub fn new(domain: Domain<N>) -> Self {
        Self::filled(domain, V::default())
    }
}

impl<V, const N: usize> Image<V, N> {
    /// Returns an image over the given domain holding the given values in lexicographic order.
    pub fn from_values(domain: Domain<N>, values: Vec<V>) -> Result<Self, Error> {
        if values.len() != domain.len() {
            return Err(Error::SizeMismatch {
                domain: domain.len(),
                values: values.len(),
            });
        }

        Ok(Self::from_raw(domain, values))
    }

    /// Returns an image over the given domain holding the given values, whose amount must match
    /// the size of the domain.
    pub(crate) fn from_raw(domain: Domain<N>, values: Vec<V>) -> Self {
        debug_assert_eq!(values.len(), domain.len());
        Self { domain, values }
    }

    pub fn domain(&self) -> &Domain<N> {
        &self.domain
    }

    /// Returns the values of the image in lexicographic order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn into_values(self) -> Vec<V> {
        self.values
    }

    /// Returns the value at the given point, if the point lies in the domain.
    pub fn get(&self, point: &Point<i64, N>) -> Option<&V> {
        self.domain
            .index_of(point)
            .and_then(|index| self.values.get(index))
    }

    /// Sets the value at the given point.
    pub fn set(&mut self, point: &Point<i64, N>, value: V) -> Result<(), Error> {
        let slot = self
            .domain
            .index_of(point)
            .and_then(|index| self.values.get_mut(index))
            .ok_or_else(|| Error::OutOfDomain(point.to_string()))?;

        *slot = value;
        Ok(())
    }

    /// Returns an iterator over the points of the image and their values, in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (Point<i64, N>, &V)> + '_ {
        self.domain.iter().zip(&self.values)
    }
}
