use std::{convert::TryFrom, slice};

use crate::Error;

/// An ordered sequence of 64-bit signed integers whose length always fits the `u32` length field
/// of an array file.
///
/// The elements are owned by the array and released when it is dropped.
#[derive(Clone, Debug, Default)]
pub struct IntegerArray {
    elements: Vec<i64>,
}

impl IntegerArray {
    /// Constructs an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs the array `[1, 2, ..., length]`.
    pub fn ascending(length: u32) -> Self {
        Self {
            elements: (1..=i64::from(length)).collect(),
        }
    }

    /// Wraps a buffer that is already known to hold at most `u32::MAX` elements.
    pub(crate) fn from_vec_unchecked(elements: Vec<i64>) -> Self {
        debug_assert!(u32::try_from(elements.len()).is_ok());
        Self { elements }
    }

    /// Returns the number of elements in the array.
    pub fn len(&self) -> u32 {
        debug_assert!(u32::try_from(self.elements.len()).is_ok());
        self.elements.len() as u32
    }

    /// Returns true if the array does not contain a single element.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, or `None` if it is out of bounds.
    pub fn get(&self, index: u32) -> Option<i64> {
        self.elements.get(index as usize).copied()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.elements
    }

    pub fn iter(&self) -> slice::Iter<'_, i64> {
        self.elements.iter()
    }

    /// Consumes the array, returning the underlying buffer.
    pub fn into_vec(self) -> Vec<i64> {
        self.elements
    }

    /// Compares two arrays element by element.
    ///
    /// Arrays of different lengths are never equal. Otherwise the elements are compared in index
    /// order and the comparison stops at the first mismatch.
    pub fn equals(&self, other: &IntegerArray) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

/// Returns whether `a` and `b` hold the same elements in the same order.
pub fn equals(a: &IntegerArray, b: &IntegerArray) -> bool {
    a.equals(b)
}

impl PartialEq for IntegerArray {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for IntegerArray {}

impl TryFrom<Vec<i64>> for IntegerArray {
    type Error = Error;

    fn try_from(elements: Vec<i64>) -> Result<Self, Self::Error> {
        if u32::try_from(elements.len()).is_err() {
            return Err(Error::LengthOverflow {
                len: elements.len(),
            });
        }
        Ok(Self { elements })
    }
}

impl<'a> IntoIterator for &'a IntegerArray {
    type Item = &'a i64;
    type IntoIter = slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{equals, IntegerArray};
    use std::convert::TryFrom;

    fn array(elements: &[i64]) -> IntegerArray {
        IntegerArray::try_from(elements.to_vec()).unwrap()
    }

    #[test]
    fn ascending() {
        let a = IntegerArray::ascending(9);
        assert_eq!(a.len(), 9);
        assert_eq!(a.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(IntegerArray::ascending(0).is_empty());
    }

    #[test]
    fn length_matches_elements() {
        let a = array(&[-4, 0, i64::MAX, i64::MIN]);
        assert_eq!(a.len() as usize, a.as_slice().len());
        assert_eq!(a.get(2), Some(i64::MAX));
        assert_eq!(a.get(4), None);
        assert_eq!(a.into_vec(), vec![-4, 0, i64::MAX, i64::MIN]);
    }

    #[test]
    fn len_tracks_every_constructor() {
        assert_eq!(IntegerArray::new().len(), 0);
        assert_eq!(IntegerArray::ascending(1000).len(), 1000);
        assert_eq!(array(&[7; 33]).len(), 33);
        assert_eq!(IntegerArray::from_vec_unchecked(vec![0; 5]).len(), 5);
    }

    #[test]
    fn equality_is_reflexive_and_symmetric() {
        let a = array(&[3, 1, 4, 1, 5]);
        let b = array(&[3, 1, 4, 1, 5]);

        assert!(equals(&a, &a));
        assert!(equals(&a, &b));
        assert!(equals(&b, &a));
        assert_eq!(a, b);
    }

    #[test]
    fn different_lengths_are_never_equal() {
        let a = array(&[1, 2, 3]);
        let b = array(&[1, 2]);
        assert!(!equals(&a, &b));
        assert!(!equals(&b, &a));
        assert!(!equals(&IntegerArray::new(), &a));
    }

    #[test]
    fn single_element_difference() {
        let a = IntegerArray::ascending(9);
        for index in 0..9 {
            let mut elements = a.clone().into_vec();
            elements[index] = -1;
            let b = array(&elements);
            assert!(!a.equals(&b), "arrays differing at index {index} compared equal");
        }
    }

    #[test]
    fn empty_arrays_are_equal() {
        assert!(equals(&IntegerArray::new(), &array(&[])));
    }
}
