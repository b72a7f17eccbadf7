//! Value types shared across the crate

use serde::{Deserialize, Serialize};

pub type FloatValue = f64;

/// An input given either as a single value or as a sequence of values.
///
/// Construction inputs for an ion accept both forms; a scalar is coerced into a
/// one-element sequence.
///
/// ```
/// use ionize_core::values::OneOrMany;
///
/// let single = OneOrMany::from(-1);
/// let many = OneOrMany::from(vec![-2, -1]);
/// assert_eq!(single.into_vec(), vec![-1]);
/// assert_eq!(many.into_vec(), vec![-2, -1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for OneOrMany<$ty> {
                fn from(value: $ty) -> Self {
                    OneOrMany::One(value)
                }
            }
        )*
    };
}

impl_from_scalar!(i32, f64);

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

impl<T, const N: usize> From<[T; N]> for OneOrMany<T> {
    fn from(values: [T; N]) -> Self {
        OneOrMany::Many(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for OneOrMany<T> {
    fn from(values: &[T]) -> Self {
        OneOrMany::Many(values.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_is_coerced() {
        let value = OneOrMany::from(4.76);
        assert_eq!(value, OneOrMany::One(4.76));
        assert_eq!(value.into_vec(), vec![4.76]);
    }

    #[test]
    fn test_slice_and_array() {
        let from_array: OneOrMany<i32> = [1, 2].into();
        let from_slice: OneOrMany<i32> = [1, 2][..].into();
        assert_eq!(from_array, from_slice);
    }

    #[test]
    fn test_deserialise_scalar_or_list() {
        let scalar: OneOrMany<i32> = serde_json::from_str("-1").unwrap();
        let list: OneOrMany<i32> = serde_json::from_str("[-2, -1]").unwrap();
        assert_eq!(scalar.into_vec(), vec![-1]);
        assert_eq!(list.into_vec(), vec![-2, -1]);
    }
}
