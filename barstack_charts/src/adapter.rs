// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric adapters: element → signed bar height.

extern crate alloc;

use alloc::sync::Arc;

/// Built-in numeric types that convert directly to a bar height.
pub trait Scalar {
    /// Returns the value as `f64`.
    fn to_f64(&self) -> f64;
}

macro_rules! impl_scalar_lossless {
    ($($t:ty),*) => {
        $(impl Scalar for $t {
            fn to_f64(&self) -> f64 {
                f64::from(*self)
            }
        })*
    };
}

macro_rules! impl_scalar_cast {
    ($($t:ty),*) => {
        $(impl Scalar for $t {
            fn to_f64(&self) -> f64 {
                *self as f64
            }
        })*
    };
}

impl_scalar_lossless!(i8, i16, i32, u8, u16, u32, f32);
impl_scalar_cast!(i64, i128, isize, u64, u128, usize);

impl Scalar for f64 {
    fn to_f64(&self) -> f64 {
        *self
    }
}

impl<T: Scalar + ?Sized> Scalar for &T {
    fn to_f64(&self) -> f64 {
        (**self).to_f64()
    }
}

/// Converts a data element into a signed height above the chart's origin.
///
/// Adapters are pure: the same element always yields the same height. NaN heights are passed
/// through untouched.
pub struct HeightAdapter<T> {
    height: Arc<dyn Fn(&T) -> f64>,
}

impl<T> Clone for HeightAdapter<T> {
    fn clone(&self) -> Self {
        Self {
            height: self.height.clone(),
        }
    }
}

impl<T> core::fmt::Debug for HeightAdapter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeightAdapter")
            .field("height", &"<fn>")
            .finish()
    }
}

impl<T: 'static> HeightAdapter<T> {
    /// Creates an adapter from an arbitrary closure.
    pub fn new(height: impl Fn(&T) -> f64 + 'static) -> Self {
        Self {
            height: Arc::new(height),
        }
    }

    /// Creates an adapter that projects a numeric field out of each element.
    ///
    /// ```
    /// use barstack_charts::HeightAdapter;
    ///
    /// struct Sale {
    ///     units: i8,
    /// }
    ///
    /// let adapter = HeightAdapter::field(|s: &Sale| s.units);
    /// assert_eq!(adapter.height(&Sale { units: -3 }), -3.0);
    /// ```
    pub fn field<S: Scalar>(projection: impl Fn(&T) -> S + 'static) -> Self {
        Self::new(move |element| projection(element).to_f64())
    }

    /// Measures heights from `origin` instead of from zero.
    pub fn relative_to(self, origin: f64) -> Self {
        let inner = self.height;
        Self::new(move |element| inner(element) - origin)
    }
}

impl<T: Scalar + 'static> HeightAdapter<T> {
    /// The identity adapter for built-in numeric types.
    pub fn linear() -> Self {
        Self::new(T::to_f64)
    }
}

impl<T> HeightAdapter<T> {
    /// Returns the height of `element` above the origin.
    pub fn height(&self, element: &T) -> f64 {
        (self.height)(element)
    }
}
