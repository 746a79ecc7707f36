//! Backing storage for series values.
//!
//! A process either owns its values or works in place on a caller buffer.
//! The choice is made once, at construction, and is carried in the type:
//! dropping [`SeriesValues::Owned`] frees the vector, dropping
//! [`SeriesValues::Borrowed`] only ends the borrow.

use std::ops::{Deref, DerefMut};

use super::error::RedNoiseError;

/// Initial values supplied at construction.
#[derive(Debug)]
pub enum InitialValues<'a> {
    /// One value copied into every series; the process owns the storage.
    Broadcast(f64),
    /// Caller buffer with one value per series; the process updates it in place.
    Borrowed(&'a mut [f64]),
}

/// Series state buffer.
#[derive(Debug)]
pub enum SeriesValues<'a> {
    /// Allocated and owned by the process.
    Owned(Vec<f64>),
    /// Caller buffer, borrowed for the lifetime of the process.
    Borrowed(&'a mut [f64]),
}

impl<'a> SeriesValues<'a> {
    /// Materialises the initial values for `count` series.
    ///
    /// # Errors
    ///
    /// Returns `RedNoiseError::BufferLength` if a borrowed buffer does not
    /// hold exactly `count` values.
    pub fn from_initial(initial: InitialValues<'a>, count: usize) -> Result<Self, RedNoiseError> {
        match initial {
            InitialValues::Broadcast(value) => Ok(SeriesValues::Owned(vec![value; count])),
            InitialValues::Borrowed(buffer) => {
                if buffer.len() != count {
                    return Err(RedNoiseError::BufferLength {
                        expected: count,
                        actual: buffer.len(),
                    });
                }
                Ok(SeriesValues::Borrowed(buffer))
            }
        }
    }

    /// Returns `true` if the values live in a caller buffer.
    #[inline]
    pub fn is_borrowed(&self) -> bool {
        matches!(self, SeriesValues::Borrowed(_))
    }

    /// Returns the values as an owned vector (copying a borrowed buffer).
    pub fn into_owned(self) -> Vec<f64> {
        match self {
            SeriesValues::Owned(values) => values,
            SeriesValues::Borrowed(buffer) => buffer.to_vec(),
        }
    }
}

impl Deref for SeriesValues<'_> {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        match self {
            SeriesValues::Owned(values) => values,
            SeriesValues::Borrowed(buffer) => buffer,
        }
    }
}

impl DerefMut for SeriesValues<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [f64] {
        match self {
            SeriesValues::Owned(values) => values,
            SeriesValues::Borrowed(buffer) => buffer,
        }
    }
}
