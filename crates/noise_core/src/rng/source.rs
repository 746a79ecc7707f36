//! Draw traits at the seam between generators and the code that consumes
//! their deviates.

use std::cell::RefCell;
use std::rc::Rc;

/// A stream of uniform deviates in [0, 1).
pub trait UniformSource {
    /// Returns the next uniform deviate in [0, 1).
    fn next_uniform(&mut self) -> f64;
}

/// A stream of standard normal deviates (mean 0, variance 1).
pub trait NormalSource {
    /// Returns the next standard normal deviate.
    fn next_normal(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<S: NormalSource + ?Sized> NormalSource for &mut S {
    #[inline]
    fn next_normal(&mut self) -> f64 {
        (**self).next_normal()
    }
}

/// Shared single-thread handle.
///
/// # Panics
///
/// Panics if the cell is already mutably borrowed, which only happens when a
/// draw re-enters the same generator.
impl<S: UniformSource + ?Sized> UniformSource for Rc<RefCell<S>> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.borrow_mut().next_uniform()
    }
}

/// Shared single-thread handle.
///
/// # Panics
///
/// Panics if the cell is already mutably borrowed.
impl<S: NormalSource + ?Sized> NormalSource for Rc<RefCell<S>> {
    #[inline]
    fn next_normal(&mut self) -> f64 {
        self.borrow_mut().next_normal()
    }
}
