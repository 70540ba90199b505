//! Numeric ranges as sequences.

use super::Sequence;

/// Primitive numbers that a [`RangeSequence`] can count over.
///
/// Implemented for every primitive integer and float type.
pub trait Numeric: Copy + PartialOrd {
    /// The additive identity.
    const ZERO: Self;
    /// The default step.
    const ONE: Self;

    /// Adds `step`, returning `None` if the result is not representable.
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! impl_numeric_integer {
    ($($type:ty),* $(,)?) => {
        $(
            impl Numeric for $type {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($type:ty),* $(,)?) => {
        $(
            impl Numeric for $type {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }
            }
        )*
    };
}

impl_numeric_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

/// A sequence counting from a start value towards an end value.
///
/// Created by [`range`](super::source::range),
/// [`range_by`](super::source::range_by),
/// [`range_inclusive`](super::source::range_inclusive) and
/// [`range_inclusive_by`](super::source::range_inclusive_by).
///
/// A negative step counts down. A zero step yields the start value forever
/// while it is within bounds. Stepping past the representable range of the
/// type ends the sequence instead of overflowing.
#[derive(Debug, Clone)]
pub struct RangeSequence<T> {
    current: Option<T>,
    end: T,
    step: T,
    include_end: bool,
    backwards: bool,
}

impl<T: Numeric> RangeSequence<T> {
    pub(crate) fn new(start: T, end: T, step: T, include_end: bool) -> Self {
        Self {
            current: Some(start),
            end,
            step,
            include_end,
            backwards: step < T::ZERO,
        }
    }

    fn in_bounds(&self, value: T) -> bool {
        let before_end = if self.backwards {
            value > self.end
        } else {
            value < self.end
        };
        before_end || (self.include_end && value == self.end)
    }
}

impl<T: Numeric> Sequence for RangeSequence<T> {
    type Item = T;

    fn advance(&mut self) -> Option<T> {
        let current = self.current?;
        if !self.in_bounds(current) {
            return None;
        }
        self.current = current.checked_step(self.step);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect_range<T: Numeric>(range: RangeSequence<T>) -> Vec<T> {
        range.collect()
    }

    #[rstest]
    #[case(0, 5, 1, false, vec![0, 1, 2, 3, 4])]
    #[case(0, 5, 1, true, vec![0, 1, 2, 3, 4, 5])]
    #[case(5, 0, 1, false, vec![])]
    #[case(0, 10, 3, false, vec![0, 3, 6, 9])]
    #[case(10, 0, -3, false, vec![10, 7, 4, 1])]
    #[case(10, 4, -3, true, vec![10, 7, 4])]
    #[case(0, 5, -1, false, vec![])]
    fn test_range_bounds(
        #[case] start: i32,
        #[case] end: i32,
        #[case] step: i32,
        #[case] include_end: bool,
        #[case] expected: Vec<i32>,
    ) {
        let range = RangeSequence::new(start, end, step, include_end);
        assert_eq!(collect_range(range), expected);
    }

    #[rstest]
    fn test_range_inclusive_at_type_maximum_does_not_overflow() {
        let range = RangeSequence::new(253_u8, 255, 1, true);
        assert_eq!(collect_range(range), vec![253, 254, 255]);
    }

    #[rstest]
    fn test_range_large_step_stops_at_overflow() {
        let range = RangeSequence::new(250_u8, 255, 10, false);
        assert_eq!(collect_range(range), vec![250]);
    }

    #[rstest]
    fn test_range_zero_step_repeats_start() {
        let mut range = RangeSequence::new(3, 4, 0, false);
        for _ in 0..10 {
            assert_eq!(range.advance(), Some(3));
        }
    }

    #[rstest]
    fn test_float_range() {
        let range = RangeSequence::new(0.0_f64, 1.0, 0.25, true);
        assert_eq!(collect_range(range), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
