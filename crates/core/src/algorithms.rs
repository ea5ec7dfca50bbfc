use std::ops::Mul;

/// Compute the cumulative product of a sequence of numbers
///
/// Element `i` of the result is the product of `values[0..=i]`. The input is
/// left untouched and an empty input yields an empty result. Overflow is not
/// checked: for `f64` an out-of-range product becomes `inf` and propagates.
///
/// ```rust
/// use cumprod_core::algorithms::cumulative_product;
///
/// assert_eq!(cumulative_product(&[1, 2, 3, 4, 5]), vec![1, 2, 6, 24, 120]);
/// ```
pub fn cumulative_product<T>(values: &[T]) -> Vec<T>
where
    T: Copy + Mul<Output = T>,
{
    let mut result = Vec::with_capacity(values.len());
    let mut running: Option<T> = None;

    for &value in values {
        let product = match running {
            Some(previous) => previous * value,
            None => value,
        };
        result.push(product);
        running = Some(product);
    }

    result
}

/// Final running product of `values`, or `None` when empty
///
/// Equivalent to `cumulative_product(values).last()` without building the
/// intermediate vector.
pub fn last_product<T>(values: &[T]) -> Option<T>
where
    T: Copy + Mul<Output = T>,
{
    values.iter().copied().reduce(|acc, value| acc * value)
}
