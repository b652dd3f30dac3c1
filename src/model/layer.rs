/// One altitude band `(lower, upper]` and the coefficients of the law that holds inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer<C> {
    pub lower: f64,
    pub upper: f64,
    pub coeffs: C,
}

impl<C> Layer<C> {
    pub const fn new(lower: f64, upper: f64, coeffs: C) -> Self {
        Self { lower, upper, coeffs }
    }

    pub fn contains(&self, x: f64) -> bool {
        x > self.lower && x <= self.upper
    }
}

/// Find the layer containing `x`.
///
/// `layers` must be sorted and contiguous. A boundary value belongs to the layer below it.
/// Returns `None` outside the table and for NaN.
pub fn find<C>(layers: &[Layer<C>], x: f64) -> Option<&Layer<C>> {
    let idx = layers.partition_point(|layer| layer.upper < x);
    layers.get(idx).filter(|layer| layer.contains(x))
}

/// Interior boundaries of a table, i.e. every altitude where one law hands over to the next.
pub fn boundaries<C>(layers: &[Layer<C>]) -> impl Iterator<Item = f64> + '_ {
    layers.windows(2).map(|pair| pair[0].upper)
}

/// Evaluate `c[0] + c[1]·x + c[2]·x² + ...` (Horner).
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
