// File: crates/forest-core/src/grid.rs
// Summary: Simple spacing helpers for tick layout.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// `steps` values evenly spaced in log10 between two positive endpoints.
/// The endpoints are returned exactly, so callers can rely on the bounds.
pub fn logspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    let mut out: Vec<f64> = linspace(start.log10(), end.log10(), steps)
        .into_iter()
        .map(|e| 10f64.powf(e))
        .collect();
    if let Some(first) = out.first_mut() { *first = start; }
    if let Some(last) = out.last_mut() { *last = end; }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_endpoints() {
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn logspace_is_geometric() {
        let v = logspace(1.0, 100.0, 3);
        assert_eq!(v[0], 1.0);
        assert!((v[1] - 10.0).abs() < 1e-9);
        assert_eq!(v[2], 100.0);
    }
}
