//! # Array Broadcasting
//!
//! Element-wise combination of arrays with different shapes, following the
//! usual NumPy rules:
//!
//! - Shapes are aligned on their trailing axes
//! - Missing leading axes count as length 1
//! - Each axis pair must be equal, or one of them must be 1
//!
//! A scalar (0-D array) or a length-1 array therefore combines with an array of
//! any shape by replication. Anything else that disagrees is rejected with
//! [`CalcError::ShapeMismatch`] before a single element is computed.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::broadcast::{broadcast_map2, broadcast_shape};
//! use ndarray::{arr0, array};
//!
//! assert_eq!(broadcast_shape(&[&[3], &[1]]), Some(vec![3]));
//! assert_eq!(broadcast_shape(&[&[2, 1], &[3]]), Some(vec![2, 3]));
//! assert_eq!(broadcast_shape(&[&[2], &[3]]), None);
//!
//! let scaled = broadcast_map2("scale", ["x", "k"], &array![1.0, 2.0, 3.0], &arr0(2.0), |x, k| x * k).unwrap();
//! assert_eq!(scaled.as_slice().unwrap(), &[2.0, 4.0, 6.0]);
//! ```

use log::{debug, trace};
use ndarray::{ArrayBase, ArrayD, ArrayViewD, Data, Dimension, Zip};

use crate::errors::{CalcError, CalcResult};

/// Compute the broadcast shape of a set of input shapes.
///
/// Returns `None` when the shapes are incompatible. A length-0 axis paired
/// with a length-1 axis broadcasts to length 0.
pub fn broadcast_shape(shapes: &[&[usize]]) -> Option<Vec<usize>> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut out = vec![1usize; ndim];

    for shape in shapes {
        let offset = ndim - shape.len();
        for (axis, &len) in shape.iter().enumerate() {
            let slot = &mut out[offset + axis];
            if len == *slot || len == 1 {
                continue;
            }
            if *slot == 1 {
                *slot = len;
            } else {
                return None;
            }
        }
    }

    Some(out)
}

/// Broadcast two arrays to their common shape as dynamic-dimension views.
///
/// `names` label the inputs in the error message.
pub fn broadcast_views2<'a, S1, S2, D1, D2>(
    operation: &str,
    names: [&str; 2],
    a: &'a ArrayBase<S1, D1>,
    b: &'a ArrayBase<S2, D2>,
) -> CalcResult<(ArrayViewD<'a, f64>, ArrayViewD<'a, f64>)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
{
    let mismatch = || {
        debug!("{}: incompatible shapes {:?} and {:?}", operation, a.shape(), b.shape());
        CalcError::shape_mismatch_named(operation, &[(names[0], a.shape()), (names[1], b.shape())])
    };

    let shape = broadcast_shape(&[a.shape(), b.shape()]).ok_or_else(mismatch)?;
    trace!("{}: broadcasting to {:?}", operation, shape);

    let av = a.broadcast(shape.as_slice()).ok_or_else(mismatch)?;
    let bv = b.broadcast(shape.as_slice()).ok_or_else(mismatch)?;
    Ok((av, bv))
}

/// Broadcast three arrays to their common shape as dynamic-dimension views.
pub fn broadcast_views3<'a, S1, S2, S3, D1, D2, D3>(
    operation: &str,
    names: [&str; 3],
    a: &'a ArrayBase<S1, D1>,
    b: &'a ArrayBase<S2, D2>,
    c: &'a ArrayBase<S3, D3>,
) -> CalcResult<(ArrayViewD<'a, f64>, ArrayViewD<'a, f64>, ArrayViewD<'a, f64>)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
    D3: Dimension,
{
    let mismatch = || {
        debug!(
            "{}: incompatible shapes {:?}, {:?} and {:?}",
            operation,
            a.shape(),
            b.shape(),
            c.shape()
        );
        CalcError::shape_mismatch_named(
            operation,
            &[(names[0], a.shape()), (names[1], b.shape()), (names[2], c.shape())],
        )
    };

    let shape = broadcast_shape(&[a.shape(), b.shape(), c.shape()]).ok_or_else(mismatch)?;
    trace!("{}: broadcasting to {:?}", operation, shape);

    let av = a.broadcast(shape.as_slice()).ok_or_else(mismatch)?;
    let bv = b.broadcast(shape.as_slice()).ok_or_else(mismatch)?;
    let cv = c.broadcast(shape.as_slice()).ok_or_else(mismatch)?;
    Ok((av, bv, cv))
}

/// Broadcast two arrays and map them element-wise into a new array.
pub fn broadcast_map2<S1, S2, D1, D2, F>(
    operation: &str,
    names: [&str; 2],
    a: &ArrayBase<S1, D1>,
    b: &ArrayBase<S2, D2>,
    f: F,
) -> CalcResult<ArrayD<f64>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
    F: Fn(f64, f64) -> f64,
{
    let (av, bv) = broadcast_views2(operation, names, a, b)?;
    Ok(Zip::from(&av).and(&bv).map_collect(|&x, &y| f(x, y)))
}

/// Broadcast three arrays and map them element-wise into a new array.
pub fn broadcast_map3<S1, S2, S3, D1, D2, D3, F>(
    operation: &str,
    names: [&str; 3],
    a: &ArrayBase<S1, D1>,
    b: &ArrayBase<S2, D2>,
    c: &ArrayBase<S3, D3>,
    f: F,
) -> CalcResult<ArrayD<f64>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
    D3: Dimension,
    F: Fn(f64, f64, f64) -> f64,
{
    let (av, bv, cv) = broadcast_views3(operation, names, a, b, c)?;
    Ok(Zip::from(&av).and(&bv).and(&cv).map_collect(|&x, &y, &z| f(x, y, z)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr0, array, Array1};

    #[test]
    fn test_shape_equal() {
        assert_eq!(broadcast_shape(&[&[3], &[3]]), Some(vec![3]));
        assert_eq!(broadcast_shape(&[&[2, 3], &[2, 3]]), Some(vec![2, 3]));
    }

    #[test]
    fn test_shape_scalar_and_unit() {
        assert_eq!(broadcast_shape(&[&[], &[4]]), Some(vec![4]));
        assert_eq!(broadcast_shape(&[&[1], &[4]]), Some(vec![4]));
        assert_eq!(broadcast_shape(&[&[4], &[1], &[]]), Some(vec![4]));
        assert_eq!(broadcast_shape(&[&[], &[]]), Some(vec![]));
    }

    #[test]
    fn test_shape_outer() {
        // Column against row gives a grid
        assert_eq!(broadcast_shape(&[&[3, 1], &[4]]), Some(vec![3, 4]));
        assert_eq!(broadcast_shape(&[&[1, 4], &[3, 1]]), Some(vec![3, 4]));
    }

    #[test]
    fn test_shape_incompatible() {
        assert_eq!(broadcast_shape(&[&[2], &[3]]), None);
        assert_eq!(broadcast_shape(&[&[2, 3], &[3, 2]]), None);
        assert_eq!(broadcast_shape(&[&[3], &[3], &[2]]), None);
    }

    #[test]
    fn test_shape_zero_length() {
        assert_eq!(broadcast_shape(&[&[0], &[1]]), Some(vec![0]));
        assert_eq!(broadcast_shape(&[&[0], &[2]]), None);
    }

    #[test]
    fn test_map2_replicates_length_one() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![10.0];
        let out = broadcast_map2("add", ["a", "b"], &a, &b, |x, y| x + y).unwrap();
        assert_eq!(out.shape(), &[3]);
        assert_eq!(out.as_slice().unwrap(), &[11.0, 12.0, 13.0]);
    }

    #[test]
    fn test_map2_scalar() {
        let a = arr0(2.0);
        let b = array![[1.0, 2.0], [3.0, 4.0]];
        let out = broadcast_map2("mul", ["a", "b"], &a, &b, |x, y| x * y).unwrap();
        assert_eq!(out.shape(), &[2, 2]);
        assert_eq!(out.iter().copied().collect::<Vec<_>>(), vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_map2_mismatch_error() {
        let a = array![1.0, 2.0];
        let b = array![1.0, 2.0, 3.0];
        let err = broadcast_map2("add", ["a", "b"], &a, &b, |x, y| x + y).unwrap_err();
        assert_eq!(err.error_code(), "SHAPE_MISMATCH");
        assert!(err.to_string().contains("a=[2], b=[3]"), "{}", err);
    }

    #[test]
    fn test_map3() {
        let a = array![1.0, 2.0];
        let b = arr0(3.0);
        let c = array![[1.0], [2.0]];
        let out = broadcast_map3("fma", ["a", "b", "c"], &a, &b, &c, |x, y, z| x * y + z).unwrap();
        assert_eq!(out.shape(), &[2, 2]);
        assert_eq!(out.iter().copied().collect::<Vec<_>>(), vec![4.0, 7.0, 5.0, 8.0]);
    }

    #[test]
    fn test_map3_mismatch_error() {
        let a = array![1.0, 2.0];
        let b = array![1.0, 2.0];
        let c = array![1.0, 2.0, 3.0];
        let err = broadcast_map3("sum", ["a", "b", "c"], &a, &b, &c, |x, y, z| x + y + z).unwrap_err();
        assert!(matches!(err, CalcError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_output_does_not_alias_input() {
        let a = array![1.0, 2.0];
        let b = array![0.0, 0.0];
        let mut out = broadcast_map2("add", ["a", "b"], &a, &b, |x, y| x + y).unwrap();
        out[[0]] = 100.0;
        assert_eq!(a, Array1::from(vec![1.0, 2.0]));
    }

    #[test]
    fn test_empty_inputs() {
        let a: Array1<f64> = Array1::zeros(0);
        let b = array![5.0];
        let out = broadcast_map2("add", ["a", "b"], &a, &b, |x, y| x + y).unwrap();
        assert_eq!(out.shape(), &[0]);
    }
}
