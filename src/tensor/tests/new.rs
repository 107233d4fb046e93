use crate::assert_panic;
use crate::errors::ShapeError;
use crate::tensor::Tensor;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_new() {
    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    assert_eq!(tensor.shape(), &[2, 3]);
    assert_eq!(tensor.dimension(), 2);
    assert_eq!(tensor.size(), 6);
    assert_eq!(tensor[[0, 0]], 1.);
    assert_eq!(tensor[[1, 2]], 6.);

    // 标量
    let scalar = Tensor::new(&[7.], &[]);
    assert_eq!(scalar.dimension(), 0);
    assert_eq!(scalar[[]], 7.);
}

#[test]
fn test_new_with_wrong_data_len() {
    assert_panic!(
        Tensor::new(&[1., 2., 3.], &[2, 2]),
        ShapeError::ElementCountMismatch {
            shape: vec![2, 2],
            len: 3,
        }
    );
    assert_eq!(
        Tensor::try_new(&[1., 2., 3.], &[2, 2]),
        Err(ShapeError::ElementCountMismatch {
            shape: vec![2, 2],
            len: 3,
        })
    );
}

#[test]
fn test_zeros() {
    let tensor = Tensor::zeros(&[2, 1, 3, 3]);
    assert_eq!(tensor.shape(), &[2, 1, 3, 3]);
    assert!(tensor.iter().all(|&x| x == 0.));
}

#[test]
fn test_new_random_in_range() {
    let tensor = Tensor::new_random(-1., 1., &[4, 5]);
    assert_eq!(tensor.shape(), &[4, 5]);
    assert!(tensor.iter().all(|&x| (-1. ..=1.).contains(&x)));
}

#[test]
fn test_new_random_with_seeded_rng_is_reproducible() {
    let t1 = Tensor::new_random_with_rng(-2., 2., &[3, 3], &mut StdRng::seed_from_u64(7));
    let t2 = Tensor::new_random_with_rng(-2., 2., &[3, 3], &mut StdRng::seed_from_u64(7));
    assert_eq!(t1, t2);
}

#[test]
fn test_index_mut() {
    let mut tensor = Tensor::zeros(&[1, 2, 2, 2]);
    tensor[[0, 1, 1, 0]] = 3.5;
    assert_eq!(tensor[[0, 1, 1, 0]], 3.5);
    assert_eq!(tensor.sum(), 3.5);
}
