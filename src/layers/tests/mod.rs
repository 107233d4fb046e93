mod pool;

use crate::tensor::Tensor;
use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// 数值梯度的扰动步长
const H: f64 = 1e-5;

fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn random_tensor(shape: &[usize], rng: &mut StdRng) -> Tensor {
    Tensor::new_random_with_rng(-1.0, 1.0, shape, rng)
}

/// 逐元素比较解析梯度与数值梯度：绝对误差在1e-8以内，或相对误差在1e-5以内
fn assert_grad_close(analytic: &Tensor, numerical: &Tensor) {
    assert_eq!(analytic.shape(), numerical.shape());
    for (a, n) in analytic.iter().zip(numerical.iter()) {
        assert_relative_eq!(*a, *n, epsilon = 1e-8, max_relative = 1e-5);
    }
}
