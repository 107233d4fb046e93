use super::{H, assert_grad_close, random_tensor, seeded_rng};
use crate::assert_err;
use crate::errors::{LayerError, ShapeError};
use crate::layers::{PoolParams, pool};
use crate::tensor::Tensor;
use crate::utils::gradient_check::eval_numerical_gradient;

// ==================== 形状测试 ====================

#[test]
fn test_pool_output_shape() {
    // (H, W, height, width, stride) => (Hp, Wp)
    let cases = [
        ((4, 4, 2, 2, 2), (2, 2)),
        ((28, 28, 2, 2, 2), (14, 14)),
        ((6, 6, 3, 3, 2), (2, 2)),
        ((5, 7, 2, 3, 1), (4, 5)),
        // 放不下整个窗口的尾部被忽略
        ((5, 5, 2, 2, 2), (2, 2)),
    ];
    for ((h, w, height, width, stride), (out_h, out_w)) in cases {
        let x = Tensor::zeros(&[2, 3, h, w]);
        let params = PoolParams::new(stride, height, width).unwrap();

        let (out, cache) = pool::forward(&x, params).unwrap();
        assert_eq!(out.shape(), &[2, 3, out_h, out_w]);

        let dx = pool::backward(&out, cache).unwrap();
        assert_eq!(dx.shape(), x.shape());
    }
}

// ==================== 前向传播测试 ====================

#[test]
fn test_pool_forward_simple() {
    #[rustfmt::skip]
    let x = Tensor::new(&[
        1.0, 2.0, 3.0, 4.0,
        5.0, 6.0, 7.0, 8.0,
        9.0, 10.0, 11.0, 12.0,
        13.0, 14.0, 15.0, 16.0,
    ], &[1, 1, 4, 4]);
    let (out, cache) = pool::forward(&x, PoolParams::new(2, 2, 2).unwrap()).unwrap();

    // 窗口 [0:2, 0:2]: max(1,2,5,6) = 6
    // 窗口 [0:2, 2:4]: max(3,4,7,8) = 8
    // 窗口 [2:4, 0:2]: max(9,10,13,14) = 14
    // 窗口 [2:4, 2:4]: max(11,12,15,16) = 16
    assert_eq!(out, Tensor::new(&[6.0, 8.0, 14.0, 16.0], &[1, 1, 2, 2]));
    assert_eq!(cache.input(), &x);
    assert_eq!(cache.params(), PoolParams { stride: 2, height: 2, width: 2 });
}

#[test]
fn test_pool_forward_negative_values() {
    let x = Tensor::new(&[-5.0, -2.0, -3.0, -4.0], &[1, 1, 2, 2]);
    let (out, _) = pool::forward(&x, PoolParams::new(1, 2, 2).unwrap()).unwrap();
    assert_eq!(out, Tensor::new(&[-2.0], &[1, 1, 1, 1]));
}

#[test]
fn test_pool_nan_propagates() {
    // 第一个窗口含NaN，第二个窗口正常
    #[rustfmt::skip]
    let x = Tensor::new(&[
        f64::NAN, 1.0, 2.0, 3.0,
        0.5,      0.0, 4.0, 1.0,
    ], &[1, 1, 2, 4]);
    let (out, cache) = pool::forward(&x, PoolParams::new(2, 2, 2).unwrap()).unwrap();
    assert!(out[[0, 0, 0, 0]].is_nan());
    assert_eq!(out[[0, 0, 0, 1]], 4.0);

    let dx = pool::backward(&Tensor::new(&[1.0, 1.0], &[1, 1, 1, 2]), cache).unwrap();
    #[rustfmt::skip]
    let expected = Tensor::new(&[
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
    ], &[1, 1, 2, 4]);
    assert_eq!(dx, expected);
}

// ==================== 反向传播测试 ====================

#[test]
fn test_pool_backward_routes_to_max() {
    #[rustfmt::skip]
    let x = Tensor::new(&[
        1.0, 2.0, 3.0, 4.0,
        5.0, 6.0, 7.0, 8.0,
        9.0, 10.0, 11.0, 12.0,
        13.0, 14.0, 15.0, 16.0,
    ], &[1, 1, 4, 4]);
    let (_, cache) = pool::forward(&x, PoolParams::new(2, 2, 2).unwrap()).unwrap();
    let dout = Tensor::new(&[1.0, 2.0, 3.0, 4.0], &[1, 1, 2, 2]);
    let dx = pool::backward(&dout, cache).unwrap();

    #[rustfmt::skip]
    let expected = Tensor::new(&[
        0.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 2.0,
        0.0, 0.0, 0.0, 0.0,
        0.0, 3.0, 0.0, 4.0,
    ], &[1, 1, 4, 4]);
    assert_eq!(dx, expected);
}

#[test]
fn test_pool_backward_ties_receive_full_gradient() {
    // 并列最大值的每个位置都获得完整的上游梯度（不均分，也不只给第一个）
    let x = Tensor::new(&[1.0; 4], &[1, 1, 2, 2]);
    let (_, cache) = pool::forward(&x, PoolParams::new(2, 2, 2).unwrap()).unwrap();
    let dx = pool::backward(&Tensor::new(&[4.0], &[1, 1, 1, 1]), cache).unwrap();
    assert_eq!(dx, Tensor::new(&[4.0; 4], &[1, 1, 2, 2]));
}

#[test]
fn test_pool_backward_accumulates_overlapping_windows() {
    // 步长1、窗口2x2：元素5同时是两个窗口的最大值，须得到两个窗口梯度之和
    #[rustfmt::skip]
    let x = Tensor::new(&[
        1.0, 5.0, 2.0,
        0.0, 3.0, 1.0,
    ], &[1, 1, 2, 3]);
    let (out, cache) = pool::forward(&x, PoolParams::new(1, 2, 2).unwrap()).unwrap();
    assert_eq!(out, Tensor::new(&[5.0, 5.0], &[1, 1, 1, 2]));

    let dx = pool::backward(&Tensor::new(&[2.0, 3.0], &[1, 1, 1, 2]), cache).unwrap();
    #[rustfmt::skip]
    let expected = Tensor::new(&[
        0.0, 5.0, 0.0,
        0.0, 0.0, 0.0,
    ], &[1, 1, 2, 3]);
    assert_eq!(dx, expected);
}

#[test]
fn test_pool_backward_ignored_tail_gets_zero() {
    let x = Tensor::new(&(0..25).map(f64::from).collect::<Vec<_>>(), &[1, 1, 5, 5]);
    let (_, cache) = pool::forward(&x, PoolParams::new(2, 2, 2).unwrap()).unwrap();
    let dx = pool::backward(&Tensor::new(&[1.0; 4], &[1, 1, 2, 2]), cache).unwrap();
    for k in 0..5 {
        assert_eq!(dx[[0, 0, 4, k]], 0.0);
        assert_eq!(dx[[0, 0, k, 4]], 0.0);
    }
    assert_eq!(dx.sum(), 4.0);
    assert_eq!(dx[[0, 0, 3, 3]], 1.0);
}

#[test]
fn test_pool_gradient_check() {
    let mut rng = seeded_rng(5);
    // (stride, height, width)：包含重叠窗口与非方形窗口
    for (stride, height, width) in [(2, 2, 2), (1, 2, 2), (1, 3, 2), (2, 3, 3)] {
        let x = random_tensor(&[2, 2, 5, 5], &mut rng);
        let params = PoolParams::new(stride, height, width).unwrap();

        let (out, cache) = pool::forward(&x, params).unwrap();
        let dout = random_tensor(out.shape(), &mut rng);
        let dx = pool::backward(&dout, cache).unwrap();

        let dx_num = eval_numerical_gradient(|x| pool::forward(x, params).unwrap().0, &x, &dout, H);
        assert_grad_close(&dx, &dx_num);
    }
}

// ==================== 错误处理测试 ====================

#[test]
fn test_pool_errors() {
    let x = Tensor::zeros(&[1, 1, 3, 3]);

    assert_err!(
        pool::forward(&x, PoolParams::new(1, 4, 2).unwrap()),
        LayerError::Shape(ShapeError::WindowTooLarge {
            window: (4, 2),
            input: (3, 3),
        })
    );
    assert_err!(
        pool::forward(&Tensor::zeros(&[3, 3]), PoolParams::new(1, 2, 2).unwrap()),
        LayerError::Shape(ShapeError::DimensionMismatch { expected: 4, got: 2, .. })
    );
    assert_err!(
        pool::forward(
            &x,
            PoolParams {
                stride: 0,
                height: 2,
                width: 2,
            }
        ),
        LayerError::Configuration(_)
    );

    let (_, cache) = pool::forward(&x, PoolParams::new(1, 2, 2).unwrap()).unwrap();
    assert_err!(
        pool::backward(&Tensor::zeros(&[1, 1, 1, 1]), cache),
        LayerError::Shape(ShapeError::ShapeMismatch { expected, .. }) if expected == &[1, 1, 2, 2]
    );
}
