/*
 * @Description  : 数值梯度（中心差分），作为各层反向传播解析梯度的校验基准。
 *                 对标量函数 L(x) = sum(f(x) * dout)，有
 *                 dL/dx[i] ≈ (L(x + h·e_i) - L(x - h·e_i)) / (2h)。
 */

use crate::tensor::Tensor;

/// 计算`f`在`x`处、以`dout`为上游梯度的数值梯度，返回形状与`x`一致的张量。
///
/// `f`每次接收一个只在某个元素上被扰动了±`h`的新张量；`f(x)`的形状须与`dout`一致，否则会panic。
pub fn eval_numerical_gradient<F>(mut f: F, x: &Tensor, dout: &Tensor, h: f64) -> Tensor
where
    F: FnMut(&Tensor) -> Tensor,
{
    let out_shape = f(x).shape().to_vec();
    assert!(
        out_shape == dout.shape(),
        "f(x)的形状须与上游梯度一致：{:?} vs {:?}",
        out_shape,
        dout.shape()
    );

    let shape = x.shape();
    let mut values = x.to_vec();
    let mut grad = vec![0.0; values.len()];

    for i in 0..values.len() {
        let old = values[i];

        values[i] = old + h;
        let pos = f(&Tensor::new(&values, shape));
        values[i] = old - h;
        let neg = f(&Tensor::new(&values, shape));
        values[i] = old;

        let diff = &pos - &neg;
        grad[i] = diff.iter().zip(dout.iter()).map(|(d, g)| d * g).sum::<f64>() / (2.0 * h);
    }

    Tensor::new(&grad, shape)
}

/// 两个张量之间的最大相对误差：max(|a - b| / max(1e-8, |a| + |b|))
pub fn rel_error(a: &Tensor, b: &Tensor) -> f64 {
    assert!(
        a.is_same_shape(b),
        "比较相对误差的两个张量形状须一致：{:?} vs {:?}",
        a.shape(),
        b.shape()
    );
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs() / (x.abs() + y.abs()).max(1e-8))
        .fold(0.0, f64::max)
}
