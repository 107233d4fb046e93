/*
 * @Description  : 全连接层（仿射变换）。
 *                 输入x形状为[N, d1, d2, ...]，先展平为[N, D]（D为非batch维度之积），
 *                 再计算 out = x·w + b，输出形状为[N, B]。
 */

use super::{expect_dimension, expect_shape};
use crate::errors::{LayerError, ShapeError};
use crate::tensor::Tensor;

/// 全连接层前向传播的缓存。只能由[`forward`]构建。
#[derive(Debug)]
pub struct DenseCache {
    /// 原始（未展平）形状的输入
    input: Tensor,
    weight: Tensor,
    bias: Tensor,
}

impl DenseCache {
    pub fn input(&self) -> &Tensor {
        &self.input
    }

    pub fn weight(&self) -> &Tensor {
        &self.weight
    }

    pub fn bias(&self) -> &Tensor {
        &self.bias
    }
}

/// 全连接层的梯度，各自形状与对应的前向输入一致
#[derive(Debug, Clone, PartialEq)]
pub struct DenseGrads {
    pub dx: Tensor,
    pub dw: Tensor,
    pub db: Tensor,
}

/// 将`x`展平后的形状`[N, D]`
fn flat_shape(x: &Tensor) -> [usize; 2] {
    let shape = x.shape();
    [shape[0], shape[1..].iter().product()]
}

/// 前向传播
/// * `x` - 输入，形状为[N, d1, d2, ...]
/// * `w` - 权重，形状为[D, B]
/// * `b` - 偏置，形状为[B]
pub fn forward(x: &Tensor, w: &Tensor, b: &Tensor) -> Result<(Tensor, DenseCache), LayerError> {
    if x.dimension() == 0 {
        return Err(ShapeError::DimensionMismatch {
            expected: 1,
            got: 0,
            message: "全连接层的输入至少需要batch维度".to_string(),
        }
        .into());
    }
    expect_dimension(w, 2, "全连接层权重须为[D, B]")?;
    expect_dimension(b, 1, "全连接层偏置须为[B]")?;

    let [n, d] = flat_shape(x);
    let out_dim = w.shape()[1];
    expect_shape(w, &[d, out_dim], "全连接层权重的行数须等于输入展平后的特征数")?;
    expect_shape(b, &[out_dim], "全连接层偏置的长度须等于权重的列数")?;

    let product = x.reshape(&[n, d])?.mat_mul(w)?;
    // [N, B] + [B]，偏置沿batch维度广播
    let out = Tensor::from_array(product.array() + b.array());

    let cache = DenseCache {
        input: x.clone(),
        weight: w.clone(),
        bias: b.clone(),
    };
    Ok((out, cache))
}

/// 反向传播
/// * `dout` - 上游梯度，形状为[N, B]
pub fn backward(dout: &Tensor, cache: DenseCache) -> Result<DenseGrads, LayerError> {
    let DenseCache { input, weight, .. } = cache;
    let [n, d] = flat_shape(&input);
    expect_shape(dout, &[n, weight.shape()[1]], "全连接层上游梯度须为[N, B]")?;

    let dx = dout.mat_mul(&weight.transpose()?)?.reshape(input.shape())?;
    let dw = input.reshape(&[n, d])?.transpose()?.mat_mul(dout)?;
    let db = dout.sum_axes(&[0])?;
    Ok(DenseGrads { dx, dw, db })
}
