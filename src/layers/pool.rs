/*
 * @Description  : 最大池化层（朴素滑窗实现）。
 *
 * 约定：
 * - 输入 x: [N, C, H, W]，输出 out: [N, C, Hp, Wp]
 * - Hp = (H - height) / stride + 1（向下取整），Wp 同理；放不下整个窗口的尾部行/列被忽略
 * - 反向传播时，窗口内所有等于最大值的位置都获得完整的上游梯度（并列时不均分）
 * - 含NaN的窗口输出NaN，反向传播时该窗口不回传梯度
 */

use ndarray::{Array4, ArrayView2, Zip, s};

use super::params::PoolParams;
use super::{as_4d, expect_shape};
use crate::errors::{LayerError, ShapeError};
use crate::tensor::Tensor;

/// 最大池化前向传播的缓存。只能由[`forward`]构建。
#[derive(Debug)]
pub struct PoolCache {
    input: Tensor,
    params: PoolParams,
}

impl PoolCache {
    pub fn input(&self) -> &Tensor {
        &self.input
    }

    pub const fn params(&self) -> PoolParams {
        self.params
    }
}

fn output_hw(input_hw: (usize, usize), params: PoolParams) -> Result<(usize, usize), ShapeError> {
    let (h, w) = input_hw;
    let PoolParams {
        stride,
        height,
        width,
    } = params;
    if height > h || width > w {
        return Err(ShapeError::WindowTooLarge {
            window: (height, width),
            input: input_hw,
        });
    }
    Ok(((h - height) / stride + 1, (w - width) / stride + 1))
}

/// 窗口最大值；窗口内有NaN时结果为NaN
fn window_max(window: &ArrayView2<f64>) -> f64 {
    window.fold(f64::NEG_INFINITY, |max, &v| if v.is_nan() || v > max { v } else { max })
}

/// 前向传播
pub fn forward(x: &Tensor, params: PoolParams) -> Result<(Tensor, PoolCache), LayerError> {
    params.validate()?;
    let x4 = as_4d(x, "最大池化层输入须为[N, C, H, W]")?;
    let (n, c, h, w) = x4.dim();
    let (out_h, out_w) = output_hw((h, w), params)?;
    let PoolParams {
        stride,
        height,
        width,
    } = params;

    let mut out = Array4::<f64>::zeros((n, c, out_h, out_w));
    for ni in 0..n {
        for ci in 0..c {
            for i in 0..out_h {
                for j in 0..out_w {
                    let (hs, ws) = (i * stride, j * stride);
                    let window = x4.slice(s![ni, ci, hs..hs + height, ws..ws + width]);
                    out[[ni, ci, i, j]] = window_max(&window);
                }
            }
        }
    }

    let cache = PoolCache {
        input: x.clone(),
        params,
    };
    Ok((Tensor::from_array(out), cache))
}

/// 反向传播
/// * `dout` - 上游梯度，形状为[N, C, Hp, Wp]
///
/// 返回的梯度形状与前向输入一致。步长小于窗口时，同一输入位置会被多个窗口访问，梯度逐次累加。
pub fn backward(dout: &Tensor, cache: PoolCache) -> Result<Tensor, LayerError> {
    let PoolCache { input, params } = cache;
    let x4 = as_4d(&input, "最大池化层输入须为[N, C, H, W]")?;
    let (n, c, h, w) = x4.dim();
    let (out_h, out_w) = output_hw((h, w), params)?;
    expect_shape(dout, &[n, c, out_h, out_w], "最大池化层上游梯度须为[N, C, Hp, Wp]")?;
    let d4 = as_4d(dout, "最大池化层上游梯度须为[N, C, Hp, Wp]")?;
    let PoolParams {
        stride,
        height,
        width,
    } = params;

    let mut dx = Array4::<f64>::zeros((n, c, h, w));
    for ni in 0..n {
        for ci in 0..c {
            for i in 0..out_h {
                for j in 0..out_w {
                    let (hs, ws) = (i * stride, j * stride);
                    let window = x4.slice(s![ni, ci, hs..hs + height, ws..ws + width]);
                    let max = window_max(&window);
                    let g = d4[[ni, ci, i, j]];
                    Zip::from(dx.slice_mut(s![ni, ci, hs..hs + height, ws..ws + width]))
                        .and(&window)
                        .for_each(|d, &v| {
                            if v == max {
                                *d += g;
                            }
                        });
                }
            }
        }
    }
    Ok(Tensor::from_array(dx))
}
