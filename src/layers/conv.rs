/*
 * @Description  : 卷积层（朴素滑窗实现）。
 *
 * 约定：
 * - 输入 x: [N, C, H, W]，卷积核 w: [F, C, HH, WW]，偏置 b: [F]
 * - 输出 out: [N, F, Hout, Wout]，其中
 *   Hout = 1 + (H + 2·pad - HH) / stride，Wout 同理；不能整除时报错，而非截断
 * - 缓存中保存的是“补零后”的输入：反向传播先把梯度散布到补零坐标系中，再裁掉边框
 */

use ndarray::{Array4, s};

use super::params::ConvParams;
use super::{as_4d, expect_dimension, expect_shape};
use crate::errors::{Axis2d, LayerError, ShapeError};
use crate::tensor::Tensor;

/// 卷积层前向传播的缓存。只能由[`forward`]构建。
#[derive(Debug)]
pub struct ConvCache {
    /// 补零后的输入，形状为[N, C, H + 2·pad, W + 2·pad]（不是原始输入）
    padded_input: Tensor,
    weight: Tensor,
    bias: Tensor,
    params: ConvParams,
}

impl ConvCache {
    pub fn padded_input(&self) -> &Tensor {
        &self.padded_input
    }

    pub fn weight(&self) -> &Tensor {
        &self.weight
    }

    pub fn bias(&self) -> &Tensor {
        &self.bias
    }

    pub const fn params(&self) -> ConvParams {
        self.params
    }

    /// 原始（未补零）输入的形状
    pub fn input_shape(&self) -> Vec<usize> {
        let mut shape = self.padded_input.shape().to_vec();
        shape[2] -= 2 * self.params.pad;
        shape[3] -= 2 * self.params.pad;
        shape
    }
}

/// 卷积层的梯度，各自形状与对应的前向输入一致
#[derive(Debug, Clone, PartialEq)]
pub struct ConvGrads {
    pub dx: Tensor,
    pub dw: Tensor,
    pub db: Tensor,
}

/// 单个方向上的输出尺寸：(padded_extent - kernel)须能被stride整除
fn output_size(
    axis: Axis2d,
    padded_extent: usize,
    kernel: usize,
    stride: usize,
) -> Result<usize, ShapeError> {
    let span = padded_extent - kernel;
    if span % stride != 0 {
        return Err(ShapeError::IndivisibleOutputSize {
            axis,
            extent: padded_extent,
            kernel,
            stride,
        });
    }
    Ok(span / stride + 1)
}

/// 由补零后的输入尺寸与卷积核尺寸计算(Hout, Wout)
fn output_hw(
    padded_hw: (usize, usize),
    kernel_hw: (usize, usize),
    stride: usize,
) -> Result<(usize, usize), ShapeError> {
    let ((hp, wp), (hh, ww)) = (padded_hw, kernel_hw);
    if hh > hp || ww > wp {
        return Err(ShapeError::WindowTooLarge {
            window: kernel_hw,
            input: padded_hw,
        });
    }
    Ok((
        output_size(Axis2d::Height, hp, hh, stride)?,
        output_size(Axis2d::Width, wp, ww, stride)?,
    ))
}

/// 前向传播
pub fn forward(
    x: &Tensor,
    w: &Tensor,
    b: &Tensor,
    params: ConvParams,
) -> Result<(Tensor, ConvCache), LayerError> {
    params.validate()?;
    let x4 = as_4d(x, "卷积层输入须为[N, C, H, W]")?;
    let w4 = as_4d(w, "卷积核须为[F, C, HH, WW]")?;
    expect_dimension(b, 1, "卷积层偏置须为[F]")?;

    let (n, c, h, width) = x4.dim();
    let (f, _, hh, ww) = w4.dim();
    expect_shape(w, &[f, c, hh, ww], "卷积核的通道数须与输入一致")?;
    expect_shape(b, &[f], "卷积层偏置的长度须等于卷积核个数")?;

    let ConvParams { stride, pad } = params;
    let (hp, wp) = (h + 2 * pad, width + 2 * pad);
    let (out_h, out_w) = output_hw((hp, wp), (hh, ww), stride)?;

    let mut x_pad = Array4::<f64>::zeros((n, c, hp, wp));
    x_pad
        .slice_mut(s![.., .., pad..pad + h, pad..pad + width])
        .assign(&x4);

    let mut out = Array4::<f64>::zeros((n, f, out_h, out_w));
    for ni in 0..n {
        for fi in 0..f {
            for ci in 0..c {
                let kernel = w4.slice(s![fi, ci, .., ..]);
                for i in 0..out_h {
                    for j in 0..out_w {
                        let (hs, ws) = (i * stride, j * stride);
                        let patch = x_pad.slice(s![ni, ci, hs..hs + hh, ws..ws + ww]);
                        out[[ni, fi, i, j]] += (&patch * &kernel).sum();
                    }
                }
            }
            // 所有通道求和之后再加偏置
            let mut plane = out.slice_mut(s![ni, fi, .., ..]);
            plane += b[[fi]];
        }
    }

    let cache = ConvCache {
        padded_input: Tensor::from_array(x_pad),
        weight: w.clone(),
        bias: b.clone(),
        params,
    };
    Ok((Tensor::from_array(out), cache))
}

/// 反向传播
/// * `dout` - 上游梯度，形状为[N, F, Hout, Wout]
pub fn backward(dout: &Tensor, cache: ConvCache) -> Result<ConvGrads, LayerError> {
    let ConvCache {
        padded_input,
        weight,
        params,
        ..
    } = cache;
    let x_pad = as_4d(&padded_input, "卷积层缓存的输入须为[N, C, H, W]")?;
    let w4 = as_4d(&weight, "卷积核须为[F, C, HH, WW]")?;
    let (n, c, hp, wp) = x_pad.dim();
    let (f, _, hh, ww) = w4.dim();
    let ConvParams { stride, pad } = params;
    let (out_h, out_w) = output_hw((hp, wp), (hh, ww), stride)?;

    expect_shape(dout, &[n, f, out_h, out_w], "卷积层上游梯度须为[N, F, Hout, Wout]")?;
    let d4 = as_4d(dout, "卷积层上游梯度须为[N, F, Hout, Wout]")?;

    let db = dout.sum_axes(&[0, 2, 3])?;
    let mut dx_pad = Array4::<f64>::zeros((n, c, hp, wp));
    let mut dw = Array4::<f64>::zeros((f, c, hh, ww));
    for ni in 0..n {
        for fi in 0..f {
            for ci in 0..c {
                let kernel = w4.slice(s![fi, ci, .., ..]);
                for i in 0..out_h {
                    for j in 0..out_w {
                        let g = d4[[ni, fi, i, j]];
                        let (hs, ws) = (i * stride, j * stride);
                        // 步长小于卷积核时窗口会重叠，梯度须累加而非覆盖
                        dx_pad
                            .slice_mut(s![ni, ci, hs..hs + hh, ws..ws + ww])
                            .scaled_add(g, &kernel);
                        dw.slice_mut(s![fi, ci, .., ..])
                            .scaled_add(g, &x_pad.slice(s![ni, ci, hs..hs + hh, ws..ws + ww]));
                    }
                }
            }
        }
    }

    // 裁掉补零的边框；pad = 0 时为空操作
    let dx = dx_pad
        .slice(s![.., .., pad..hp - pad, pad..wp - pad])
        .to_owned();

    Ok(ConvGrads {
        dx: Tensor::from_array(dx),
        dw: Tensor::from_array(dw),
        db,
    })
}
