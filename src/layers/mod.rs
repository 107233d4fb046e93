/*
 * @Description  : 手写CNN的层算子：全连接、ReLU、卷积、最大池化。
 *                 每种层都是一对无状态的纯函数：
 *                 - `forward` 返回输出与该层专属的缓存；
 *                 - `backward` 按值接收（消费）这份缓存，返回对输入（及参数）的梯度。
 *                 层与层的组合、调用顺序、参数更新均由外部训练驱动负责。
 */

mod cache;
pub mod conv;
pub mod dense;
mod params;
pub mod pool;
pub mod relu;

pub use cache::{LayerCache, LayerKind};
pub use conv::{ConvCache, ConvGrads};
pub use dense::{DenseCache, DenseGrads};
pub use params::{ConvParams, PoolParams};
pub use pool::PoolCache;
pub use relu::ReluCache;

#[cfg(test)]
mod tests;

use crate::errors::ShapeError;
use crate::tensor::Tensor;
use ndarray::{ArrayView4, Ix4};

/// 将张量视作4阶数组[N, C, H, W]，阶数不符时报错
fn as_4d<'a>(tensor: &'a Tensor, message: &str) -> Result<ArrayView4<'a, f64>, ShapeError> {
    tensor
        .view()
        .into_dimensionality::<Ix4>()
        .map_err(|_| ShapeError::DimensionMismatch {
            expected: 4,
            got: tensor.dimension(),
            message: message.to_string(),
        })
}

fn expect_dimension(tensor: &Tensor, expected: usize, message: &str) -> Result<(), ShapeError> {
    if tensor.dimension() != expected {
        return Err(ShapeError::DimensionMismatch {
            expected,
            got: tensor.dimension(),
            message: message.to_string(),
        });
    }
    Ok(())
}

fn expect_shape(tensor: &Tensor, expected: &[usize], message: &str) -> Result<(), ShapeError> {
    if tensor.shape() != expected {
        return Err(ShapeError::ShapeMismatch {
            expected: expected.to_vec(),
            got: tensor.shape().to_vec(),
            message: message.to_string(),
        });
    }
    Ok(())
}
