/*
 * @Description  : ReLU激活层，逐元素 out = max(x, 0)。
 */

use super::expect_shape;
use crate::errors::LayerError;
use crate::tensor::Tensor;
use ndarray::Zip;

/// ReLU前向传播的缓存：原始输入
#[derive(Debug)]
pub struct ReluCache {
    input: Tensor,
}

impl ReluCache {
    pub fn input(&self) -> &Tensor {
        &self.input
    }
}

/// 前向传播。输入可为任意形状。
///
/// 输出是新分配的张量，与缓存中的输入互不共享存储：
/// 调用方修改输出不会影响之后反向传播读到的掩码。
pub fn forward(x: &Tensor) -> (Tensor, ReluCache) {
    let out = Tensor::from_array(x.array().mapv(|v| if v < 0.0 { 0.0 } else { v }));
    (out, ReluCache { input: x.clone() })
}

/// 反向传播。原输入恰为0的位置视为“通过”（掩码为`x >= 0`）。
pub fn backward(dout: &Tensor, cache: ReluCache) -> Result<Tensor, LayerError> {
    let ReluCache { input } = cache;
    expect_shape(dout, input.shape(), "ReLU上游梯度的形状须与输入一致")?;

    let dx = Zip::from(dout.array())
        .and(input.array())
        .map_collect(|&g, &x| if x >= 0.0 { g } else { 0.0 });
    Ok(Tensor::from_array(dx))
}
