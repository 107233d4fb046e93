/*
 * @Description  : 张量。所有层算子的输入、输出、梯度都是张量。
 *                 底层为`ndarray`的动态维数组，且始终保持标准（行优先）内存布局；
 *                 每个运算都返回新分配的张量，张量之间从不共享存储。
 */

use ndarray::{ArrayD, IxDyn};
use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::errors::ShapeError;

mod index;
mod ops {
    pub mod add;
    pub mod mat_mul;
    pub mod mul;
    pub mod others;
    pub mod sub;
}
mod print;
mod property;
mod save_load;
mod shape;

#[cfg(test)]
mod tests;

/// 定义张量的结构体。其可以是标量、向量、矩阵或更高维度的数组。
/// 元素类型为`f64`：数值梯度检验（中心差分）在单精度下无法达到所需的相对误差。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tensor {
    data: ArrayD<f64>,
}

impl Tensor {
    /// 创建一个张量。`data`的长度必须和`shape`中所有元素的乘积相等，否则会panic；
    /// 需要可恢复的错误时请使用[`Tensor::try_new`]。
    pub fn new(data: &[f64], shape: &[usize]) -> Self {
        Self::try_new(data, shape).unwrap_or_else(|err| panic!("{err}"))
    }

    /// [`Tensor::new`]的可失败版本
    pub fn try_new(data: &[f64], shape: &[usize]) -> Result<Self, ShapeError> {
        let count_mismatch = || ShapeError::ElementCountMismatch {
            shape: shape.to_vec(),
            len: data.len(),
        };
        if data.len() != shape.iter().product::<usize>() {
            return Err(count_mismatch());
        }
        let data = ArrayD::from_shape_vec(IxDyn(shape), data.to_vec()).map_err(|_| count_mismatch())?;
        Ok(Self { data })
    }

    /// 创建一个全零张量
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: ArrayD::zeros(IxDyn(shape)),
        }
    }

    /// 创建一个随机张量，其值在[min, max]的闭区间
    pub fn new_random(min: f64, max: f64, shape: &[usize]) -> Self {
        Self::new_random_with_rng(min, max, shape, &mut rand::thread_rng())
    }

    /// 同[`Tensor::new_random`]，但使用调用方给定的随机数生成器（便于单元测试复现）
    pub fn new_random_with_rng<R: Rng + ?Sized>(
        min: f64,
        max: f64,
        shape: &[usize],
        rng: &mut R,
    ) -> Self {
        let uniform = Uniform::from(min..=max);
        let data = (0..shape.iter().product::<usize>())
            .map(|_| uniform.sample(rng))
            .collect::<Vec<_>>();
        Self::new(&data, shape)
    }
}

// crate内部与`ndarray`互转
impl Tensor {
    /// 由任意维数的`ndarray`数组构建张量，必要时重排为标准内存布局
    pub(crate) fn from_array<D: ndarray::Dimension>(array: ndarray::Array<f64, D>) -> Self {
        let data = array.into_dyn();
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Self { data }
    }

    pub(crate) const fn array(&self) -> &ArrayD<f64> {
        &self.data
    }
}
