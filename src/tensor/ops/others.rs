use crate::errors::{LayerError, Operator, ShapeError};
use crate::tensor::Tensor;
use ndarray::Axis;
use std::cmp::PartialEq;

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Tensor {
    /// 对张量中的所有元素求和
    pub fn sum(&self) -> f64 {
        self.data.sum()
    }

    /// 沿`axes`中列出的各个维度求和，并去掉这些维度。
    /// 如形状为[N, F, H, W]的张量沿`[0, 2, 3]`求和后形状为[F]。
    pub fn sum_axes(&self, axes: &[usize]) -> Result<Self, LayerError> {
        let mut sorted = axes.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if let Some(&axis) = sorted.last() {
            if axis >= self.dimension() {
                return Err(ShapeError::DimensionMismatch {
                    expected: axis + 1,
                    got: self.dimension(),
                    message: format!("求和的维度{axis}超出了张量的阶数"),
                }
                .into());
            }
        }
        // 从高维往低维依次消去，保证剩余维度的编号不受影响
        let data = sorted
            .iter()
            .rev()
            .fold(self.data.clone(), |acc, &axis| acc.sum_axis(Axis(axis)));
        Ok(Self::from_array(data))
    }

    /// 逐元素相乘后求和（点积和）。两个张量的形状须严格一致。
    pub fn dot_sum(&self, other: &Self) -> Result<f64, LayerError> {
        if !self.is_same_shape(other) {
            return Err(ShapeError::OperatorError {
                operator: Operator::DotSum,
                tensor1_shape: self.shape().to_vec(),
                tensor2_shape: other.shape().to_vec(),
            }
            .into());
        }
        Ok((&self.data * &other.data).sum())
    }
}
