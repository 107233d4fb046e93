use super::Tensor;
use crate::errors::{LayerError, ShapeError};
use ndarray::{Ix2, IxDyn};

impl Tensor {
    /// 在元素总数不变的前提下改变形状，返回新张量
    pub fn reshape(&self, shape: &[usize]) -> Result<Self, LayerError> {
        let mismatch = || ShapeError::ElementCountMismatch {
            shape: shape.to_vec(),
            len: self.size(),
        };
        if self.size() != shape.iter().product::<usize>() {
            return Err(mismatch().into());
        }
        let data = self
            .data
            .clone()
            .into_shape(IxDyn(shape))
            .map_err(|_| mismatch())?;
        Ok(Self { data })
    }

    /// 矩阵（2阶张量）转置
    pub fn transpose(&self) -> Result<Self, LayerError> {
        let matrix = self
            .data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| ShapeError::DimensionMismatch {
                expected: 2,
                got: self.dimension(),
                message: "只有矩阵才能转置".to_string(),
            })?;
        Ok(Self::from_array(matrix.t().to_owned()))
    }
}
