use crate::errors::{LayerError, Operator, ShapeError};
use crate::tensor::Tensor;
use ndarray::{ArrayView2, Ix2};

fn as_matrix(tensor: &Tensor) -> Result<ArrayView2<'_, f64>, ShapeError> {
    tensor
        .data
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|_| ShapeError::DimensionMismatch {
            expected: 2,
            got: tensor.dimension(),
            message: "矩阵乘法的操作数必须是矩阵".to_string(),
        })
}

impl Tensor {
    /// 矩阵乘法。只接受2阶张量，且前一个张量的列数须等于后一个张量的行数。
    pub fn mat_mul(&self, other: &Self) -> Result<Self, LayerError> {
        let lhs = as_matrix(self)?;
        let rhs = as_matrix(other)?;
        if lhs.ncols() != rhs.nrows() {
            return Err(ShapeError::OperatorError {
                operator: Operator::MatMul,
                tensor1_shape: self.shape().to_vec(),
                tensor2_shape: other.shape().to_vec(),
            }
            .into());
        }
        Ok(Self::from_array(lhs.dot(&rhs)))
    }
}
