/*
 * @Description  : 张量的加法，实现了两个形状严格一致的张量“逐元素”相加，以及张量与纯数相加，并返回一个新的张量。
 *                 形状不一致属于调用方的契约错误，会直接panic。
 */

use crate::errors::{Operator, ShapeError};
use crate::tensor::Tensor;
use std::ops::Add;

impl Add<f64> for &Tensor {
    type Output = Tensor;

    fn add(self, scalar: f64) -> Tensor {
        Tensor {
            data: &self.data + scalar,
        }
    }
}

impl Add for &Tensor {
    type Output = Tensor;

    fn add(self, other: &Tensor) -> Tensor {
        assert!(
            self.is_same_shape(other),
            "{}",
            ShapeError::OperatorError {
                operator: Operator::Add,
                tensor1_shape: self.shape().to_vec(),
                tensor2_shape: other.shape().to_vec(),
            }
        );
        Tensor {
            data: &self.data + &other.data,
        }
    }
}

impl Add for Tensor {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}
