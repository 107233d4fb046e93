/*
 * @Description  : 错误类型。层算子的错误分为两大类：
 *                 1. 形状错误（ShapeError）：张量阶数/维度与约定不符，或输出尺寸公式无法整除；
 *                 2. 配置错误（ConfigurationError）：层参数缺失或取值无效（如 stride ≤ 0）。
 *                 任一错误都会使本次调用整体失败，不存在“部分结果”。
 */

use thiserror::Error;
mod ops;
pub use self::ops::*;

use crate::layers::LayerKind;

/// 形状相关错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShapeError {
    #[error("{message}：预期{expected}阶张量，实际得到{got}阶")]
    DimensionMismatch {
        expected: usize,
        got: usize,
        message: String,
    },
    #[error("{message}：预期形状{expected:?}，实际得到{got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },
    #[error(
        "输出尺寸不是整数：{axis}方向上（{extent} - {kernel}）无法被步长{stride}整除"
    )]
    IndivisibleOutputSize {
        axis: Axis2d,
        extent: usize,
        kernel: usize,
        stride: usize,
    },
    #[error("窗口{window:?}超出了（填充后的）输入尺寸{input:?}")]
    WindowTooLarge {
        window: (usize, usize),
        input: (usize, usize),
    },
    #[error("数据长度{len}与形状{shape:?}的元素个数不一致")]
    ElementCountMismatch { shape: Vec<usize>, len: usize },
    #[error("形状不一致，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}")]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },
}

/// 参数配置错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{value_name}须{operator}{threshold}")]
    ValueMustSatisfyComparison {
        value_name: String,
        operator: ComparisonOperator,
        threshold: usize,
    },
    #[error("层参数无效：{0}")]
    InvalidParams(String),
    #[error("缓存类型不匹配：预期{expected}层的缓存，实际得到{got}层的缓存")]
    CacheKindMismatch {
        expected: LayerKind,
        got: LayerKind,
    },
}

/// 层算子（前向/反向）统一返回的错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayerError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl LayerError {
    pub const fn is_shape_error(&self) -> bool {
        matches!(self, Self::Shape(_))
    }

    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// 张量持久化（保存/加载）错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorIoError {
    #[error("张量读写失败：{0}")]
    Io(String),
    #[error("张量（反）序列化失败：{0}")]
    Serialization(String),
}

impl From<std::io::Error> for TensorIoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<bincode::Error> for TensorIoError {
    fn from(err: bincode::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
