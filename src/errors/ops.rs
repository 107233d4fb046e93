use std::fmt::{self, Display};

/// 张量的二元运算符
#[derive(Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    MatMul,
    DotSum,
}
impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operation_name = match self {
            Operator::Add => "相加",
            Operator::Sub => "相减",
            Operator::MatMul => "矩阵相乘",
            Operator::DotSum => "点积和",
        };
        write!(f, "{}", operation_name)
    }
}

/// 比较运算符
#[derive(Debug, PartialEq, Eq)]
pub enum ComparisonOperator {
    GreaterOrEqual,
}
impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator_name = match self {
            ComparisonOperator::GreaterOrEqual => "≥",
        };
        write!(f, "{}", operator_name)
    }
}

/// 二维空间中的方向，用于定位卷积/池化尺寸错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis2d {
    Height,
    Width,
}
impl Display for Axis2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis2d::Height => write!(f, "高度"),
            Axis2d::Width => write!(f, "宽度"),
        }
    }
}
