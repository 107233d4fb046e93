/*
 * @Description  : 层参数（超参数）。由调用方按次传入、只读，字段固定：
 *                 - 卷积：{stride, pad}
 *                 - 最大池化：{stride, height, width}
 *                 两者都可从JSON（serde_json）解析，缺失或多余的字段均视为配置错误。
 */

use serde::{Deserialize, Serialize};

use crate::errors::{ComparisonOperator, ConfigurationError};

fn must_be_positive(value_name: &str, value: usize) -> Result<(), ConfigurationError> {
    if value == 0 {
        return Err(ConfigurationError::ValueMustSatisfyComparison {
            value_name: value_name.to_string(),
            operator: ComparisonOperator::GreaterOrEqual,
            threshold: 1,
        });
    }
    Ok(())
}

/// 卷积层参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvParams {
    /// 窗口在高、宽两个方向上的步长
    pub stride: usize,
    /// 四周补零的圈数
    pub pad: usize,
}

impl ConvParams {
    pub fn new(stride: usize, pad: usize) -> Result<Self, ConfigurationError> {
        let params = Self { stride, pad };
        params.validate()?;
        Ok(params)
    }

    /// 从JSON文本解析，如`{"stride": 1, "pad": 1}`
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let params: Self = serde_json::from_str(json)
            .map_err(|err| ConfigurationError::InvalidParams(err.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        must_be_positive("stride", self.stride)
    }
}

/// 最大池化层参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolParams {
    pub stride: usize,
    /// 池化窗口的高
    pub height: usize,
    /// 池化窗口的宽
    pub width: usize,
}

impl PoolParams {
    pub fn new(stride: usize, height: usize, width: usize) -> Result<Self, ConfigurationError> {
        let params = Self {
            stride,
            height,
            width,
        };
        params.validate()?;
        Ok(params)
    }

    /// 从JSON文本解析，如`{"stride": 2, "height": 2, "width": 2}`
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let params: Self = serde_json::from_str(json)
            .map_err(|err| ConfigurationError::InvalidParams(err.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        must_be_positive("stride", self.stride)?;
        must_be_positive("height", self.height)?;
        must_be_positive("width", self.width)
    }
}
