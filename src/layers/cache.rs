/*
 * @Description  : 各层缓存的统一枚举。供需要把不同层的缓存放进同一个栈里的训练驱动使用：
 *                 前向时逐层压栈，反向时逐层弹出并转换回具体的缓存类型。
 */

use std::fmt::{self, Display};

use super::{ConvCache, DenseCache, PoolCache, ReluCache};
use crate::errors::ConfigurationError;

/// 层的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Dense,
    Relu,
    Conv,
    Pool,
}
impl Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayerKind::Dense => "全连接",
            LayerKind::Relu => "ReLU",
            LayerKind::Conv => "卷积",
            LayerKind::Pool => "最大池化",
        };
        write!(f, "{}", name)
    }
}

/// 任一层的缓存
#[derive(Debug)]
pub enum LayerCache {
    Dense(DenseCache),
    Relu(ReluCache),
    Conv(ConvCache),
    Pool(PoolCache),
}

impl LayerCache {
    pub const fn kind(&self) -> LayerKind {
        match self {
            Self::Dense(_) => LayerKind::Dense,
            Self::Relu(_) => LayerKind::Relu,
            Self::Conv(_) => LayerKind::Conv,
            Self::Pool(_) => LayerKind::Pool,
        }
    }

    /// 该层前向输入的形状，即反向传播返回的输入梯度的形状
    pub fn input_shape(&self) -> Vec<usize> {
        match self {
            Self::Dense(cache) => cache.input().shape().to_vec(),
            Self::Relu(cache) => cache.input().shape().to_vec(),
            Self::Conv(cache) => cache.input_shape(),
            Self::Pool(cache) => cache.input().shape().to_vec(),
        }
    }
}

macro_rules! impl_layer_cache_conversions {
    ($($variant:ident => $cache:ty),* $(,)?) => {
        $(
            impl From<$cache> for LayerCache {
                fn from(cache: $cache) -> Self {
                    Self::$variant(cache)
                }
            }

            impl TryFrom<LayerCache> for $cache {
                type Error = ConfigurationError;

                fn try_from(cache: LayerCache) -> Result<Self, Self::Error> {
                    match cache {
                        LayerCache::$variant(inner) => Ok(inner),
                        other => Err(ConfigurationError::CacheKindMismatch {
                            expected: LayerKind::$variant,
                            got: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_layer_cache_conversions! {
    Dense => DenseCache,
    Relu => ReluCache,
    Conv => ConvCache,
    Pool => PoolCache,
}
