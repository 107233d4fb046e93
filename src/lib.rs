//! # Only CNN
//!
//! `only_cnn`用纯rust手写卷积神经网络训练所需的前向/反向传播基本算子：
//! 全连接（dense）、ReLU、卷积（conv）与最大池化（pool），不依赖任何自动求导框架。
//!
//! 每个算子都是一对无状态的纯函数：`forward`返回输出和一份该层专属的缓存，
//! `backward`消费这份缓存并返回梯度。训练循环、损失函数、优化器与网络拓扑都由调用方负责。
//!
//! ```ignore
//! use only_cnn::{conv, pool, relu, layers::{ConvParams, PoolParams}};
//!
//! let (a, conv_cache) = conv::forward(&x, &w, &b, ConvParams::new(1, 1)?)?;
//! let (r, relu_cache) = relu::forward(&a);
//! let (out, pool_cache) = pool::forward(&r, PoolParams::new(2, 2, 2)?)?;
//!
//! let dr = pool::backward(&dout, pool_cache)?;
//! let da = relu::backward(&dr, relu_cache)?;
//! let grads = conv::backward(&da, conv_cache)?;
//! ```

pub mod errors;
pub mod layers;
pub mod tensor;
pub mod utils;

pub use layers::{conv, dense, pool, relu};
