//! # 常用接口模块
//!
//! 本模块提供单元测试用的断言宏，以及用于校验反向传播的数值梯度工具

pub mod gradient_check;
