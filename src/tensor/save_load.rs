use std::io::{Read, Write};

use super::Tensor;
use crate::errors::TensorIoError;

// 保存和加载张量（如训练驱动在两次运行之间保存权重、梯度）
impl Tensor {
    /// 将单个Tensor以bincode格式写入`writer`
    pub fn save<W: Write>(&self, writer: &mut W) -> Result<(), TensorIoError> {
        let serialized_data = bincode::serialize(&self.data)?;
        writer.write_all(&serialized_data)?;
        Ok(())
    }

    /// 从`reader`加载单个Tensor
    pub fn load<R: Read>(reader: &mut R) -> Result<Self, TensorIoError> {
        let mut serialized_data = Vec::new();
        reader.read_to_end(&mut serialized_data)?;
        let data: ndarray::ArrayD<f64> = bincode::deserialize(&serialized_data)?;
        Ok(Self::from_array(data))
    }
}
