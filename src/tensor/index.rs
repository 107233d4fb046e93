use super::Tensor;
use std::ops::{Index, IndexMut};

// 单个元素的引用式索引，如`tensor[[n, c, i, j]]`。索引越界或阶数不符时会panic（同切片索引）。
impl<const N: usize> Index<[usize; N]> for Tensor {
    type Output = f64;

    fn index(&self, index: [usize; N]) -> &Self::Output {
        &self.data[&index[..]]
    }
}

impl<const N: usize> IndexMut<[usize; N]> for Tensor {
    fn index_mut(&mut self, index: [usize; N]) -> &mut Self::Output {
        &mut self.data[&index[..]]
    }
}
