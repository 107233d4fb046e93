/*
 * @Description  : 张量的文本显示。按最外层维度逐层展开为嵌套的方括号，
 *                 每进入一层缩进一格，最后一行附上形状。
 */

use crate::tensor::Tensor;
use ndarray::ArrayViewD;
use std::fmt;

/// 把`view`写成嵌套列表；`indent`为当前所在的层数
fn write_nested(f: &mut fmt::Formatter<'_>, view: ArrayViewD<'_, f64>, indent: usize) -> fmt::Result {
    if view.ndim() == 0 {
        return write!(f, "{:8.4}", view.first().copied().unwrap_or_default());
    }

    // 非最内层的子块之间换行对齐
    let separator = if view.ndim() > 1 {
        format!(",\n{}", " ".repeat(indent + 1))
    } else {
        ", ".to_string()
    };
    write!(f, "[")?;
    for (i, sub) in view.outer_iter().enumerate() {
        if i > 0 {
            write!(f, "{separator}")?;
        }
        write_nested(f, sub, indent + 1)?;
    }
    write!(f, "]")
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nested(f, self.view(), 0)?;
        writeln!(f, "\n形状: {:?}", self.shape())
    }
}
