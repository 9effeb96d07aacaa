use std::error::Error;
use std::fmt;

/// 下标越界：`get`/`set` 的下标不在 `[0, len)` 之内
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl IndexOutOfRange {
    /// 检查下标，合法时原样返回
    pub fn check(index: usize, len: usize) -> Result<usize, Self> {
        if index < len {
            Ok(index)
        } else {
            Err(IndexOutOfRange { index, len })
        }
    }
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for list of length {}",
            self.index, self.len
        )
    }
}

impl Error for IndexOutOfRange {}
