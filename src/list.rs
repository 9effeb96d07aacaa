use crate::error::IndexOutOfRange;

/// 列表接口：值的序列 x(0)..x(n-1) 以及对它的操作
///
/// `remove` 按值删除，所以元素类型必须能做相等比较。
/// 整数、字符串按值比较，记录类型按字段比较（`#[derive(PartialEq)]`）。
pub trait List<T: PartialEq> {
    /// 在末尾追加 `item`
    fn add(&mut self, item: T);

    /// 删除第一个等于 `item` 的元素，后面的元素依次前移
    ///
    /// 找不到时列表保持不变，返回 `None`，这不算错误
    fn remove(&mut self, item: &T) -> Option<T>;

    /// 返回 x(index) 的引用
    fn get(&self, index: usize) -> Result<&T, IndexOutOfRange>;

    /// 把 x(index) 改成 `item`，返回旧值
    fn set(&mut self, index: usize, item: T) -> Result<T, IndexOutOfRange>;

    /// 元素个数
    fn len(&self) -> usize;

    /// 判断列表是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
