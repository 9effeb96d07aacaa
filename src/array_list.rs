use std::fmt::{self, Debug};
use std::mem;

use log::{debug, trace};

use crate::error::IndexOutOfRange;
use crate::list::List;

/// 新建数组的默认容量
pub const DEFAULT_CAPACITY: usize = 4;

/// 基于连续数组的列表
///
/// `items.len()` 是容量，`len` 是元素个数，下标 `len` 及之后的槽位都是 `None`。
/// 追加时如果数组满了，容量翻倍，摊还下来每次追加是 O(1)。
pub struct ArrayList<T> {
    items: Box<[Option<T>]>,
    len: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

impl<T> ArrayList<T> {
    /// 创建一个容量为 [`DEFAULT_CAPACITY`] 的空列表
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// 创建一个指定初始容量的空列表，容量至少为 1
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayList {
            items: empty_slots(capacity.max(1)),
            len: 0,
        }
    }

    /// 当前数组的长度
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// 换成两倍长的新数组，元素按原顺序搬过去
    fn grow(&mut self) {
        let capacity = self.items.len() * 2;
        debug!(
            "array list full at {} elements, growing capacity {} -> {}",
            self.len,
            self.items.len(),
            capacity
        );

        let mut items = empty_slots(capacity);
        for (new, old) in items.iter_mut().zip(self.items.iter_mut()) {
            *new = old.take();
        }
        self.items = items;
    }

    fn push_back(&mut self, item: T) {
        if self.len == self.items.len() {
            self.grow();
        }
        self.items[self.len] = Some(item);
        self.len += 1;
    }

    fn occupied(&self) -> impl Iterator<Item = &T> {
        self.items[..self.len].iter().flatten()
    }
}

impl<T: PartialEq> List<T> for ArrayList<T> {
    fn add(&mut self, item: T) {
        self.push_back(item);
    }

    fn remove(&mut self, item: &T) -> Option<T> {
        let Some(index) = self.occupied().position(|x| x == item) else {
            trace!("array list: no element to remove among {}", self.len);
            return None;
        };

        let removed = self.items[index].take();
        // 把空出来的槽位一路换到末尾，后面的元素各前移一位
        for j in index..self.len - 1 {
            self.items.swap(j, j + 1);
        }
        self.len -= 1;
        removed
    }

    fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.items[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    fn set(&mut self, index: usize, item: T) -> Result<T, IndexOutOfRange> {
        let len = self.len;
        self.items[..len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .map(|slot| mem::replace(slot, item))
            .ok_or(IndexOutOfRange { index, len })
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(vec: Vec<T>) -> Self {
        let mut list = ArrayList::new();
        for item in vec {
            list.push_back(item);
        }
        list
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("len", &self.len)
            .field("capacity", &self.items.len())
            .field("items", &DebugItems(self))
            .finish()
    }
}

struct DebugItems<'a, T>(&'a ArrayList<T>);

impl<T: Debug> Debug for DebugItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.occupied()).finish()
    }
}

impl<T: Debug> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;

        let mut iter = self.occupied();
        if let Some(first) = iter.next() {
            write!(f, "{:?}", first)?;
            for item in iter {
                write!(f, ", {:?}", item)?;
            }
        }

        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new() {
        let list: ArrayList<i32> = ArrayList::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert!(list.is_empty());
    }

    #[test]
    fn test_grow_keeps_order() {
        let mut list = ArrayList::new();
        for x in 1..=4 {
            list.add(x);
        }
        assert_eq!(list.capacity(), 4);

        // 第五个元素触发扩容
        list.add(5);
        assert_eq!(list.capacity(), 8);
        assert_eq!(list.len(), 5);
        for i in 0..5 {
            assert_eq!(list.get(i), Ok(&(i as i32 + 1)));
        }

        for x in 6..=9 {
            list.add(x);
        }
        assert_eq!(list.capacity(), 16);
        assert_eq!(list.to_string(), "[1, 2, 3, 4, 5, 6, 7, 8, 9]");
    }

    #[test]
    fn test_with_capacity() {
        let mut list = ArrayList::with_capacity(0);
        assert_eq!(list.capacity(), 1);
        list.add('a');
        list.add('b');
        list.add('c');
        assert_eq!(list.capacity(), 4);
        assert_eq!(list.to_string(), "['a', 'b', 'c']");
    }

    #[test]
    fn test_remove_clears_trailing_slot() {
        let mut list = ArrayList::from(vec![
            String::from("a"),
            String::from("b"),
            String::from("c"),
        ]);
        assert_eq!(list.remove(&String::from("a")), Some(String::from("a")));
        assert_eq!(list.len(), 2);
        assert!(list.items[2].is_none());
        assert_eq!(list.to_string(), r#"["b", "c"]"#);

        assert_eq!(list.remove(&String::from("c")), Some(String::from("c")));
        assert!(list.items[1].is_none());
        assert_eq!(list.remove(&String::from("b")), Some(String::from("b")));
        assert!(list.items.iter().all(Option::is_none));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_never_shrinks() {
        let mut list = ArrayList::from(vec![1, 2, 3, 4, 5]);
        let capacity = list.capacity();
        for x in 1..=5 {
            list.remove(&x);
        }
        assert!(list.is_empty());
        assert_eq!(list.capacity(), capacity);
    }

    #[test]
    fn test_set_replaces() {
        let mut list = ArrayList::from(vec![1, 2, 3]);
        assert_eq!(list.set(1, 20), Ok(2));
        assert_eq!(list.to_string(), "[1, 20, 3]");
        assert_eq!(list.set(3, 40), Err(IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn test_get_ignores_stale_capacity() {
        let mut list = ArrayList::new();
        list.add(1);
        list.add(2);
        list.remove(&2);
        // 容量还在，但 len 才是权威
        assert_eq!(list.get(1), Err(IndexOutOfRange { index: 1, len: 1 }));
    }

    #[test]
    fn test_debug() {
        let list = ArrayList::from(vec![1, 2]);
        assert_eq!(
            format!("{:?}", list),
            "ArrayList { len: 2, capacity: 4, items: [1, 2] }"
        );
    }

    #[test]
    fn test_from_vec_matches_add() {
        let from_vec = ArrayList::from(vec![1, 2]);
        let mut added = ArrayList::new();
        added.add(1);
        added.add(2);
        assert_eq!(from_vec.capacity(), DEFAULT_CAPACITY);
        assert_eq!(from_vec.capacity(), added.capacity());
        assert_eq!(from_vec.to_string(), added.to_string());

        // 超过默认容量时同样按翻倍增长
        let from_vec = ArrayList::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(from_vec.capacity(), 8);
    }
}
