use std::fmt::{self, Debug};
use std::mem;

use log::trace;

use crate::error::IndexOutOfRange;
use crate::list::List;

/// 单向链表的节点
#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// 单向链表
///
/// 每个节点拥有它的后继，头节点归链表所有，所以不可能成环。
/// 没有尾指针：追加、按下标读写都要从头走，都是 O(n)。
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// 创建一个空链表
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// 在链表尾部添加元素
    fn push_back(&mut self, value: T) {
        let new_node = Box::new(Node { value, next: None });

        let mut current = &mut self.head;

        while let Some(node) = current {
            current = &mut node.next;
        }

        *current = Some(new_node);
        self.len += 1;
    }

    // 先按 len 检查下标，走链时不会中途遇到 None，ok_or 只是省掉 unwrap
    fn node(&self, index: usize) -> Result<&Node<T>, IndexOutOfRange> {
        IndexOutOfRange::check(index, self.len)?;

        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current.and_then(|node| node.next.as_deref());
        }
        current.ok_or(IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    fn node_mut(&mut self, index: usize) -> Result<&mut Node<T>, IndexOutOfRange> {
        let len = self.len;
        IndexOutOfRange::check(index, len)?;

        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current.and_then(|node| node.next.as_deref_mut());
        }
        current.ok_or(IndexOutOfRange { index, len })
    }

    /// 指向第 `index` 个节点的那条链接：0 是 `head`，否则是前驱的 `next`
    fn link_mut(&mut self, index: usize) -> Option<&mut Option<Box<Node<T>>>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    fn values(&self) -> Values<'_, T> {
        Values {
            next: self.head.as_deref(),
        }
    }
}

impl<T: PartialEq> List<T> for LinkedList<T> {
    fn add(&mut self, item: T) {
        trace!("linked list: appending after {} nodes", self.len);
        self.push_back(item);
    }

    fn remove(&mut self, item: &T) -> Option<T> {
        let Some(index) = self.values().position(|value| value == item) else {
            trace!("linked list: no node to remove among {}", self.len);
            return None;
        };

        // 摘下匹配的节点，让它的前驱（或 head）直接指向它的后继
        let link = self.link_mut(index)?;
        let node = *link.take()?;
        *link = node.next;
        self.len -= 1;
        Some(node.value)
    }

    fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.node(index).map(|node| &node.value)
    }

    fn set(&mut self, index: usize, item: T) -> Result<T, IndexOutOfRange> {
        self.node_mut(index)
            .map(|node| mem::replace(&mut node.value, item))
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// 按顺序借出每个节点的值，只在内部用于查找和格式化
struct Values<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(vec: Vec<T>) -> Self {
        let mut list = LinkedList::new();
        let mut tail = &mut list.head;
        for value in vec {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
            list.len += 1;
        }
        list
    }
}

// 逐个释放节点，避免长链表递归 drop 把栈撑爆
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("len", &self.len)
            .field("head", &self.head)
            .finish()
    }
}

/// 实现格式化打印
impl<T: Debug> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;

        let mut iter = self.values();
        if let Some(first) = iter.next() {
            write!(f, "{:?}", first)?;
            for item in iter {
                write!(f, ", {:?}", item)?;
            }
        }

        write!(f, "]")
    }
}
