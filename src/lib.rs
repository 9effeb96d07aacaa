//! 一个通用的列表接口，以及两种可以互换的实现：
//! 基于动态数组的 [`ArrayList`] 和基于单向链表的 [`LinkedList`]。

pub mod array_list;
pub mod error;
pub mod linked_list;
pub mod list;
pub mod person;

pub use array_list::ArrayList;
pub use error::IndexOutOfRange;
pub use linked_list::LinkedList;
pub use list::List;
pub use person::Person;
