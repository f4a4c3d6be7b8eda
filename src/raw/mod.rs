mod arena;
mod handle;
mod node;
mod raw_skiplist;

pub(crate) use handle::Handle;
pub use handle::NodeId;
pub(crate) use raw_skiplist::RawSkipList;
