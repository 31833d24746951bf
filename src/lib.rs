//! Minimal linked collections: an insertion-only [`Bag`](bag::Bag) and a FIFO [`Queue`](queue::Queue).
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bag;
mod chain;
pub mod queue;
#[cfg(feature = "sink")]
mod sink;

pub use chain::{IntoIter, Iter};

pub mod prelude {
    pub use crate::bag::Bag;
    pub use crate::queue::Queue;
}
