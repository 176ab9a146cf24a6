pub mod traits;
pub mod search_tables;
pub mod linear_queue;
pub mod indexed_heap;

pub use traits::{PriorityQueue, QueueStrategy};
pub use search_tables::SearchTables;
pub use linear_queue::LinearQueue;
pub use indexed_heap::IndexedBinaryHeap;
