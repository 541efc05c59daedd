pub mod batch;
pub mod head;
pub mod skip;
