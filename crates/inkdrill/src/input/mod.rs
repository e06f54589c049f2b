pub mod normalize;
pub mod queue;
