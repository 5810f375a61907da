pub mod quote;
pub mod recommendation;
