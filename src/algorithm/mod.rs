/// Region labelling and post-carving connectivity repair
pub mod connectivity;
/// Randomized depth-first carving and entrance creation
pub mod generation;
/// Breadth-first solving and solution overlay
pub mod solver;
