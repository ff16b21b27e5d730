pub mod classifier;
pub mod impurity;
pub mod node;
pub mod params;
