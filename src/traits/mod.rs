pub mod model;

pub use model::RequestModel;
