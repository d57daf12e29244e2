pub mod pagination;
pub mod stapi;
