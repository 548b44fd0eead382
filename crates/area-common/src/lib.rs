//! Common types shared by the area parser, the projection layer and the
//! grid index mappers.

pub mod config;
pub mod error;
pub mod extent;
pub mod proj4;

pub use config::AreaConfig;
pub use error::{AreaError, AreaResult};
pub use extent::AreaExtent;
pub use proj4::{Proj4Args, Proj4Params};
