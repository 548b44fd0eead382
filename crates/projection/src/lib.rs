//! Coordinate reference system transformations.
//!
//! Implements the projections needed by area definitions from scratch on a
//! spherical Earth, selected by the proj4 `proj=` parameter. Bulk
//! transformations run through an [`Executor`], which is the only place the
//! caller's parallelism hint is consumed.

pub mod cartesian;
pub mod cylindrical;
pub mod error;
pub mod executor;
pub mod geographic;
pub mod lambert;
pub mod params;
pub mod projector;
pub mod stereographic;

pub use cartesian::{lonlat_to_cartesian, EARTH_RADIUS};
pub use cylindrical::{EquidistantCylindrical, Mercator};
pub use error::{ProjectionError, ProjectionResult};
pub use executor::Executor;
pub use geographic::Geographic;
pub use lambert::LambertConformal;
pub use projector::{from_proj4, Projector};
pub use stereographic::Stereographic;
