//! Drydock image discovery
//!
//! This crate provides the discovery-and-analysis front end for Drydock:
//! finding Dockerfiles under a source tree, resolving image names,
//! extracting parent-image references and build-context file dependencies,
//! and assembling them into an image catalog.
//!
//! Building, pushing and registry interaction live in sibling crates; the
//! catalog produced here drives their build ordering and cache invalidation.

pub mod catalog;
pub mod config;
pub mod context;
pub mod discovery;
pub mod dockerfile;
pub mod error;
pub mod model;
pub mod resolver;
pub mod tags;

pub use catalog::list_images;
pub use config::DrydockConfig;
pub use context::copy_paths;
pub use discovery::dockerfiles;
pub use dockerfile::DockerfileParser;
pub use error::{DiscoveryError, Result};
pub use model::Image;
pub use resolver::{image_name, short_name};
pub use tags::extra_tags;
