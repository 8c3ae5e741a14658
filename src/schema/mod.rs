//! Chain-file schema - serde model of component descriptors and the builder
//! that turns them into typed components

pub mod descriptor;

pub use descriptor::{
    build_component, build_components, ChainFile, ComponentDescriptor, ParameterDescriptor,
};
