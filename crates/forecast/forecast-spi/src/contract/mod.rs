//! Contract module containing trait definitions for forecast operations

mod exogenous_model;

pub use exogenous_model::ExogenousModel;
