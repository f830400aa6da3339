pub mod models;
pub mod services;

pub use models::{AimLineItem, AimResponse, Outcome, ParameterSet};
pub use services::{
    AimClient, AimClientFactory, AimTransport, MerchantCredentials, ReqwestTransport,
    ResponseFormat,
};
