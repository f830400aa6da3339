pub mod aim_client;
pub mod factory;
pub mod transport;

pub use aim_client::{AimClient, MerchantCredentials, ResponseFormat};
pub use factory::AimClientFactory;
pub use transport::{AimTransport, ReqwestTransport};
