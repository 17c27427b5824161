use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid deployer address: `{0}`")]
    InvalidDeployerAddress(String),
}
