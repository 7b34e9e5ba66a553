use crate::core::domain::Toolchain;

/// Finds the first usable toolchain, in candidate priority order.
#[mockall::automock]
pub trait ToolchainLocator: std::fmt::Debug + Send + Sync {
    fn locate(&self) -> Option<Toolchain>;
}
