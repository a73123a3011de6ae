//! The external contract accessor.

use crate::StoreError;

/// Async access to the on-chain key/value contract.
///
/// Reads of absent keys return empty bytes rather than an error. Callers
/// consult [`ContractAccessor::is_available`] before reading.
#[allow(async_fn_in_trait)]
pub trait ContractAccessor {
    /// Address of the deployed contract.
    async fn address(&self) -> Result<String, StoreError>;

    /// Whether the contract reports itself ready for reads and writes.
    async fn is_available(&self) -> Result<bool, StoreError>;

    /// Read the bytes stored under `key` (empty if absent).
    async fn get_data(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Write `value` under `key`, resolving once the transaction is accepted.
    async fn set_data(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Write `value` under `key` only if the key still holds `expected`.
    ///
    /// Returns `Ok(false)` when the current bytes differ. The default
    /// implementation reads, compares and writes as three separate calls, so
    /// it is only as atomic as the backend; accessors with a native
    /// conditional write should override it.
    async fn set_data_if(
        &self,
        key: &str,
        expected: &[u8],
        value: &[u8],
    ) -> Result<bool, StoreError> {
        let current = self.get_data(key).await?;
        if current != expected {
            return Ok(false);
        }
        self.set_data(key, value).await?;
        Ok(true)
    }
}

impl<T: ContractAccessor> ContractAccessor for std::sync::Arc<T> {
    async fn address(&self) -> Result<String, StoreError> {
        (**self).address().await
    }

    async fn is_available(&self) -> Result<bool, StoreError> {
        (**self).is_available().await
    }

    async fn get_data(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        (**self).get_data(key).await
    }

    async fn set_data(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).set_data(key, value).await
    }

    async fn set_data_if(
        &self,
        key: &str,
        expected: &[u8],
        value: &[u8],
    ) -> Result<bool, StoreError> {
        (**self).set_data_if(key, expected, value).await
    }
}
