use async_trait::async_trait;
use serde_json::Value;

use crate::errors::PluginError;

/// An externally hosted handler reached through `plugins.<name>.<method>`.
///
/// Transport is the implementor's concern; the dispatcher only forwards the
/// method name and the positional arguments and relays the result.
#[async_trait]
pub trait Plugin: Send + Sync {
    async fn exec(&self, method: &str, args: &[Value]) -> Result<Value, PluginError>;

    fn name(&self) -> &str;
}
