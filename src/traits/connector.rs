use async_trait::async_trait;
use std::any::Any;
use std::fmt;

use crate::errors::ConnectorResult;

/// Backend family a connector talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorKind {
    Database,
    KeyValue,
    DocumentStore,
}

impl fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectorKind::Database => "database",
            ConnectorKind::KeyValue => "key-value-store",
            ConnectorKind::DocumentStore => "document-store",
        };
        f.write_str(name)
    }
}

/// A live, named handle to a storage backend built from connector DSL.
///
/// A driver starts out empty (see the factory constructors) and becomes live
/// once [`Connector::register`] succeeds. After that the instance is shared
/// read-only through the connector table and owns its native handle until
/// [`Connector::close`] is called.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Parse the driver options from `dsl`, apply defaults and environment
    /// substitution, validate them and open the connection.
    async fn register(&mut self, file: &str, id: &str, dsl: &[u8]) -> ConnectorResult<()>;

    /// Release the native connection handle.
    async fn close(&self);

    fn id(&self) -> &str;

    fn kind(&self) -> ConnectorKind;

    fn is(&self, kind: ConnectorKind) -> bool {
        self.kind() == kind
    }

    /// The assembled connection string, credentials included.
    fn dsn(&self) -> &str;

    /// Downcast hook for models that need the concrete client.
    fn as_any(&self) -> &dyn Any;
}
