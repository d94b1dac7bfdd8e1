pub mod connector;
pub mod model;
pub mod plugin;
pub mod source;

pub use connector::{Connector, ConnectorKind};
pub use model::{Model, OrderOption, Paginated, QueryOrder, QueryParam, QueryWhere, Record, WhereOp};
pub use plugin::Plugin;
pub use source::{DslSource, FsSource};
