//! Schema catalog: what databases, tables and columns a server has.
crate::reexport!(datatype);
crate::reexport!(column);
crate::reexport!(table);
crate::reexport!(database);
crate::reexport!(server);
crate::reexport!(table_ref);
crate::reexport!(introspect);
crate::reexport!(mysql);

use std::collections::HashMap;
use tokio::sync::RwLock;

pub type Data<T> = RwLock<HashMap<String, T>>;
