use std::fmt;
use std::str::FromStr;

use tracing::debug;
use wdl_store::StateStore;
use wdl_types::WarehouseRecord;

use crate::error::{DispatchError, DispatchResult};

/// Well-known key written by the `init` operation.
pub const INIT_KEY: &str = "wdl/init";

/// The closed set of operations the ledger exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Store the single argument under [`INIT_KEY`].
    Init,
    /// Decode a ledger payload, reconcile it, and commit the result.
    Ingest,
    /// Direct key/value write passthrough.
    Write,
    /// Direct key lookup.
    Read,
}

impl Operation {
    /// Canonical operation name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Ingest => "ingest",
            Self::Write => "write",
            Self::Read => "read",
        }
    }

    /// Number of arguments the operation requires.
    pub fn arity(&self) -> usize {
        match self {
            Self::Init | Self::Read => 1,
            Self::Ingest | Self::Write => 2,
        }
    }
}

impl FromStr for Operation {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" => Ok(Self::Init),
            "ingest" => Ok(Self::Ingest),
            "write" => Ok(Self::Write),
            "read" => Ok(Self::Read),
            other => Err(DispatchError::UnknownOperation(other.to_owned())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a successful dispatch produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A value was written; nothing to return.
    Written,
    /// A value was read back.
    Value(Vec<u8>),
    /// An ingestion committed this reconciled record.
    Ingested(WarehouseRecord),
}

/// Route a named operation with its arguments to the matching handler.
///
/// The name is parsed into [`Operation`] first, then the argument count is
/// validated; both failures happen before the store is touched.
pub fn dispatch(
    store: &dyn StateStore,
    name: &str,
    args: &[String],
) -> DispatchResult<DispatchOutcome> {
    let operation: Operation = name.parse()?;
    expect_args(operation, args)?;
    debug!(operation = %operation, args = args.len(), "dispatching");

    match operation {
        Operation::Init => {
            put(store, INIT_KEY, args[0].as_bytes())?;
            Ok(DispatchOutcome::Written)
        }
        Operation::Ingest => {
            let record = wdl_ingest::ingest(store, &args[0], args[1].as_bytes())?;
            Ok(DispatchOutcome::Ingested(record))
        }
        Operation::Write => {
            put(store, &args[0], args[1].as_bytes())?;
            Ok(DispatchOutcome::Written)
        }
        Operation::Read => {
            let key = &args[0];
            let value = store
                .get(key)
                .map_err(|source| DispatchError::StoreFailure {
                    key: key.clone(),
                    source,
                })?;
            match value {
                Some(bytes) => Ok(DispatchOutcome::Value(bytes)),
                None => Err(DispatchError::NotFound { key: key.clone() }),
            }
        }
    }
}

fn expect_args(operation: Operation, args: &[String]) -> DispatchResult<()> {
    let expected = operation.arity();
    if args.len() != expected {
        return Err(DispatchError::ArgumentCount {
            operation: operation.name(),
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

fn put(store: &dyn StateStore, key: &str, value: &[u8]) -> DispatchResult<()> {
    store.put(key, value).map_err(|source| DispatchError::StoreFailure {
        key: key.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wdl_ingest::IngestError;
    use wdl_store::{InMemoryStateStore, StoreResult};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    /// Store stub that fails the test if any method is reached.
    struct PanicStore;

    impl StateStore for PanicStore {
        fn put(&self, key: &str, _value: &[u8]) -> StoreResult<()> {
            panic!("put({key}) should not be reached");
        }
        fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
            panic!("get({key}) should not be reached");
        }
    }

    // -----------------------------------------------------------------------
    // Name parsing
    // -----------------------------------------------------------------------

    #[test]
    fn parse_known_operations() {
        assert_eq!("init".parse::<Operation>().unwrap(), Operation::Init);
        assert_eq!("ingest".parse::<Operation>().unwrap(), Operation::Ingest);
        assert_eq!("write".parse::<Operation>().unwrap(), Operation::Write);
        assert_eq!("read".parse::<Operation>().unwrap(), Operation::Read);
    }

    #[test]
    fn unknown_operation_names_the_offender() {
        let err = dispatch(&PanicStore, "frobnicate", &args(&[])).unwrap_err();
        match err {
            DispatchError::UnknownOperation(name) => assert_eq!(name, "frobnicate"),
            other => panic!("expected UnknownOperation, got {other}"),
        }
    }

    #[test]
    fn operation_display_matches_wire_name() {
        assert_eq!(format!("{}", Operation::Ingest), "ingest");
    }

    // -----------------------------------------------------------------------
    // Argument count checks (before the store is touched)
    // -----------------------------------------------------------------------

    #[test]
    fn write_with_wrong_arity_never_reaches_the_store() {
        let err = dispatch(&PanicStore, "write", &args(&["only-key"])).unwrap_err();
        match err {
            DispatchError::ArgumentCount {
                operation,
                expected,
                actual,
            } => {
                assert_eq!(operation, "write");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected ArgumentCount, got {other}"),
        }
    }

    #[test]
    fn init_requires_exactly_one_argument() {
        let err = dispatch(&PanicStore, "init", &args(&["a", "b"])).unwrap_err();
        assert!(matches!(err, DispatchError::ArgumentCount { expected: 1, .. }));
    }

    #[test]
    fn read_requires_exactly_one_argument() {
        let err = dispatch(&PanicStore, "read", &args(&[])).unwrap_err();
        assert!(matches!(err, DispatchError::ArgumentCount { expected: 1, .. }));
    }

    // -----------------------------------------------------------------------
    // Handlers
    // -----------------------------------------------------------------------

    #[test]
    fn init_stores_under_well_known_key() {
        let store = InMemoryStateStore::new();
        let outcome = dispatch(&store, "init", &args(&["genesis"])).unwrap();
        assert_eq!(outcome, DispatchOutcome::Written);
        assert_eq!(
            store.get(INIT_KEY).unwrap().as_deref(),
            Some(b"genesis".as_ref())
        );
    }

    #[test]
    fn write_then_read_roundtrip() {
        let store = InMemoryStateStore::new();
        dispatch(&store, "write", &args(&["k2", "hello"])).unwrap();
        let outcome = dispatch(&store, "read", &args(&["k2"])).unwrap();
        assert_eq!(outcome, DispatchOutcome::Value(b"hello".to_vec()));
    }

    #[test]
    fn read_missing_key_is_not_found() {
        let store = InMemoryStateStore::new();
        let err = dispatch(&store, "read", &args(&["ghost"])).unwrap_err();
        match err {
            DispatchError::NotFound { key } => assert_eq!(key, "ghost"),
            other => panic!("expected NotFound, got {other}"),
        }
    }

    #[test]
    fn ingest_commits_and_reports_the_record() {
        let store = InMemoryStateStore::new();
        let payload =
            r#"[{"Vendor":"V1","Items":[{"Name":"A","Qty":10}],"Defects":[{"Name":"D","Qty":2}]}]"#;
        let outcome = dispatch(&store, "ingest", &args(&["k1", payload])).unwrap();

        match outcome {
            DispatchOutcome::Ingested(record) => {
                assert_eq!(record.vendor, "V1");
                assert_eq!(record.scanned_item, 8);
            }
            other => panic!("expected Ingested, got {other:?}"),
        }

        let stored = store.get("k1").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&stored).unwrap();
        assert_eq!(value["ScannedItem"], 8);
        assert_eq!(value["Defect"], 2);
    }

    #[test]
    fn ingest_with_empty_result_propagates_the_key() {
        let store = InMemoryStateStore::new();
        let payload = r#"[{"Vendor":"V1","Items":[{"Qty":5}],"Defects":[]}]"#;
        let err = dispatch(&store, "ingest", &args(&["k1", payload])).unwrap_err();
        match err {
            DispatchError::Ingest(IngestError::EmptyResult { key }) => assert_eq!(key, "k1"),
            other => panic!("expected EmptyResult, got {other}"),
        }
        assert!(store.get("k1").unwrap().is_none());
    }
}
