//! # Provenance Flow Tests
//!
//! End-to-end flows through the string-routed invocation interface, the
//! way the host peer drives the contract. Every flow runs against the
//! in-memory adapters; the assertions cover:
//!
//! 1. **Happy path**: create, existence check, read back (exact wire JSON)
//! 2. **Guards**: duplicate create, malformed owners, unknown key
//! 3. **Environment failures**: backend outage, event rejection
//! 4. **Range reads**: every created record comes back

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use provenance_contract::prelude::*;

#[cfg(test)]
fn setup() -> (InvocationRouter, MemoryTransactionContext) {
    // RUST_LOG controls verbosity; repeated init attempts are fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let router = InvocationRouter::new(Arc::new(ProvenanceContract::new()));
    let ctx = MemoryTransactionContext::with_client("client-A");
    (router, ctx)
}

#[cfg(test)]
fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
async fn create_item_1(router: &InvocationRouter, ctx: &MemoryTransactionContext) {
    router
        .invoke(
            ctx,
            transaction_names::CREATE_PROV,
            &args(&[
                "item-1",
                "ipfs://x",
                "abc123",
                "2024-01-01T00:00:00Z",
                "[\"org1\"]",
            ]),
        )
        .await
        .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The reference scenario: create item-1 as client-A, read back the
    /// exact wire document.
    #[tokio::test]
    async fn create_and_read_back_exact_wire_json() {
        let (router, ctx) = setup();

        let resp = router
            .invoke(&ctx, transaction_names::RESOURCE_EXISTS, &args(&["item-1"]))
            .await
            .unwrap();
        assert_eq!(resp.as_utf8_lossy(), "false");

        create_item_1(&router, &ctx).await;

        let resp = router
            .invoke(&ctx, transaction_names::RESOURCE_EXISTS, &args(&["item-1"]))
            .await
            .unwrap();
        assert_eq!(resp.as_utf8_lossy(), "true");

        let resp = router
            .invoke(&ctx, transaction_names::READ_PROV, &args(&["item-1"]))
            .await
            .unwrap();
        assert_eq!(
            resp.as_utf8_lossy(),
            "{\"uri\":\"ipfs://x\",\"hash\":\"abc123\",\
             \"timestamp\":\"2024-01-01T00:00:00Z\",\"version\":0,\
             \"owners\":[\"org1\",\"client-A\"]}"
        );
    }

    #[tokio::test]
    async fn created_record_parses_with_creator_appended() {
        let (router, ctx) = setup();
        create_item_1(&router, &ctx).await;

        let resp = router
            .invoke(&ctx, transaction_names::READ_PROV, &args(&["item-1"]))
            .await
            .unwrap();

        let record = ProvenanceRecord::from_json(&resp.payload).unwrap();
        assert_eq!(record.version, ProvenanceRecord::INITIAL_VERSION);
        assert_eq!(record.owners, vec!["org1", "client-A"]);
        assert!(check_record_invariants(&record, &ClientId::new("client-A")));
    }

    #[tokio::test]
    async fn resource_created_event_carries_stored_record() {
        let (router, ctx) = setup();
        create_item_1(&router, &ctx).await;

        let events = ctx.recorder().events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, event_names::RESOURCE_CREATED);
        assert_eq!(events[0].payload, ctx.ledger().get("item-1").unwrap());
    }

    #[tokio::test]
    async fn duplicate_create_fails_and_preserves_first_record() {
        let (router, ctx) = setup();
        create_item_1(&router, &ctx).await;
        let original = ctx.ledger().get("item-1");

        let err = router
            .invoke(
                &ctx,
                transaction_names::CREATE_PROV,
                &args(&["item-1", "ipfs://y", "fff", "2025-01-01T00:00:00Z", "[]"]),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            InvocationError::Contract(ContractError::DuplicateKey { pid }) if pid == "item-1"
        ));
        assert_eq!(ctx.ledger().get("item-1"), original);
        assert_eq!(ctx.recorder().events().len(), 1);
    }

    #[tokio::test]
    async fn malformed_owners_leaves_world_state_untouched() {
        let (router, ctx) = setup();

        let err = router
            .invoke(
                &ctx,
                transaction_names::CREATE_PROV,
                &args(&["item-1", "u", "h", "t", "not valid json"]),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            InvocationError::Contract(ContractError::MalformedOwners(_))
        ));
        assert!(ctx.ledger().keys().is_empty());
        assert!(ctx.recorder().events().is_empty());
    }

    #[tokio::test]
    async fn read_of_never_created_pid_is_not_found() {
        let (router, ctx) = setup();

        let err = router
            .invoke(&ctx, transaction_names::READ_PROV, &args(&["ghost"]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            InvocationError::Contract(ContractError::NotFound { key }) if key == "ghost"
        ));
    }

    #[tokio::test]
    async fn backend_outage_is_a_state_error_not_not_found() {
        let (router, ctx) = setup();
        ctx.ledger().fail_with(StateError::Unavailable);

        let err = router
            .invoke(&ctx, transaction_names::RESOURCE_EXISTS, &args(&["item-1"]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            InvocationError::Contract(ContractError::State(StateError::Unavailable))
        ));

        let err = router
            .invoke(&ctx, transaction_names::READ_PROV, &args(&["item-1"]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            InvocationError::Contract(ContractError::State(_))
        ));
    }

    #[tokio::test]
    async fn event_rejection_aborts_the_transaction() {
        let (router, ctx) = setup();
        ctx.recorder()
            .reject_with(EventError::Rejected("queue full".to_string()));

        let err = router
            .invoke(
                &ctx,
                transaction_names::CREATE_PROV,
                &args(&["item-1", "u", "h", "t", "[]"]),
            )
            .await
            .unwrap_err();

        // An emit failure surfaces as its own error kind; the host then
        // discards the whole proposed write set.
        assert!(matches!(
            err,
            InvocationError::Contract(ContractError::EventEmit(_))
        ));
    }

    #[tokio::test]
    async fn read_all_returns_every_created_record_in_key_order() {
        let (router, ctx) = setup();

        for (pid, uri) in [("item-2", "ipfs://b"), ("item-1", "ipfs://a")] {
            router
                .invoke(
                    &ctx,
                    transaction_names::CREATE_PROV,
                    &args(&[pid, uri, "h", "t", "[]"]),
                )
                .await
                .unwrap();
        }

        let resp = router
            .invoke(&ctx, transaction_names::READ_ALL_PROV, &[])
            .await
            .unwrap();

        let all: Vec<serde_json::Value> = serde_json::from_slice(&resp.payload).unwrap();
        assert_eq!(all.len(), 2);
        // BTreeMap-backed state yields lexicographic key order.
        assert_eq!(all[0]["uri"], "ipfs://a");
        assert_eq!(all[1]["uri"], "ipfs://b");
    }

    #[tokio::test]
    async fn read_all_passes_through_non_json_values() {
        let (router, ctx) = setup();
        ctx.ledger().seed("legacy", b"plain text".to_vec());

        let resp = router
            .invoke(&ctx, transaction_names::READ_ALL_PROV, &[])
            .await
            .unwrap();

        let all: Vec<serde_json::Value> = serde_json::from_slice(&resp.payload).unwrap();
        assert_eq!(all, vec![serde_json::Value::String("plain text".to_string())]);
    }

    #[tokio::test]
    async fn unknown_function_and_bad_arity_are_rejected() {
        let (router, ctx) = setup();

        let err = router.invoke(&ctx, "HLF_DeleteProv", &[]).await.unwrap_err();
        assert!(matches!(err, InvocationError::UnknownFunction(_)));

        let err = router
            .invoke(&ctx, transaction_names::READ_PROV, &[])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            InvocationError::BadArity {
                expected: 1,
                actual: 0,
                ..
            }
        ));
    }
}
