//! End-to-end service flows over a scripted session channel:
//! fetch → hydrate → store, compose → save → store, and the failure paths
//! that must leave local state untouched.

use std::sync::Arc;

use serde_json::json;

use closet_core::{
    Closet, Fit, FitColl, FitCollId, FitId, FitPiece, FitPieceId, FitPieces, GarmentKind,
    LayerKind, Piece, PieceId, Slot,
};
use runtime::{
    ClosetService, Event, FitService, MessageKind, MockSessionChannel, RuntimeError, SessionEvent,
    Store, StoreAction, Topic,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// One piece per slot, plus an outer layer candidate.
fn wardrobe() -> Vec<Piece> {
    vec![
        Piece::new(PieceId(1), "cap", GarmentKind::Headwear),
        Piece::new(PieceId(2), "tee", GarmentKind::Top),
        Piece::new(PieceId(3), "jeans", GarmentKind::Bottom),
        Piece::new(PieceId(4), "boots", GarmentKind::Footwear),
        Piece::new(PieceId(5), "jacket", GarmentKind::Top).with_layer(LayerKind::Outer),
    ]
}

fn hydrated_closet() -> Closet {
    let mut closet = Closet::empty();
    for piece in wardrobe() {
        closet.upsert_piece(piece);
    }
    closet
}

/// Raw server payload: fit pieces unresolved, wiring maps populated.
fn raw_closet_payload() -> serde_json::Value {
    let mut closet = hydrated_closet();
    let mut pieces = FitPieces::default();
    pieces
        .push(FitPiece::new(FitPieceId(100), Slot::Top))
        .unwrap();
    closet.fits = vec![Fit::new(FitId(1), "server fit").with_pieces(pieces)];
    closet.fit_piece_id_map.insert(FitPieceId(100), PieceId(2));
    serde_json::to_value(closet).unwrap()
}

struct Harness {
    store: Store,
    channel: MockSessionChannel,
    closets: ClosetService,
    fits: FitService,
}

fn harness() -> Harness {
    init_tracing();
    let store = Store::builder().build();
    let channel = MockSessionChannel::new();
    let shared = Arc::new(channel.clone());
    let closets = ClosetService::new(shared.clone(), store.handle());
    let fits = FitService::new(shared, store.handle());
    Harness {
        store,
        channel,
        closets,
        fits,
    }
}

#[tokio::test]
async fn refresh_hydrates_the_payload_into_the_store() {
    let h = harness();
    h.channel.push_ok(raw_closet_payload());

    h.closets.refresh().await.unwrap();

    let closet = h.store.handle().query_closet().await.unwrap();
    assert!(closet.wiring_is_empty());
    let fit = closet.fit(FitId(1)).expect("fit survives hydration");
    assert_eq!(
        fit.piece_in_slot(Slot::Top).unwrap().piece,
        Some(PieceId(2))
    );

    let sent = h.channel.sent_requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].kind, MessageKind::FetchCloset);

    h.store.shutdown().await.unwrap();
}

#[tokio::test]
async fn compose_and_save_lands_the_fit_in_the_store() {
    let h = harness();
    let handle = h.store.handle();
    handle
        .dispatch(StoreAction::ClosetLoaded {
            closet: hydrated_closet(),
        })
        .await
        .unwrap();
    let mut fit_rx = handle.subscribe(Topic::Fit);

    let session = h.fits.start_create().await.unwrap();
    let draft = session.save_request("first fit");
    assert_eq!(draft.pieces.len(), 4, "every slot had a candidate");

    h.channel.push_ok(json!({
        "fit_id": 42,
        "fit_piece_ids": [500, 501, 502, 503],
    }));

    let fit = h.fits.save(&session, "first fit").await.unwrap();
    assert_eq!(fit.id, FitId(42));
    assert_eq!(fit.name, "first fit");

    let closet = handle.query_closet().await.unwrap();
    let stored = closet.fit(FitId(42)).expect("saved fit is in the store");
    assert_eq!(stored, &fit);

    let event = fit_rx.recv().await.unwrap();
    assert!(matches!(
        event,
        Event::Fit(runtime::FitEvent::Saved { id: FitId(42) })
    ));

    h.store.shutdown().await.unwrap();
}

#[tokio::test]
async fn rejected_save_leaves_the_store_untouched() {
    let h = harness();
    let handle = h.store.handle();
    handle
        .dispatch(StoreAction::ClosetLoaded {
            closet: hydrated_closet(),
        })
        .await
        .unwrap();
    let mut session_rx = handle.subscribe(Topic::Session);

    let session = h.fits.start_create().await.unwrap();
    h.channel.push_failure(503, "storage unavailable");

    let err = h.fits.save(&session, "doomed").await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Rejected {
            kind: MessageKind::SaveFit,
            code: 503,
            ..
        }
    ));

    // No optimistic write happened; the failure surfaced on the bus instead.
    let closet = handle.query_closet().await.unwrap();
    assert!(closet.fits.is_empty());
    let event = session_rx.recv().await.unwrap();
    assert!(matches!(
        event,
        Event::Session(SessionEvent::RequestFailed {
            kind: MessageKind::SaveFit,
            code: 503,
            ..
        })
    ));

    h.store.shutdown().await.unwrap();
}

#[tokio::test]
async fn public_closet_view_swaps_in_and_back_out() {
    let h = harness();
    let handle = h.store.handle();
    handle
        .dispatch(StoreAction::ClosetLoaded {
            closet: hydrated_closet(),
        })
        .await
        .unwrap();

    let mut public = Closet::empty();
    public.upsert_piece(Piece::new(PieceId(90), "their-tee", GarmentKind::Top));
    h.channel.push_ok(serde_json::to_value(&public).unwrap());

    h.closets.enter_public_closet("friend").await.unwrap();
    let active = handle.query_active_closet().await.unwrap();
    assert!(active.piece(PieceId(90)).is_some());
    assert!(active.piece(PieceId(1)).is_none());

    // Composer sessions draw from the active view.
    let session = h.fits.start_create().await.unwrap();
    assert_eq!(
        session.slot(Slot::Top).state.piece(),
        Some(PieceId(90)),
        "the only top candidate is the public one"
    );

    h.closets.leave_public_closet().await.unwrap();
    let active = handle.query_active_closet().await.unwrap();
    assert!(active.piece(PieceId(1)).is_some());

    h.store.shutdown().await.unwrap();
}

#[tokio::test]
async fn archive_fit_cascades_into_collections() {
    let h = harness();
    let handle = h.store.handle();

    let mut closet = hydrated_closet();
    let mut pieces = FitPieces::default();
    pieces
        .push(FitPiece::new(FitPieceId(1), Slot::Top).with_piece(PieceId(2)))
        .unwrap();
    closet.upsert_fit(Fit::new(FitId(7), "weekend").with_pieces(pieces));
    closet.upsert_fit_coll(FitColl::new(FitCollId(3), "casual").with_fits(vec![FitId(7)]));
    handle
        .dispatch(StoreAction::ClosetLoaded { closet })
        .await
        .unwrap();

    h.channel.push_ok(serde_json::Value::Null);
    h.fits.archive(FitId(7)).await.unwrap();

    let closet = handle.query_closet().await.unwrap();
    assert!(closet.fit(FitId(7)).is_none());
    assert!(closet.fit_coll(FitCollId(3)).is_none());

    h.store.shutdown().await.unwrap();
}

#[tokio::test]
async fn channel_errors_pass_through_without_a_bus_event() {
    let h = harness();
    // Empty script: the mock behaves like a dead channel.
    let err = h.closets.refresh().await.unwrap_err();
    assert!(matches!(err, RuntimeError::Channel(_)));

    let closet = h.store.handle().query_closet().await.unwrap();
    assert_eq!(closet, Closet::empty());

    h.store.shutdown().await.unwrap();
}
