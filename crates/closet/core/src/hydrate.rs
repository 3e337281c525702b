//! Closet hydration.
//!
//! Server payloads ship a flat piece list plus id-reference wiring maps
//! instead of a linked object graph. Hydration resolves every fit piece and
//! collection entry through those maps, filters out anything that points at
//! an archived or missing entity, and clears the maps on the result.
//!
//! Missing references are expected (the server may still reference a piece
//! archived on another device) and are always recovered by filtering, never
//! surfaced. Hydration is idempotent: a fit piece without a wiring entry
//! keeps its already-resolved reference, so a second pass over hydrated
//! input returns the same structure.

use crate::state::{Closet, Fit, FitColl, FitPiece, FitPieces, PieceId};

/// Resolves a raw closet payload into a fully linked closet.
///
/// Steps, in order:
/// 1. every fit piece's `piece` (and `layer_piece`, when mapped) is resolved
///    through the wiring maps against the piece list
/// 2. fit pieces whose piece cannot be resolved are dropped
/// 3. fits left with no pieces are dropped
/// 4. each collection's fit list is rebuilt from its ordered id list,
///    silently skipping unresolved ids
/// 5. collections left with no fits are dropped
/// 6. all three wiring maps are cleared on the returned closet
pub fn hydrate(mut closet: Closet) -> Closet {
    let fits = std::mem::take(&mut closet.fits);
    closet.fits = fits
        .into_iter()
        .filter_map(|fit| hydrate_fit(fit, &closet))
        .collect();

    let fit_colls = std::mem::take(&mut closet.fit_colls);
    closet.fit_colls = fit_colls
        .into_iter()
        .filter_map(|coll| hydrate_fit_coll(coll, &closet))
        .collect();

    closet.fit_piece_id_map.clear();
    closet.fit_layer_piece_id_map.clear();
    closet.fit_coll_fit_ids.clear();

    closet
}

fn hydrate_fit(fit: Fit, closet: &Closet) -> Option<Fit> {
    let mut pieces = FitPieces::default();
    for fit_piece in fit.pieces.iter() {
        if let Some(resolved) = hydrate_fit_piece(fit_piece, closet) {
            // Cannot overflow: the source list is bounded by the same cap.
            let _ = pieces.push(resolved);
        }
    }

    if pieces.is_empty() {
        return None;
    }
    Some(Fit {
        id: fit.id,
        name: fit.name,
        pieces,
    })
}

fn hydrate_fit_piece(fit_piece: &FitPiece, closet: &Closet) -> Option<FitPiece> {
    // A wiring entry wins; otherwise keep the reference a previous hydration
    // already resolved. Either way the piece must still exist.
    let piece_id = closet
        .fit_piece_id_map
        .get(&fit_piece.id)
        .copied()
        .or(fit_piece.piece)
        .filter(|id| closet.piece(*id).is_some())?;

    let layer_piece: Option<PieceId> = closet
        .fit_layer_piece_id_map
        .get(&fit_piece.id)
        .copied()
        .or(fit_piece.layer_piece)
        .filter(|id| closet.piece(*id).is_some());

    Some(FitPiece {
        id: fit_piece.id,
        slot: fit_piece.slot,
        piece: Some(piece_id),
        layer_piece,
        offset_y: fit_piece.offset_y,
    })
}

fn hydrate_fit_coll(coll: FitColl, closet: &Closet) -> Option<FitColl> {
    let ordered = match closet.fit_coll_fit_ids.get(&coll.id) {
        Some(ids) => ids.clone(),
        None => coll.fits.clone(),
    };

    let fits: Vec<_> = ordered
        .into_iter()
        .filter(|id| closet.fit(*id).is_some())
        .collect();

    if fits.is_empty() {
        return None;
    }
    Some(FitColl {
        id: coll.id,
        name: coll.name,
        fits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FitCollId, FitId, FitPieceId, GarmentKind, Piece, Slot};

    fn piece(id: u64, garment: GarmentKind) -> Piece {
        Piece::new(PieceId(id), format!("img-{id}"), garment)
    }

    fn raw_fit(id: u64, fit_pieces: &[(u64, Slot)]) -> Fit {
        let mut pieces = FitPieces::default();
        for (fp_id, slot) in fit_pieces {
            pieces
                .push(FitPiece::new(FitPieceId(*fp_id), *slot))
                .expect("at most one fit piece per slot");
        }
        Fit::new(FitId(id), format!("fit-{id}")).with_pieces(pieces)
    }

    /// Payload with one fully resolvable fit and one fit pointing at a
    /// missing piece.
    fn sample_closet() -> Closet {
        let mut closet = Closet::empty();
        closet.pieces = vec![
            piece(10, GarmentKind::Top),
            piece(11, GarmentKind::Bottom),
            piece(12, GarmentKind::Top).with_layer(crate::state::LayerKind::Outer),
        ];
        closet.fits = vec![
            raw_fit(1, &[(100, Slot::Top), (101, Slot::Bottom)]),
            raw_fit(2, &[(102, Slot::Headwear)]),
        ];
        closet.fit_colls = vec![
            FitColl::new(FitCollId(1), "keep"),
            FitColl::new(FitCollId(2), "drop"),
        ];
        closet.fit_piece_id_map.insert(FitPieceId(100), PieceId(10));
        closet.fit_piece_id_map.insert(FitPieceId(101), PieceId(11));
        // fit piece 102 references a piece that was archived server-side
        closet.fit_piece_id_map.insert(FitPieceId(102), PieceId(99));
        closet
            .fit_layer_piece_id_map
            .insert(FitPieceId(100), PieceId(12));
        closet
            .fit_coll_fit_ids
            .insert(FitCollId(1), vec![FitId(1), FitId(2)]);
        closet.fit_coll_fit_ids.insert(FitCollId(2), vec![FitId(2)]);
        closet
    }

    #[test]
    fn resolves_pieces_and_layer_pieces() {
        let closet = hydrate(sample_closet());

        let fit = closet.fit(FitId(1)).expect("fit 1 survives");
        let top = fit.piece_in_slot(Slot::Top).unwrap();
        assert_eq!(top.piece, Some(PieceId(10)));
        assert_eq!(top.layer_piece, Some(PieceId(12)));

        let bottom = fit.piece_in_slot(Slot::Bottom).unwrap();
        assert_eq!(bottom.piece, Some(PieceId(11)));
        assert_eq!(bottom.layer_piece, None);
    }

    #[test]
    fn drops_fits_whose_pieces_all_failed_to_resolve() {
        let closet = hydrate(sample_closet());

        assert!(closet.fit(FitId(2)).is_none());
        assert_eq!(closet.fits.len(), 1);
    }

    #[test]
    fn rebuilds_collections_and_drops_empty_ones() {
        let closet = hydrate(sample_closet());

        // Collection 1 keeps only the fit that survived; collection 2
        // referenced nothing but the dropped fit and vanishes with it.
        let keep = closet.fit_coll(FitCollId(1)).unwrap();
        assert_eq!(keep.fits, vec![FitId(1)]);
        assert!(closet.fit_coll(FitCollId(2)).is_none());
    }

    #[test]
    fn clears_wiring_maps() {
        let closet = hydrate(sample_closet());
        assert!(closet.wiring_is_empty());
    }

    #[test]
    fn hydration_is_idempotent() {
        let once = hydrate(sample_closet());
        let twice = hydrate(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_closet_is_a_no_op() {
        let closet = hydrate(Closet::empty());
        assert_eq!(closet, Closet::empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decodes_and_hydrates_a_json_payload() {
        let payload = serde_json::json!({
            "pieces": [
                {
                    "id": 10,
                    "image_ref": "img-10",
                    "garment": "Top",
                    "layer": "None",
                    "favorite": false,
                    "in_closet": true,
                    "tags": []
                }
            ],
            "fits": [
                {
                    "id": 1,
                    "name": "from-server",
                    "pieces": [
                        { "id": 100, "slot": "Top", "piece": null, "layer_piece": null, "offset_y": 4 }
                    ]
                }
            ],
            "fit_colls": [],
            "fit_piece_id_map": { "100": 10 },
            "fit_layer_piece_id_map": {},
            "fit_coll_fit_ids": {}
        });

        let closet: Closet = serde_json::from_value(payload).unwrap();
        let hydrated = hydrate(closet);

        let fit = hydrated.fit(FitId(1)).unwrap();
        let top = fit.piece_in_slot(Slot::Top).unwrap();
        assert_eq!(top.piece, Some(PieceId(10)));
        assert_eq!(top.offset_y, 4);
        assert!(hydrated.wiring_is_empty());
    }

    #[test]
    fn collection_order_follows_the_id_list() {
        let mut closet = sample_closet();
        closet.pieces.push(piece(13, GarmentKind::Footwear));
        closet.fits.push(raw_fit(3, &[(103, Slot::Footwear)]));
        closet.fit_piece_id_map.insert(FitPieceId(103), PieceId(13));
        closet
            .fit_coll_fit_ids
            .insert(FitCollId(1), vec![FitId(3), FitId(1)]);

        let hydrated = hydrate(closet);
        let coll = hydrated.fit_coll(FitCollId(1)).unwrap();
        assert_eq!(coll.fits, vec![FitId(3), FitId(1)]);
    }
}
